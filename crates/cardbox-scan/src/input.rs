//! Input containers for the scan pipeline.
//!
//! The pipeline does not read from cameras or clipboards itself; UI
//! collaborators hand it these plain byte containers, each carrying the
//! media type the source declared.

use std::path::Path;

use crate::error::ScanError;

/// An image file handed to the pipeline: raw bytes plus the declared media
/// type.  Anything whose media type is not `image/*` is rejected before a
/// decode is attempted.
#[derive(Debug, Clone)]
pub struct ImageFile {
    /// Display name, used in log records only.
    pub name: String,
    /// Declared media type, e.g. `image/png`.
    pub media_type: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    /// Read a file from disk, deriving the media type from its extension.
    pub fn from_path(path: &Path) -> Result<Self, ScanError> {
        let bytes = std::fs::read(path)?;
        let format = image::ImageFormat::from_path(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self {
            name,
            media_type: format.to_mime_type().to_string(),
            bytes,
        })
    }

    pub fn is_image(&self) -> bool {
        self.media_type.starts_with("image/")
    }
}

/// A single item in a pasted clipboard payload.
#[derive(Debug, Clone)]
pub struct ClipboardItem {
    pub media_type: String,
    pub bytes: Vec<u8>,
}

/// An ordered clipboard payload as delivered by a paste event.
#[derive(Debug, Clone, Default)]
pub struct ClipboardPayload {
    pub items: Vec<ClipboardItem>,
}

impl ClipboardPayload {
    pub fn new(items: Vec<ClipboardItem>) -> Self {
        Self { items }
    }

    /// First image-typed item, if any.
    pub fn first_image(&self) -> Option<&ClipboardItem> {
        self.items
            .iter()
            .find(|item| item.media_type.starts_with("image/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_media_types_are_accepted() {
        let file = ImageFile::new("x.png", "image/png", vec![]);
        assert!(file.is_image());

        let file = ImageFile::new("x.pdf", "application/pdf", vec![]);
        assert!(!file.is_image());
    }

    #[test]
    fn first_image_skips_non_image_items() {
        let payload = ClipboardPayload::new(vec![
            ClipboardItem {
                media_type: "text/plain".into(),
                bytes: b"hello".to_vec(),
            },
            ClipboardItem {
                media_type: "image/png".into(),
                bytes: vec![1, 2, 3],
            },
        ]);
        assert_eq!(payload.first_image().unwrap().media_type, "image/png");
    }

    #[test]
    fn first_image_is_none_without_images() {
        let payload = ClipboardPayload::default();
        assert!(payload.first_image().is_none());
    }
}
