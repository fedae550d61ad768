use thiserror::Error;

/// Input errors raised by the scan pipeline.
///
/// Decode misses are *not* errors — they come back as `Ok(None)`.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The supplied file does not declare an image media type.
    #[error("Invalid file type '{media_type}': please select an image file")]
    NotAnImage { media_type: String },

    /// The clipboard payload contains no image-typed item.
    #[error("No image found in clipboard")]
    NoImageInClipboard,

    /// The bytes could not be decoded as an image.
    #[error("Failed to load image: {0}")]
    ImageLoad(#[from] image::ImageError),

    /// Reading the file from disk failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
