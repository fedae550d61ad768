//! The decode pipeline: validate input, load pixels, matrix pass, linear
//! fallback.

use cardbox_shared::DecodedCode;

use crate::error::ScanError;
use crate::input::{ClipboardPayload, ImageFile};
use crate::linear::try_linear;
use crate::matrix::try_matrix_gray;

/// Decode an image file.
///
/// Rejects non-image media types up front, loads the pixels at the image's
/// intrinsic dimensions, then runs the matrix pass and — only if it missed —
/// the linear pass against the same rendered image.  `Ok(None)` means no
/// code was found, which is a valid outcome rather than a failure.
pub async fn decode_image_file(file: &ImageFile) -> Result<Option<DecodedCode>, ScanError> {
    if !file.is_image() {
        return Err(ScanError::NotAnImage {
            media_type: file.media_type.clone(),
        });
    }

    // Pixels are extracted at the intrinsic dimensions; rescaling would
    // distort the module/bar geometry recognition depends on.
    let image = image::load_from_memory(&file.bytes)?;
    let gray = image.to_luma8();

    if let Some(code) = try_matrix_gray(&gray).into_public("matrix") {
        tracing::debug!(name = %file.name, "matrix code recognized");
        return Ok(Some(code));
    }

    let found = try_linear(&image).into_public("linear");
    if found.is_some() {
        tracing::debug!(name = %file.name, "linear code recognized");
    }
    Ok(found)
}

/// Decode the first image in a pasted clipboard payload.
///
/// Errors when the payload carries no image-typed item; otherwise delegates
/// to [`decode_image_file`].
pub async fn decode_pasted_image(
    clipboard: &ClipboardPayload,
) -> Result<Option<DecodedCode>, ScanError> {
    let item = clipboard
        .first_image()
        .ok_or(ScanError::NoImageInClipboard)?;

    let file = ImageFile::new("clipboard", item.media_type.clone(), item.bytes.clone());
    decode_image_file(&file).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ClipboardItem;

    /// A valid PNG containing neither a matrix nor a linear code.
    fn blank_png() -> Vec<u8> {
        let img = image::GrayImage::from_pixel(80, 80, image::Luma([255]));
        let mut buf = Vec::new();
        let mut cursor = std::io::Cursor::new(&mut buf);
        image::DynamicImage::ImageLuma8(img)
            .write_to(&mut cursor, image::ImageFormat::Png)
            .unwrap();
        buf
    }

    #[tokio::test]
    async fn non_image_media_type_is_rejected_before_decoding() {
        let file = ImageFile::new("notes.txt", "text/plain", b"123456".to_vec());
        let err = decode_image_file(&file).await.unwrap_err();
        assert!(matches!(err, ScanError::NotAnImage { .. }));
    }

    #[tokio::test]
    async fn corrupt_image_bytes_are_an_input_error() {
        let file = ImageFile::new("x.png", "image/png", vec![0xde, 0xad, 0xbe, 0xef]);
        let err = decode_image_file(&file).await.unwrap_err();
        assert!(matches!(err, ScanError::ImageLoad(_)));
    }

    #[tokio::test]
    async fn image_without_any_code_resolves_to_none() {
        let file = ImageFile::new("blank.png", "image/png", blank_png());
        let result = decode_image_file(&file).await.unwrap();
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn empty_clipboard_is_an_explicit_error() {
        let payload = ClipboardPayload::default();
        let err = decode_pasted_image(&payload).await.unwrap_err();
        assert!(matches!(err, ScanError::NoImageInClipboard));
    }

    #[tokio::test]
    async fn pasted_image_delegates_to_the_file_pipeline() {
        let payload = ClipboardPayload::new(vec![
            ClipboardItem {
                media_type: "text/html".into(),
                bytes: b"<p>hi</p>".to_vec(),
            },
            ClipboardItem {
                media_type: "image/png".into(),
                bytes: blank_png(),
            },
        ]);
        // The blank image decodes cleanly to "no code found".
        assert_eq!(decode_pasted_image(&payload).await.unwrap(), None);
    }
}
