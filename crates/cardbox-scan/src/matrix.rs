//! 2D matrix-code (QR-style) recognition over raw pixel data.

use cardbox_shared::{CodeKind, DecodedCode};
use image::GrayImage;

use crate::attempt::Attempt;

/// Attempt matrix-code decoding on raw RGBA pixel data.
///
/// Returns `None` on malformed or unrecognized input; internal decode
/// errors are logged and converted to a miss, never propagated.
pub fn decode_matrix_code(pixels: &[u8], width: u32, height: u32) -> Option<DecodedCode> {
    try_matrix_rgba(pixels, width, height).into_public("matrix")
}

pub(crate) fn try_matrix_rgba(pixels: &[u8], width: u32, height: u32) -> Attempt {
    let expected = width as usize * height as usize * 4;
    if pixels.len() != expected {
        return Attempt::Fault(format!(
            "pixel buffer of {} bytes does not match {width}x{height} RGBA",
            pixels.len()
        ));
    }

    let Some(rgba) = image::RgbaImage::from_raw(width, height, pixels.to_vec()) else {
        return Attempt::Fault("could not interpret pixel buffer as RGBA".into());
    };
    let gray = image::DynamicImage::ImageRgba8(rgba).to_luma8();

    try_matrix_gray(&gray)
}

/// Matrix pass over an already-grayscaled buffer.  The prepared image is
/// dropped on every exit path; nothing leaks across calls.
pub(crate) fn try_matrix_gray(gray: &GrayImage) -> Attempt {
    let (width, height) = gray.dimensions();
    if width == 0 || height == 0 {
        return Attempt::NotFound;
    }

    let mut prepared =
        rqrr::PreparedImage::prepare_from_greyscale(width as usize, height as usize, |x, y| {
            gray.get_pixel(x as u32, y as u32).0[0]
        });

    let grids = prepared.detect_grids();
    // One result per image: only the first detected grid is considered.
    let Some(grid) = grids.first() else {
        return Attempt::NotFound;
    };

    match grid.decode() {
        Ok((_meta, payload)) => Attempt::Found(DecodedCode::new(payload, CodeKind::Matrix)),
        Err(e) => Attempt::Fault(format!("matrix decode failed: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatched_buffer_is_a_silent_miss() {
        // 3 bytes can never be 10x10 RGBA; the fault must not escape.
        assert_eq!(decode_matrix_code(&[1, 2, 3], 10, 10), None);
    }

    #[test]
    fn blank_image_is_a_plain_miss_not_a_fault() {
        let gray = GrayImage::from_pixel(64, 64, image::Luma([255]));
        assert!(try_matrix_gray(&gray).is_not_found());
    }

    #[test]
    fn noise_never_panics() {
        let pixels: Vec<u8> = (0..40 * 40 * 4).map(|i| (i * 31 % 251) as u8).collect();
        // Either a miss or (vanishingly unlikely) a decode; never a panic.
        let _ = decode_matrix_code(&pixels, 40, 40);
    }

    #[test]
    fn zero_sized_image_is_a_miss() {
        assert_eq!(decode_matrix_code(&[], 0, 0), None);
    }
}
