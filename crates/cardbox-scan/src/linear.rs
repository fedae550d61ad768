//! 1D linear-barcode recognition.
//!
//! Wired to rxing restricted to the linear format families; matrix formats
//! are excluded because the pipeline has already run its own matrix pass by
//! the time this one is consulted.

use std::collections::HashSet;

use cardbox_shared::{CodeKind, DecodedCode};
use image::DynamicImage;
use rxing::{BarcodeFormat, DecodeHintValue, DecodeHints};

use crate::attempt::Attempt;

/// Linear format families the recognizer accepts.
const LINEAR_FORMATS: [BarcodeFormat; 9] = [
    BarcodeFormat::CODE_128,
    BarcodeFormat::CODE_39,
    BarcodeFormat::CODE_93,
    BarcodeFormat::CODABAR,
    BarcodeFormat::EAN_13,
    BarcodeFormat::EAN_8,
    BarcodeFormat::UPC_A,
    BarcodeFormat::UPC_E,
    BarcodeFormat::ITF,
];

/// Attempt linear-barcode decoding against a rendered image.
///
/// Resolves to `None` on a miss; internal recognizer faults are logged and
/// converted to a miss at this boundary, never surfaced to the caller.
pub async fn decode_linear_code(image: &DynamicImage) -> Option<DecodedCode> {
    try_linear(image).into_public("linear")
}

pub(crate) fn try_linear(image: &DynamicImage) -> Attempt {
    let gray = image.to_luma8();
    let (width, height) = gray.dimensions();
    if width == 0 || height == 0 {
        return Attempt::NotFound;
    }

    let mut hints = DecodeHints::default()
        .with(DecodeHintValue::PossibleFormats(HashSet::from(
            LINEAR_FORMATS,
        )))
        .with(DecodeHintValue::TryHarder(true));

    match rxing::helpers::detect_in_luma_with_hints(gray.into_raw(), height, width, None, &mut hints)
    {
        Ok(result) => Attempt::Found(DecodedCode::new(
            result.getText().to_string(),
            CodeKind::Linear,
        )),
        Err(rxing::Exceptions::NotFoundException(_)) => Attempt::NotFound,
        Err(e) => Attempt::Fault(format!("linear decode failed: {e}")),
    }
}
