//! Display formatting for card payloads.

use crate::types::PayloadKind;

/// Format a payload for display: matrix codes get a `QR: ` prefix, linear
/// codes a `Barcode: ` prefix, manual entries pass through unchanged.
/// Empty input yields an empty string.
pub fn format_for_display(data: &str, kind: PayloadKind) -> String {
    if data.is_empty() {
        return String::new();
    }
    match kind {
        PayloadKind::Matrix => format!("QR: {data}"),
        PayloadKind::Linear => format!("Barcode: {data}"),
        PayloadKind::Manual => data.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_by_kind() {
        assert_eq!(
            format_for_display("hello", PayloadKind::Matrix),
            "QR: hello"
        );
        assert_eq!(
            format_for_display("12345", PayloadKind::Linear),
            "Barcode: 12345"
        );
        assert_eq!(format_for_display("12345", PayloadKind::Manual), "12345");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(format_for_display("", PayloadKind::Matrix), "");
        assert_eq!(format_for_display("", PayloadKind::Manual), "");
    }
}
