//! Payload validation.
//!
//! Pure and deterministic: the same input always yields the same verdict,
//! and nothing here touches I/O or global state.  UI collaborators route
//! manual entry through [`validate_payload`] before a card is created.

use crate::error::PayloadError;
use crate::types::PayloadKind;

/// Minimum length for hand-typed entries.  Scanned payloads are exempt
/// because the recognizer already vouched for them.
const MIN_MANUAL_LEN: usize = 3;

/// Validate and normalize payload text for the given kind.
///
/// Returns the trimmed payload on success.  Rules per kind:
/// - any kind: must be non-empty after trimming
/// - [`PayloadKind::Manual`]: at least 3 characters
/// - [`PayloadKind::Linear`]: decimal digits only
/// - [`PayloadKind::Matrix`]: any non-empty string
pub fn validate_payload(data: &str, kind: PayloadKind) -> Result<String, PayloadError> {
    let trimmed = data.trim();
    if trimmed.is_empty() {
        return Err(PayloadError::Empty);
    }

    match kind {
        PayloadKind::Manual => {
            if trimmed.chars().count() < MIN_MANUAL_LEN {
                return Err(PayloadError::TooShort);
            }
        }
        PayloadKind::Linear => {
            if !trimmed.chars().all(|c| c.is_ascii_digit()) {
                return Err(PayloadError::NonNumeric);
            }
        }
        // Matrix codes carry arbitrary text (URLs, vCards, plain ids).
        PayloadKind::Matrix => {}
    }

    Ok(trimmed.to_string())
}
