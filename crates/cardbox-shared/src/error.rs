use thiserror::Error;

/// Validation failures for user-supplied or scanned payload text.
///
/// The messages are shown to the user verbatim, so each one names the rule
/// that was violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    #[error("Code data cannot be empty")]
    Empty,

    #[error("Code must be at least 3 characters long")]
    TooShort,

    #[error("Linear barcodes should contain only numbers")]
    NonNumeric,
}
