//! # cardbox-shared
//!
//! Common types and pure helpers shared by the code recognizer and the card
//! store: the decoded-code / payload-kind vocabulary, payload validation,
//! and display formatting.  Nothing in this crate performs I/O.

pub mod format;
pub mod types;
pub mod validate;

mod error;

pub use error::PayloadError;
pub use format::format_for_display;
pub use types::{CodeKind, DecodedCode, PayloadKind};
pub use validate::validate_payload;
