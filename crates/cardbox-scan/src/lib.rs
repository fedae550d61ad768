//! # cardbox-scan
//!
//! Image-based code recognition for loyalty cards.
//!
//! Two recognizers are composed into one pipeline: a 2D matrix-code decoder
//! (rqrr) and a 1D linear-barcode decoder (rxing).  [`decode_image_file`]
//! always tries the matrix pass first and falls back to the linear pass only
//! when nothing was found — matrix codes carry richer payloads and are
//! cheaper to attempt on an already-decoded pixel buffer.
//!
//! "No code found" is a valid outcome, not an error: the pipeline resolves
//! to `None` on a miss and reserves `Err` for bad input (non-image media
//! type, empty clipboard, unloadable image data).  Internal recognizer
//! faults are logged and downgraded to a miss at the public boundary.

pub mod input;
pub mod linear;
pub mod matrix;
pub mod pipeline;

mod attempt;
mod error;

pub use error::ScanError;
pub use input::{ClipboardItem, ClipboardPayload, ImageFile};
pub use linear::decode_linear_code;
pub use matrix::decode_matrix_code;
pub use pipeline::{decode_image_file, decode_pasted_image};
