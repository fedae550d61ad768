use serde::{Deserialize, Serialize};

/// The two families of codes the recognizer can extract from an image.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CodeKind {
    /// 2D matrix code (QR-style).
    Matrix,
    /// 1D linear barcode (Code128, EAN, UPC, Code39 family).
    Linear,
}

/// How a card's payload came into existence.  Distinguishes hand-typed
/// entries from scanned ones; the serialized names are part of the persisted
/// record format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PayloadKind {
    #[serde(rename = "manual")]
    Manual,
    #[serde(rename = "matrix-code")]
    Matrix,
    #[serde(rename = "linear-code")]
    Linear,
}

impl From<CodeKind> for PayloadKind {
    fn from(kind: CodeKind) -> Self {
        match kind {
            CodeKind::Matrix => PayloadKind::Matrix,
            CodeKind::Linear => PayloadKind::Linear,
        }
    }
}

impl std::fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PayloadKind::Manual => "manual",
            PayloadKind::Matrix => "matrix-code",
            PayloadKind::Linear => "linear-code",
        };
        write!(f, "{name}")
    }
}

/// A positively recognized code.  Only ever constructed by a recognizer that
/// actually found something; a miss is represented as `None`, never as a
/// partially filled value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DecodedCode {
    /// Text extracted from the image.
    pub payload: String,
    /// Which recognizer produced it.
    pub kind: CodeKind,
}

impl DecodedCode {
    pub fn new(payload: impl Into<String>, kind: CodeKind) -> Self {
        Self {
            payload: payload.into(),
            kind,
        }
    }
}
