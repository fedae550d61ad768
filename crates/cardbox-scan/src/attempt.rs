use cardbox_shared::DecodedCode;

/// Outcome of a single recognizer pass.
///
/// A fault (corrupt pixel data, recognizer internal error) stays
/// distinguishable from a plain miss until the public boundary, where it is
/// logged and collapsed to a miss.
#[derive(Debug)]
pub(crate) enum Attempt {
    Found(DecodedCode),
    NotFound,
    Fault(String),
}

impl Attempt {
    /// Collapse to the public representation.  `stage` names the recognizer
    /// pass for the trace record.
    pub(crate) fn into_public(self, stage: &str) -> Option<DecodedCode> {
        match self {
            Attempt::Found(code) => Some(code),
            Attempt::NotFound => None,
            Attempt::Fault(reason) => {
                tracing::warn!(stage, %reason, "recognizer fault downgraded to miss");
                None
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn is_not_found(&self) -> bool {
        matches!(self, Attempt::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardbox_shared::CodeKind;

    #[test]
    fn fault_collapses_to_miss_at_the_boundary() {
        let fault = Attempt::Fault("bad pixels".into());
        assert_eq!(fault.into_public("matrix"), None);
    }

    #[test]
    fn found_passes_through() {
        let found = Attempt::Found(DecodedCode::new("hello", CodeKind::Matrix));
        assert_eq!(
            found.into_public("matrix"),
            Some(DecodedCode::new("hello", CodeKind::Matrix))
        );
    }
}
