//! OCR necessity decider

use crate::patterns::{self, PatternFamily};

/// Decides whether acquired text is good enough to extract from
///
/// Text counts as unreliable when it is empty or carries no identifier.
/// Documents that genuinely have no identifier are indistinguishable from
/// bad scans here, so callers re-acquire at most once.
#[derive(Debug, Clone)]
pub struct OcrDecider {
    identifier: PatternFamily,
}

impl OcrDecider {
    /// Create a decider keyed on the identifier pattern
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            identifier: PatternFamily::new(patterns::IDENTIFIER)?,
        })
    }

    /// True when the document should be re-acquired by OCR
    pub fn needs_rescan(&self, text: &str) -> bool {
        text.trim().is_empty() || !self.identifier.is_match(text)
    }
}
