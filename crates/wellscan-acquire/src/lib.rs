//! Wellscan Acquisition Layer
//!
//! Turns documents into text for the extraction engine.
//!
//! # Architecture
//!
//! This crate provides implementations of the `TextSource` and `Rescanner`
//! traits from `wellscan-domain`.
//!
//! # Collaborators
//!
//! - `PdfTextSource`: reads the embedded text layer of a PDF
//! - `OcrRescanner`: re-derives a PDF through an external OCR program
//! - `MockTextSource` / `MockRescanner`: deterministic mocks for testing
//!
//! # Examples
//!
//! ```
//! use wellscan_acquire::MockTextSource;
//! use wellscan_domain::traits::TextSource;
//! use std::path::Path;
//!
//! let mut source = MockTextSource::default();
//! source.add_document("W20197.pdf", "API No. 33-053-02102");
//! assert_eq!(source.acquire(Path::new("W20197.pdf")).unwrap(), "API No. 33-053-02102");
//! ```

#![warn(missing_docs)]

pub mod ocr;
pub mod pdf;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;
use wellscan_domain::traits::{Rescanner, TextSource};

pub use ocr::OcrRescanner;
pub use pdf::PdfTextSource;

/// Errors that can occur while acquiring document text
#[derive(Error, Debug)]
pub enum AcquireError {
    /// The document could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The OCR program could not be started
    #[error("OCR error: {0}")]
    Ocr(String),

    /// No document is registered under this path
    #[error("Document not found: {0}")]
    NotFound(String),
}

/// Mock text source for deterministic testing
///
/// Returns pre-registered text per path. Paths that were never registered
/// fail with `AcquireError::NotFound`.
#[derive(Debug, Clone, Default)]
pub struct MockTextSource {
    documents: Arc<Mutex<HashMap<PathBuf, String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockTextSource {
    /// Create an empty MockTextSource
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the text returned for `path`
    pub fn add_document(&mut self, path: impl Into<PathBuf>, text: impl Into<String>) {
        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.into(), text.into());
    }

    /// Get the number of times acquire was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TextSource for MockTextSource {
    type Error = AcquireError;

    fn acquire(&self, path: &Path) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap_or_else(PoisonError::into_inner) += 1;

        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(path)
            .cloned()
            .ok_or_else(|| AcquireError::NotFound(path.display().to_string()))
    }
}

/// Mock rescanner for deterministic testing
///
/// Always reports the same output path, like the real OCR rescanner does.
/// Register the output path's text on the paired `MockTextSource`.
#[derive(Debug, Clone)]
pub struct MockRescanner {
    output: PathBuf,
    fail: bool,
    calls: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockRescanner {
    /// Create a new MockRescanner reporting `output`
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            fail: false,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A rescanner whose program can never be started
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Get the number of times rescan was called
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Paths rescanned so far, in call order
    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for MockRescanner {
    fn default() -> Self {
        Self::new("output.pdf")
    }
}

impl Rescanner for MockRescanner {
    type Error = AcquireError;

    fn rescan(&self, path: &Path) -> Result<PathBuf, Self::Error> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path.to_path_buf());

        if self.fail {
            return Err(AcquireError::Ocr("Mock OCR failure".to_string()));
        }
        Ok(self.output.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_source_returns_registered_text() {
        let mut source = MockTextSource::new();
        source.add_document("a.pdf", "first");
        source.add_document("b.pdf", "second");

        assert_eq!(source.acquire(Path::new("a.pdf")).unwrap(), "first");
        assert_eq!(source.acquire(Path::new("b.pdf")).unwrap(), "second");
    }

    #[test]
    fn test_mock_source_unknown_path() {
        let source = MockTextSource::new();
        let result = source.acquire(Path::new("missing.pdf"));
        assert!(matches!(result.unwrap_err(), AcquireError::NotFound(_)));
    }

    #[test]
    fn test_mock_source_call_count_shared_by_clones() {
        let mut source = MockTextSource::new();
        source.add_document("a.pdf", "text");
        let clone = source.clone();

        source.acquire(Path::new("a.pdf")).unwrap();
        clone.acquire(Path::new("nope.pdf")).unwrap_err();

        assert_eq!(source.call_count(), 2);
        assert_eq!(clone.call_count(), 2);
    }

    #[test]
    fn test_mock_rescanner_records_calls() {
        let rescanner = MockRescanner::new("ocr/out.pdf");
        let output = rescanner.rescan(Path::new("scan.pdf")).unwrap();

        assert_eq!(output, PathBuf::from("ocr/out.pdf"));
        assert_eq!(rescanner.call_count(), 1);
        assert_eq!(rescanner.calls(), vec![PathBuf::from("scan.pdf")]);
    }

    #[test]
    fn test_mock_rescanner_failure() {
        let rescanner = MockRescanner::failing();
        let result = rescanner.rescan(Path::new("scan.pdf"));
        assert!(matches!(result.unwrap_err(), AcquireError::Ocr(_)));
        assert_eq!(rescanner.call_count(), 1);
    }
}
