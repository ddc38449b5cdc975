//! PDF text layer acquisition

use crate::AcquireError;
use std::panic;
use std::path::Path;
use tracing::{debug, warn};
use wellscan_domain::traits::TextSource;

/// Reads the embedded text of a PDF, page by page
///
/// Pages are concatenated in order, each followed by a single space.
/// Scanned documents without a text layer come back (nearly) empty, which
/// is what makes the OCR decider ask for a rescan. A file that cannot be
/// read is an error; a file whose text cannot be extracted yields empty
/// text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextSource;

impl PdfTextSource {
    /// Create a new PdfTextSource
    pub fn new() -> Self {
        Self
    }
}

impl TextSource for PdfTextSource {
    type Error = AcquireError;

    fn acquire(&self, path: &Path) -> Result<String, Self::Error> {
        let bytes = std::fs::read(path)?;

        // pdf-extract panics on some malformed fonts and streams
        let extracted = panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(&bytes));
        let pages = match extracted {
            Ok(Ok(pages)) => pages,
            Ok(Err(e)) => {
                warn!("Text extraction failed for {}: {}", path.display(), e);
                return Ok(String::new());
            }
            Err(_) => {
                warn!("Text extraction aborted for {}", path.display());
                return Ok(String::new());
            }
        };

        debug!("Read {} page(s) from {}", pages.len(), path.display());

        let mut text = String::new();
        for page in &pages {
            text.push_str(page);
            text.push(' ');
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_is_io_error() {
        let source = PdfTextSource::new();
        let result = source.acquire(Path::new("/definitely/not/here.pdf"));
        assert!(matches!(result.unwrap_err(), AcquireError::Io(_)));
    }

    #[test]
    fn test_unextractable_pdf_yields_empty_text() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"this is plain text, not a PDF").unwrap();

        let source = PdfTextSource::new();
        let text = source.acquire(file.path()).unwrap();
        assert!(text.is_empty());
    }
}
