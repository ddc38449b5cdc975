//! OCR re-acquisition through an external program

use crate::AcquireError;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{info, warn};
use wellscan_domain::traits::Rescanner;

/// Runs an OCR program as `<program> <args..> <input> <output>`
///
/// The output location is fixed, so every rescan overwrites the previous
/// one. The exit status is logged but otherwise ignored: whatever ends up at
/// the output path is what gets read back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OcrRescanner {
    program: String,
    args: Vec<String>,
    output: PathBuf,
}

impl OcrRescanner {
    /// Create a new OcrRescanner
    pub fn new(
        program: impl Into<String>,
        args: Vec<String>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            program: program.into(),
            args,
            output: output.into(),
        }
    }

    /// The program invoked
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Where the rescanned document is written
    pub fn output(&self) -> &Path {
        &self.output
    }
}

impl Default for OcrRescanner {
    fn default() -> Self {
        Self::new("ocrmypdf", vec!["--force-ocr".to_string()], "output.pdf")
    }
}

impl Rescanner for OcrRescanner {
    type Error = AcquireError;

    fn rescan(&self, path: &Path) -> Result<PathBuf, Self::Error> {
        info!(
            "Running {} on {} -> {}",
            self.program,
            path.display(),
            self.output.display()
        );

        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .arg(&self.output)
            .status()
            .map_err(|e| AcquireError::Ocr(format!("failed to run {}: {}", self.program, e)))?;

        if !status.success() {
            warn!("{} exited with {} for {}", self.program, status, path.display());
        }

        Ok(self.output.clone())
    }
}
