//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use wellscan_acquire::PdfTextSource;
use wellscan_extractor::{Extractor, Pipeline};

/// Execute the extract command. The record is printed, never stored.
pub fn execute_extract(args: ExtractArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    if !args.file.is_file() {
        return Err(CliError::InvalidInput(format!(
            "{} is not a file",
            args.file.display()
        )));
    }

    let extractor = Extractor::new(config.extractor_config(args.no_rescan))?;
    let mut pipeline = Pipeline::new(extractor, PdfTextSource::new(), config.rescanner());

    let report = pipeline.prepare_document(&args.file)?;
    println!("{}", formatter.format_report(&report)?);
    Ok(())
}
