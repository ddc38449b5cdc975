//! Scan command implementation.

use crate::cli::ScanArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::{Path, PathBuf};
use tracing::info;
use walkdir::WalkDir;
use wellscan_acquire::PdfTextSource;
use wellscan_extractor::{Extractor, Pipeline, RunSummary};
use wellscan_store::SqliteStore;

/// Execute the scan command.
pub fn execute_scan(args: ScanArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let documents = collect_documents(&args.path)?;
    if documents.is_empty() {
        println!("{}", formatter.warning("No PDF documents found"));
        return Ok(());
    }

    let database = args.db.unwrap_or_else(|| config.store.database.clone());
    info!(
        "Scanning {} document(s) into {}",
        documents.len(),
        database.display()
    );
    let mut store = SqliteStore::new(&database)?;

    let extractor = Extractor::new(config.extractor_config(args.no_rescan))?;
    let mut pipeline = Pipeline::new(extractor, PdfTextSource::new(), config.rescanner());

    // Per-document output as each one lands; the first failure stops the run
    let mut summary = RunSummary::default();
    for document in &documents {
        let report = pipeline.process_document(document, &mut store)?;
        println!("{}", formatter.format_report(&report)?);
        summary.add(&report);
    }

    let totals = formatter.format_summary(&summary)?;
    if !totals.is_empty() {
        println!("{}", totals);
    }
    Ok(())
}

/// The document itself, or a directory's PDFs in file name order
///
/// Subdirectories are not descended into.
pub fn collect_documents(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.is_dir() {
        return Err(CliError::InvalidInput(format!(
            "{} is neither a file nor a directory",
            path.display()
        )));
    }

    pdfs_in(path)
}

/// PDFs directly inside `dir`; an unreadable directory is an error
fn pdfs_in(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| CliError::Io(e.into()))?;

    let documents = entries
        .into_iter()
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| {
            p.extension()
                .map(|ext| ext.eq_ignore_ascii_case("pdf"))
                .unwrap_or(false)
        })
        .collect();
    Ok(documents)
}
