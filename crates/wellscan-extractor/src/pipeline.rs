//! Sequential document pipeline
//!
//! One document at a time: acquire, decide, re-acquire at most once,
//! extract, assign a fallback identifier if needed, normalize, store.

use crate::error::ExtractorError;
use crate::extractor::Extractor;
use crate::normalize::normalize;
use crate::types::{DocumentReport, RunSummary};
use std::fmt::Display;
use std::path::Path;
use tracing::{debug, info, warn};
use wellscan_domain::traits::{RecordSink, Rescanner, TextSource};

/// Run-scoped source of fallback identifiers
///
/// Yields `"1"`, `"2"`, ... in order. Identifiers restart with every new
/// counter, so they are not unique across runs.
#[derive(Debug, Clone, Default)]
pub struct FallbackCounter {
    issued: u64,
}

impl FallbackCounter {
    /// A counter that has issued nothing yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next identifier
    pub fn next_identifier(&mut self) -> String {
        self.issued += 1;
        self.issued.to_string()
    }

    /// How many identifiers have been issued
    pub fn issued(&self) -> u64 {
        self.issued
    }
}

/// Drives the extractor over documents using the given collaborators
pub struct Pipeline<T, R>
where
    T: TextSource,
    R: Rescanner,
{
    extractor: Extractor,
    source: T,
    rescanner: R,
    fallback: FallbackCounter,
}

impl<T, R> Pipeline<T, R>
where
    T: TextSource,
    R: Rescanner,
    T::Error: Display,
    R::Error: Display,
{
    /// Create a new Pipeline
    pub fn new(extractor: Extractor, source: T, rescanner: R) -> Self {
        Self {
            extractor,
            source,
            rescanner,
            fallback: FallbackCounter::new(),
        }
    }

    /// The extractor in use
    pub fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    /// The run's fallback counter
    pub fn fallback_counter(&self) -> &FallbackCounter {
        &self.fallback
    }

    /// Build the record for one document without storing it
    pub fn prepare_document(&mut self, path: &Path) -> Result<DocumentReport, ExtractorError> {
        let source_name = source_name(path);
        info!("Processing {}", path.display());

        let mut text = self.acquire(path)?;
        let mut rescanned = false;

        if self.extractor.config().rescan_missing_identifier && self.extractor.needs_rescan(&text) {
            info!("{}: no identifier in text, re-acquiring with OCR", source_name);
            let output = self
                .rescanner
                .rescan(path)
                .map_err(|e| ExtractorError::Rescan(e.to_string()))?;
            text = self.acquire(&output)?;
            rescanned = true;
        }

        let extraction = self.extractor.extract(&text);
        let (identifier, fallback_identifier) = match extraction.identifier() {
            Some(identifier) => (identifier.to_string(), false),
            None => {
                let identifier = self.fallback.next_identifier();
                warn!(
                    "{}: no identifier recovered, assigned fallback {}",
                    source_name, identifier
                );
                (identifier, true)
            }
        };

        let record = normalize(extraction.into_record(identifier, source_name.clone()));
        for (field, value) in record.fields() {
            debug!("{}: {} = {:?}", source_name, field, value);
        }

        Ok(DocumentReport {
            source_name,
            rescanned,
            fallback_identifier,
            record,
        })
    }

    /// Build the record for one document and upsert it into `sink`
    pub fn process_document<S>(
        &mut self,
        path: &Path,
        sink: &mut S,
    ) -> Result<DocumentReport, ExtractorError>
    where
        S: RecordSink,
        S::Error: Display,
    {
        let report = self.prepare_document(path)?;
        sink.upsert(&report.record)
            .map_err(|e| ExtractorError::Sink(e.to_string()))?;
        info!(
            "Stored {} from {}",
            report.record.identifier, report.source_name
        );
        Ok(report)
    }

    /// Process `paths` in order; the first error halts the run
    pub fn run<P, S>(&mut self, paths: &[P], sink: &mut S) -> Result<RunSummary, ExtractorError>
    where
        P: AsRef<Path>,
        S: RecordSink,
        S::Error: Display,
    {
        let mut summary = RunSummary::default();
        for path in paths {
            let report = self.process_document(path.as_ref(), sink)?;
            summary.add(&report);
        }
        info!(
            "Run complete: {} processed, {} rescanned, {} fallback identifiers",
            summary.processed, summary.rescanned, summary.fallback_identified
        );
        Ok(summary)
    }

    fn acquire(&self, path: &Path) -> Result<String, ExtractorError> {
        self.source
            .acquire(path)
            .map_err(|e| ExtractorError::Acquire(format!("{}: {}", path.display(), e)))
    }
}

fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
