//! Result types for extraction and pipeline runs

use crate::resolvers::ResolvedFields;
use wellscan_domain::{Field, StimulationRecord, WellRecord};

/// Everything the engine derived from one document's text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Resolved single-value fields, keyed by field
    pub fields: ResolvedFields,

    /// The first stimulation block, if the text has one
    pub stimulation: Option<StimulationRecord>,
}

impl Extraction {
    /// The resolved identifier, if the text carried one
    pub fn identifier(&self) -> Option<&str> {
        self.fields.get(Field::Identifier)
    }

    /// Merge into a record under the given identifier and source name
    ///
    /// The resolved identifier, if any, is ignored in favour of `identifier`.
    pub fn into_record(self, identifier: String, source_name: String) -> WellRecord {
        let mut record = WellRecord::new(identifier, source_name);
        for (field, value) in self.fields.iter() {
            if field == Field::Identifier || field == Field::SourceName {
                continue;
            }
            record.set(field, value.map(str::to_string));
        }
        record.stimulation = self.stimulation;
        record
    }
}

/// Outcome of one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentReport {
    /// File name of the document
    pub source_name: String,

    /// Whether the text was re-acquired by OCR
    pub rescanned: bool,

    /// Whether the identifier came from the run's fallback counter
    pub fallback_identifier: bool,

    /// The normalized record handed to the sink
    pub record: WellRecord,
}

/// Totals for a run over several documents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Documents fully processed
    pub processed: usize,

    /// Documents re-acquired by OCR
    pub rescanned: usize,

    /// Documents given a fallback identifier
    pub fallback_identified: usize,

    /// Distinct identifiers written, in first-seen order
    pub identifiers: Vec<String>,
}

impl RunSummary {
    /// Count one finished document
    pub fn add(&mut self, report: &DocumentReport) {
        self.processed += 1;
        if report.rescanned {
            self.rescanned += 1;
        }
        if report.fallback_identifier {
            self.fallback_identified += 1;
        }
        if !self.identifiers.contains(&report.record.identifier) {
            self.identifiers.push(report.record.identifier.clone());
        }
    }
}
