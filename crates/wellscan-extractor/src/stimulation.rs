//! Stimulation block extraction
//!
//! A document may restate its treatment history several times. Only the
//! first block, from the first `Date Stimulated` header up to the next one
//! (or the end of the text), is read.

use regex::Regex;
use wellscan_domain::StimulationRecord;

const BLOCK_HEADER: &str = r"(?i)Date Stimulated";

const HEADER_ROW: &str = r"(?i)Date Stimulated\s*[!|]\s*Stimulated Formation[^\n]*\n(\d{1,2}/\d{1,2}/\d{4}) (\w+) (\d+) (\d+) (\d+)";

const TREATMENT: &str = r"(?i)Type Treatment[^\n]*\n([A-Za-z\s]+)\s+(\d+)\s+(\d+)";

const DETAILS: &str = r"(?is)Details.*?\n(.+)";

/// Extracts the first stimulation block's sub-fields
#[derive(Debug, Clone)]
pub struct StimulationExtractor {
    header: Regex,
    header_row: Regex,
    treatment: Regex,
    details: Regex,
}

impl StimulationExtractor {
    /// Compile the block and sub-field patterns
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            header: Regex::new(BLOCK_HEADER)?,
            header_row: Regex::new(HEADER_ROW)?,
            treatment: Regex::new(TREATMENT)?,
            details: Regex::new(DETAILS)?,
        })
    }

    /// The first stimulation block, header included
    pub fn first_block<'t>(&self, text: &'t str) -> Option<&'t str> {
        let first = self.header.find(text)?;
        let end = self
            .header
            .find_at(text, first.end())
            .map_or(text.len(), |next| next.start());
        Some(&text[first.start()..end])
    }

    /// Sub-fields of the first block, or `None` when the document has none
    ///
    /// A block whose layout matches none of the sub-patterns still yields an
    /// (empty) record.
    pub fn extract(&self, text: &str) -> Option<StimulationRecord> {
        let block = self.first_block(text)?;
        let mut record = StimulationRecord::default();

        // All five or nothing
        if let Some(caps) = self.header_row.captures(block) {
            record.date_stimulated = Some(caps[1].to_string());
            record.stimulated_formation = Some(caps[2].to_string());
            record.top_ft = Some(caps[3].to_string());
            record.bottom_ft = Some(caps[4].to_string());
            record.stimulation_stages = Some(caps[5].to_string());
        }

        if let Some(caps) = self.treatment.captures(block) {
            record.type_treatment = Some(caps[1].trim().to_string());
            record.lbs_proppant = Some(caps[2].to_string());
            record.max_treatment_pressure_psi = Some(caps[3].to_string());
        }

        if let Some(caps) = self.details.captures(block) {
            record.details = Some(caps[1].trim().to_string());
        }

        Some(record)
    }
}
