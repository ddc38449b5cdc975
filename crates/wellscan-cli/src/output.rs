//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use serde_json::{Map, Value};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use wellscan_domain::WellRecord;
use wellscan_extractor::{DocumentReport, RunSummary};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format one record, field by field.
    pub fn format_record(&self, record: &WellRecord) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&record_json(record))?),
            OutputFormat::Table => Ok(self.format_record_table(record)),
            OutputFormat::Quiet => Ok(record.identifier.clone()),
        }
    }

    /// Format a list of records.
    pub fn format_records(&self, records: &[WellRecord]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let values: Vec<Value> = records.iter().map(record_json).collect();
                Ok(serde_json::to_string_pretty(&values)?)
            }
            OutputFormat::Table => Ok(self.format_records_table(records)),
            OutputFormat::Quiet => {
                let ids: Vec<&str> = records.iter().map(|r| r.identifier.as_str()).collect();
                Ok(ids.join("\n"))
            }
        }
    }

    /// Format the outcome of one scanned document.
    pub fn format_report(&self, report: &DocumentReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "source_name": report.source_name,
                    "rescanned": report.rescanned,
                    "fallback_identifier": report.fallback_identifier,
                    "record": record_json(&report.record),
                });
                Ok(serde_json::to_string(&value)?)
            }
            OutputFormat::Table => {
                let mut lines = vec![self.colorize(&report.source_name, "cyan")];
                if report.rescanned {
                    lines.push(self.warning("Re-acquired by OCR"));
                }
                if report.fallback_identifier {
                    lines.push(self.warning(&format!(
                        "No identifier found, assigned {}",
                        report.record.identifier
                    )));
                }
                lines.push(self.format_record_table(&report.record));
                Ok(lines.join("\n"))
            }
            OutputFormat::Quiet => Ok(report.record.identifier.clone()),
        }
    }

    /// Format the totals of a scan.
    pub fn format_summary(&self, summary: &RunSummary) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "processed": summary.processed,
                    "rescanned": summary.rescanned,
                    "fallback_identified": summary.fallback_identified,
                    "identifiers": summary.identifiers,
                });
                Ok(serde_json::to_string(&value)?)
            }
            OutputFormat::Table => Ok(self.success(&format!(
                "Processed {} document(s): {} re-acquired by OCR, {} with fallback identifiers",
                summary.processed, summary.rescanned, summary.fallback_identified
            ))),
            OutputFormat::Quiet => Ok(String::new()),
        }
    }

    fn format_record_table(&self, record: &WellRecord) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (field, value) in record.fields() {
            builder.push_record([field.as_str(), value.unwrap_or("-")]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    fn format_records_table(&self, records: &[WellRecord]) -> String {
        if records.is_empty() {
            return self.colorize("No records found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Identifier", "Source", "Well Name", "Operator", "County", "State"]);
        for record in records {
            builder.push_record([
                record.identifier.as_str(),
                record.source_name.as_str(),
                record.well_name.as_deref().unwrap_or("-"),
                record.operator.as_deref().unwrap_or("-"),
                record.county.as_deref().unwrap_or("-"),
                record.state.as_deref().unwrap_or("-"),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Flat field-name-to-value object, `null` for unresolved fields
fn record_json(record: &WellRecord) -> Value {
    let map: Map<String, Value> = record
        .fields()
        .into_iter()
        .map(|(field, value)| {
            let value = value.map_or(Value::Null, |v| Value::String(v.to_string()));
            (field.as_str().to_string(), value)
        })
        .collect();
    Value::Object(map)
}
