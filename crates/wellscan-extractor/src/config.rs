//! Configuration for the Extractor
//!
//! The exception tables layered over the general resolution heuristics.
//! They load from the `[extractor]` section of the CLI configuration file.

use serde::{Deserialize, Serialize};

/// A keyword that, when found, maps a field to a fixed canonical value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordOverride {
    /// Keyword to look for
    pub keyword: String,

    /// Value the field resolves to when the keyword is found
    pub canonical: String,
}

impl KeywordOverride {
    /// Convenience constructor
    pub fn new(keyword: impl Into<String>, canonical: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            canonical: canonical.into(),
        }
    }
}

/// Resolved county value that pins the state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountyState {
    /// Exact resolved county value
    pub county: String,

    /// State implied by that county
    pub state: String,
}

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Re-acquire text through OCR when no identifier is found
    pub rescan_missing_identifier: bool,

    /// Keywords that mark an operator candidate as a corporate entity
    pub corporate_keywords: Vec<String>,

    /// Substrings (case-sensitive) that disqualify an operator candidate
    pub operator_rejects: Vec<String>,

    /// Substrings (case-insensitive) marking a well-name candidate as some
    /// other section's label
    pub well_name_rejects: Vec<String>,

    /// Operator token overrides, consulted before ranking
    pub operator_overrides: Vec<KeywordOverride>,

    /// County keywords (case-insensitive substring) with a standard name
    pub county_priority: Vec<KeywordOverride>,

    /// Well-name tokens (case-insensitive) that force the county
    pub well_name_county_overrides: Vec<KeywordOverride>,

    /// County values that pin the state
    pub state_by_county: Vec<CountyState>,
}

impl Default for ExtractorConfig {
    /// Default tables for North Dakota well files
    fn default() -> Self {
        Self {
            rescan_missing_identifier: true,
            corporate_keywords: ["inc", "llc", "ltd", "company", "corp", "america"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            operator_rejects: [":", "Well", "shall not commence"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            well_name_rejects: [
                "field",
                "location",
                "legal location",
                "drilling contractor",
                "company representative",
                "date and time of spudding",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            operator_overrides: vec![
                KeywordOverride::new("Oasis", "Oasis Petroleum North America LLC"),
                KeywordOverride::new("Continental", "Continental Resources, Inc."),
            ],
            county_priority: vec![KeywordOverride::new("mckenzie", "McKenzie County")],
            well_name_county_overrides: vec![KeywordOverride::new(
                "Atlanta",
                "Williams & McKenzie",
            )],
            state_by_county: vec![
                CountyState {
                    county: "McKenzie County".to_string(),
                    state: "North Dakota".to_string(),
                },
                CountyState {
                    county: "Williams & McKenzie".to_string(),
                    state: "Oklahoma".to_string(),
                },
            ],
        }
    }
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.corporate_keywords.iter().any(|k| k.is_empty()) {
            return Err("corporate_keywords must not contain empty strings".to_string());
        }
        if self.operator_rejects.iter().any(|k| k.is_empty()) {
            return Err("operator_rejects must not contain empty strings".to_string());
        }
        if self.well_name_rejects.iter().any(|k| k.is_empty()) {
            return Err("well_name_rejects must not contain empty strings".to_string());
        }

        let tables = [
            ("operator_overrides", &self.operator_overrides),
            ("county_priority", &self.county_priority),
            ("well_name_county_overrides", &self.well_name_county_overrides),
        ];
        for (name, table) in tables {
            for entry in table {
                if entry.keyword.trim().is_empty() {
                    return Err(format!("{} has an entry with an empty keyword", name));
                }
                if entry.canonical.trim().is_empty() {
                    return Err(format!(
                        "{} entry '{}' has an empty canonical value",
                        name, entry.keyword
                    ));
                }
            }
        }

        for entry in &self.state_by_county {
            if entry.county.is_empty() || entry.state.is_empty() {
                return Err("state_by_county entries need both county and state".to_string());
            }
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExtractorConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_override_keyword_is_invalid() {
        let mut config = ExtractorConfig::default();
        config.operator_overrides.push(KeywordOverride::new(" ", "Someone"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_canonical_is_invalid() {
        let mut config = ExtractorConfig::default();
        config.county_priority.push(KeywordOverride::new("williams", ""));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ExtractorConfig::from_toml(
            r#"
            rescan_missing_identifier = false

            [[operator_overrides]]
            keyword = "Whiting"
            canonical = "Whiting Oil and Gas Corporation"
            "#,
        )
        .unwrap();

        assert!(!config.rescan_missing_identifier);
        assert_eq!(config.operator_overrides.len(), 1);
        assert_eq!(config.county_priority, ExtractorConfig::default().county_priority);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ExtractorConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = ExtractorConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }
}
