//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use wellscan_acquire::OcrRescanner;
use wellscan_extractor::ExtractorConfig;

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Record storage
    #[serde(default)]
    pub store: StoreSettings,

    /// OCR re-acquisition
    #[serde(default)]
    pub ocr: OcrSettings,

    /// Field resolution tables
    #[serde(default)]
    pub extractor: ExtractorConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Log filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

/// Where records are stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSettings {
    /// SQLite database file
    #[serde(default = "default_database")]
    pub database: PathBuf,
}

/// How documents are re-acquired through OCR.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcrSettings {
    /// Allow re-acquisition at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// OCR program
    #[serde(default = "default_ocr_program")]
    pub program: String,

    /// Arguments placed before the input and output paths
    #[serde(default = "default_ocr_args")]
    pub args: Vec<String>,

    /// Fixed output document, overwritten by every rescan
    #[serde(default = "default_ocr_output")]
    pub output: PathBuf,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".wellscan").join("config.toml"))
    }

    /// Load configuration from `path`, or the defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            let contents = fs::read_to_string(path)?;
            toml::from_str(&contents)?
        } else {
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Check the settings that can be wrong without failing to parse.
    pub fn validate(&self) -> Result<()> {
        if self.ocr.program.trim().is_empty() {
            return Err(CliError::Config("ocr.program must not be empty".into()));
        }
        self.extractor.validate().map_err(CliError::Config)
    }

    /// Extractor configuration with rescanning switched off when OCR is
    /// disabled here or by `--no-rescan`.
    pub fn extractor_config(&self, no_rescan: bool) -> ExtractorConfig {
        let mut config = self.extractor.clone();
        config.rescan_missing_identifier &= self.ocr.enabled && !no_rescan;
        config
    }

    /// The configured OCR rescanner.
    pub fn rescanner(&self) -> OcrRescanner {
        OcrRescanner::new(
            self.ocr.program.clone(),
            self.ocr.args.clone(),
            self.ocr.output.clone(),
        )
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            log_filter: default_log_filter(),
        }
    }
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            database: default_database(),
        }
    }
}

impl Default for OcrSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            program: default_ocr_program(),
            args: default_ocr_args(),
            output: default_ocr_output(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_database() -> PathBuf {
    PathBuf::from("wells.db")
}

fn default_ocr_program() -> String {
    "ocrmypdf".to_string()
}

fn default_ocr_args() -> Vec<String> {
    vec!["--force-ocr".to_string()]
}

fn default_ocr_output() -> PathBuf {
    PathBuf::from("output.pdf")
}
