//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Wellscan - Extract structured well records from regulatory documents.
#[derive(Debug, Parser)]
#[command(name = "wellscan")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "WELLSCAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log per-field resolution details
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (identifiers only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract and store records from a document or a directory of PDFs
    Scan(ScanArgs),

    /// Extract one document and print the record without storing it
    Extract(ExtractArgs),

    /// Show a stored record
    Show(ShowArgs),

    /// List stored records
    List(ListArgs),

    /// Show or initialise the configuration file
    Config(ConfigArgs),
}

/// Arguments for the scan command.
#[derive(Debug, Parser)]
pub struct ScanArgs {
    /// A PDF document, or a directory whose PDFs are scanned in name order
    pub path: PathBuf,

    /// Database file (overrides the configured one)
    #[arg(long, env = "WELLSCAN_DB")]
    pub db: Option<PathBuf>,

    /// Never re-acquire text through OCR
    #[arg(long)]
    pub no_rescan: bool,
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// The PDF document
    pub file: PathBuf,

    /// Never re-acquire text through OCR
    #[arg(long)]
    pub no_rescan: bool,
}

/// Arguments for the show command.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Well identifier (e.g. 33-053-02102)
    pub identifier: String,

    /// Database file (overrides the configured one)
    #[arg(long, env = "WELLSCAN_DB")]
    pub db: Option<PathBuf>,
}

/// Arguments for the list command.
#[derive(Debug, Parser)]
pub struct ListArgs {
    /// Maximum number of results
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Database file (overrides the configured one)
    #[arg(long, env = "WELLSCAN_DB")]
    pub db: Option<PathBuf>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_command() {
        let cli = Cli::parse_from(["wellscan", "scan", "wells/", "--no-rescan"]);
        match cli.command {
            Command::Scan(args) => {
                assert_eq!(args.path, PathBuf::from("wells/"));
                assert!(args.no_rescan);
            }
            _ => panic!("Expected Scan command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["wellscan", "list", "--limit", "5", "-f", "json", "--no-color"]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert!(cli.no_color);
        match cli.command {
            Command::List(args) => assert_eq!(args.limit, Some(5)),
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_config_init() {
        let cli = Cli::parse_from(["wellscan", "config", "init", "--force"]);
        match cli.command {
            Command::Config(ConfigArgs {
                action: ConfigAction::Init { force },
            }) => assert!(force),
            _ => panic!("Expected Config Init command"),
        }
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["wellscan"]).is_err());
    }
}
