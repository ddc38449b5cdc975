//! Wellscan CLI - Extract structured well records from regulatory documents.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wellscan_cli::commands;
use wellscan_cli::{Cli, Command, Config, Formatter};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> wellscan_cli::Result<()> {
    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::default_path()?,
    };
    let config = Config::load_from(&config_path)?;

    // RUST_LOG wins over --verbose, which wins over the config file
    let default_filter = if cli.verbose {
        "debug"
    } else {
        config.settings.log_filter.as_str()
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Scan(args) => commands::execute_scan(args, &config, &formatter)?,
        Command::Extract(args) => commands::execute_extract(args, &config, &formatter)?,
        Command::Show(args) => commands::execute_show(args, &config, &formatter)?,
        Command::List(args) => commands::execute_list(args, &config, &formatter)?,
        Command::Config(args) => {
            commands::execute_config(args, &config, &config_path, &formatter)?
        }
    }

    Ok(())
}
