//! Show command implementation.

use crate::cli::ShowArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use wellscan_domain::traits::RecordSink;
use wellscan_store::SqliteStore;

/// Execute the show command.
pub fn execute_show(args: ShowArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let database = args.db.unwrap_or_else(|| config.store.database.clone());
    let store = SqliteStore::new(&database)?;

    let record = store
        .get(&args.identifier)?
        .ok_or(CliError::NotFound(args.identifier))?;

    println!("{}", formatter.format_record(&record)?);
    Ok(())
}
