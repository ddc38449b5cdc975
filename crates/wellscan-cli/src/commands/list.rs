//! List command implementation.

use crate::cli::ListArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use wellscan_store::SqliteStore;

/// Execute the list command.
pub fn execute_list(args: ListArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let database = args.db.unwrap_or_else(|| config.store.database.clone());
    let store = SqliteStore::new(&database)?;

    let records = store.list(args.limit)?;
    println!("{}", formatter.format_records(&records)?);
    Ok(())
}
