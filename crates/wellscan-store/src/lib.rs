//! Wellscan Storage Layer
//!
//! Implements the RecordSink trait using SQLite.
//!
//! # Architecture
//!
//! - One `well_data` table, one `TEXT` column per field
//! - `identifier` is the primary key; writing a known identifier overwrites
//!   every other column of that row
//!
//! # Examples
//!
//! ```
//! use wellscan_domain::WellRecord;
//! use wellscan_domain::traits::RecordSink;
//! use wellscan_store::SqliteStore;
//!
//! let mut store = SqliteStore::new(":memory:").unwrap();
//! store.upsert(&WellRecord::new("33-053-02102", "W20197.pdf")).unwrap();
//! assert_eq!(store.count().unwrap(), 1);
//! ```

#![warn(missing_docs)]

use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use thiserror::Error;
use tracing::debug;
use wellscan_domain::traits::RecordSink;
use wellscan_domain::{Field, WellRecord};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Record rejected before reaching the database
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

const COLUMNS: &str = "identifier, source_name, well_name, operator, longitude, latitude, \
    county, state, date_stimulated, stimulated_formation, top_ft, bottom_ft, \
    stimulation_stages, type_treatment, lbs_proppant, max_treatment_pressure_psi, details";

const UPSERT: &str = "INSERT INTO well_data (identifier, source_name, well_name, operator, \
    longitude, latitude, county, state, date_stimulated, stimulated_formation, top_ft, \
    bottom_ft, stimulation_stages, type_treatment, lbs_proppant, max_treatment_pressure_psi, \
    details)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)
    ON CONFLICT(identifier) DO UPDATE SET
    source_name = excluded.source_name,
    well_name = excluded.well_name,
    operator = excluded.operator,
    longitude = excluded.longitude,
    latitude = excluded.latitude,
    county = excluded.county,
    state = excluded.state,
    date_stimulated = excluded.date_stimulated,
    stimulated_formation = excluded.stimulated_formation,
    top_ft = excluded.top_ft,
    bottom_ft = excluded.bottom_ft,
    stimulation_stages = excluded.stimulation_stages,
    type_treatment = excluded.type_treatment,
    lbs_proppant = excluded.lbs_proppant,
    max_treatment_pressure_psi = excluded.max_treatment_pressure_psi,
    details = excluded.details";

/// SQLite-based implementation of RecordSink
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should have its own SqliteStore instance.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create a new SqliteStore with the given database path
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    /// The schema is created if it does not exist yet.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let mut store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    fn initialize_schema(&mut self) -> Result<(), StoreError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }

    /// Stored records in insertion order, at most `limit` of them
    pub fn list(&self, limit: Option<usize>) -> Result<Vec<WellRecord>, StoreError> {
        // SQLite treats a negative LIMIT as "no limit"
        let limit = limit.map_or(-1, |l| i64::try_from(l).unwrap_or(i64::MAX));
        let sql = format!(
            "SELECT {} FROM well_data ORDER BY rowid LIMIT ?1",
            COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let records = stmt
            .query_map(params![limit], Self::row_to_record)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }

    /// Number of stored records
    pub fn count(&self) -> Result<usize, StoreError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM well_data", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or_default())
    }

    fn row_to_record(row: &Row<'_>) -> rusqlite::Result<WellRecord> {
        let mut record = WellRecord::new(row.get::<_, String>(0)?, row.get::<_, String>(1)?);
        for (idx, field) in Field::ALL.iter().enumerate().skip(2) {
            let value: Option<String> = row.get(idx)?;
            record.set(*field, value);
        }
        Ok(record)
    }
}

impl RecordSink for SqliteStore {
    type Error = StoreError;

    fn upsert(&mut self, record: &WellRecord) -> Result<(), Self::Error> {
        if record.identifier.is_empty() {
            return Err(StoreError::InvalidData(format!(
                "record from {} has no identifier",
                record.source_name
            )));
        }

        let values: Vec<Option<&str>> = record.fields().into_iter().map(|(_, v)| v).collect();
        self.conn
            .execute(UPSERT, rusqlite::params_from_iter(values))?;

        debug!("Upserted {}", record.identifier);
        Ok(())
    }

    fn get(&self, identifier: &str) -> Result<Option<WellRecord>, Self::Error> {
        let sql = format!("SELECT {} FROM well_data WHERE identifier = ?1", COLUMNS);
        let record = self
            .conn
            .query_row(&sql, params![identifier], Self::row_to_record)
            .optional()?;
        Ok(record)
    }
}
