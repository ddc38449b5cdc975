//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the extraction engine and the
//! collaborators around it. Implementations live in other crates.

use crate::WellRecord;
use std::path::{Path, PathBuf};

/// Trait for turning a document into text
///
/// Implemented by the acquisition layer (wellscan-acquire)
pub trait TextSource {
    /// Error type for acquisition failures
    type Error;

    /// Extract the full text of the document at `path`
    fn acquire(&self, path: &Path) -> Result<String, Self::Error>;
}

/// Trait for re-deriving a document through optical character recognition
///
/// Implemented by the acquisition layer (wellscan-acquire)
pub trait Rescanner {
    /// Error type for rescan failures
    type Error;

    /// Re-scan the document at `path` and return where the output landed
    ///
    /// The output is read back through a `TextSource`; the rescanner itself
    /// never returns text.
    fn rescan(&self, path: &Path) -> Result<PathBuf, Self::Error>;
}

/// Trait for persisting finished records
///
/// Implemented by the infrastructure layer (wellscan-store)
pub trait RecordSink {
    /// Error type for sink operations
    type Error;

    /// Insert the record, or overwrite every field of the record with the
    /// same identifier
    fn upsert(&mut self, record: &WellRecord) -> Result<(), Self::Error>;

    /// Get a record by identifier
    fn get(&self, identifier: &str) -> Result<Option<WellRecord>, Self::Error>;
}
