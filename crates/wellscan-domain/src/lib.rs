//! Wellscan Domain Layer
//!
//! This crate contains the output model of the well-record engine and the
//! trait boundaries to everything around it. It has no external dependencies;
//! the engine, collaborators and storage all live in other crates.
//!
//! ## Key Concepts
//!
//! - **WellRecord**: the normalized record derived from one source document
//! - **StimulationRecord**: the first treatment event found in that document
//! - **Field**: the closed schema of record columns and their maximum lengths
//! - **Collaborators**: text acquisition, OCR re-acquisition and the record sink
//!
//! ## Architecture
//!
//! ```text
//! TextSource ──► Extractor ──► WellRecord ──► RecordSink
//!      ▲             │
//!      └─ Rescanner ◄┘ (identifier missing)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod field;
pub mod record;
pub mod traits;

// Re-exports for convenience
pub use field::Field;
pub use record::{StimulationRecord, WellRecord};
