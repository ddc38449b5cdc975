//! Wellscan Extractor
//!
//! Derives a normalized well record from the text of a regulatory well
//! document.
//!
//! # Overview
//!
//! Documents are heterogeneous: the same label can appear several times,
//! values get reflowed across lines, and some scans carry no usable text at
//! all. Every field is therefore extracted in two steps. A pattern family
//! collects all raw candidates, then a field-specific resolver reduces them
//! to one canonical value. Some resolvers depend on others (well name, then
//! county, then state); the registry enforces that order.
//!
//! # Architecture
//!
//! ```text
//! path → TextSource → OcrDecider ─(rescan once)→ Rescanner → TextSource
//!                         │
//!                         ▼
//!        ResolverRegistry + StimulationExtractor → normalize → RecordSink
//! ```
//!
//! # Example Usage
//!
//! ```no_run
//! use wellscan_extractor::{Extractor, ExtractorConfig, Pipeline};
//! use wellscan_acquire::{OcrRescanner, PdfTextSource};
//! use wellscan_store::SqliteStore;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = Extractor::new(ExtractorConfig::default())?;
//! let mut pipeline = Pipeline::new(extractor, PdfTextSource::new(), OcrRescanner::default());
//! let mut store = SqliteStore::new("wells.db")?;
//!
//! let summary = pipeline.run(&["W20197.pdf", "W21266.pdf"], &mut store)?;
//! println!("Processed {} documents", summary.processed);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod decider;
mod error;
mod extractor;
pub mod inference;
mod normalize;
pub mod patterns;
mod pipeline;
mod registry;
pub mod resolvers;
mod stimulation;
mod types;


pub use config::{CountyState, ExtractorConfig, KeywordOverride};
pub use decider::OcrDecider;
pub use error::ExtractorError;
pub use extractor::Extractor;
pub use normalize::{normalize, truncate_chars};
pub use pipeline::{FallbackCounter, Pipeline};
pub use registry::ResolverRegistry;
pub use resolvers::{FieldResolver, ResolvedFields};
pub use stimulation::StimulationExtractor;
pub use types::{DocumentReport, Extraction, RunSummary};
