//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur while building or running the extraction engine
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// A field pattern failed to compile
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Two or more resolvers depend on each other
    #[error("Resolver dependency cycle among: {0}")]
    DependencyCycle(String),

    /// A resolver depends on a field no resolver produces
    #[error("Resolver for '{field}' depends on unregistered field '{dependency}'")]
    UnknownDependency {
        /// Field whose resolver declared the dependency
        field: String,
        /// The missing dependency
        dependency: String,
    },

    /// Two resolvers registered for the same field
    #[error("Duplicate resolver for field '{0}'")]
    DuplicateResolver(String),

    /// A document or OCR output could not be read
    #[error("Acquisition error: {0}")]
    Acquire(String),

    /// OCR re-acquisition could not be started
    #[error("Rescan error: {0}")]
    Rescan(String),

    /// Record sink error
    #[error("Sink error: {0}")]
    Sink(String),
}
