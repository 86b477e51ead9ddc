//! Error types for the stream-filters crate.
//!
//! Evaluating a record never fails. Everything here is raised while a
//! filter set is being declared or loaded, and is reported to the caller
//! immediately.

use thiserror::Error;

/// Errors raised while configuring a filter set
#[derive(Error, Debug)]
pub enum FilterError {
    /// A predicate was added after the registry entered its evaluation phase
    #[error("Cannot register '{name}': the predicate registry is sealed")]
    RegistrySealed { name: String },

    /// A declarative entry named a condition that does not exist
    #[error("Unknown filter declaration: {name}")]
    UnknownDeclaration { name: String },

    /// A declaration argument could not be interpreted
    #[error("Invalid argument for {declaration}: {reason}")]
    InvalidArgument { declaration: String, reason: String },

    /// Declaration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Declaration file is not valid JSON for a filter config
    #[error("Failed to parse filter config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, FilterError>;
