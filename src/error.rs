//! Error types for the fallible edges of the pagination core
//!
//! Window arithmetic itself is total and never returns these; they come from
//! page-count normalization, item ranges, configuration and JSON export.

use thiserror::Error;

/// Main error type for page-window operations
#[derive(Error, Debug)]
pub enum PaginationError {
    /// A count that must be at least 1 was zero
    #[error("{field} must be a positive number")]
    NotPositive { field: &'static str },

    /// Neither an explicit page count nor a total/per-page pair was given
    #[error("must define pageCount or totalCount and itemsPerPage")]
    MissingPageCount,

    /// Navigation control name not recognized
    #[error("unknown navigation control '{name}'")]
    UnknownControl { name: String },

    /// JSON parsing or serialization failed
    #[error("JSON error at {context}: {source}")]
    Json {
        context: &'static str,
        source: serde_json::Error,
    },
}

/// Result type alias for page-window operations
pub type Result<T> = std::result::Result<T, PaginationError>;

impl PaginationError {
    /// Create a non-positive count error
    pub fn not_positive(field: &'static str) -> Self {
        Self::NotPositive { field }
    }

    /// Create an unknown control error
    pub fn unknown_control(name: impl Into<String>) -> Self {
        Self::UnknownControl { name: name.into() }
    }

    /// Create a JSON error with context
    pub fn json(context: &'static str, source: serde_json::Error) -> Self {
        Self::Json { context, source }
    }
}
