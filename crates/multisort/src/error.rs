//! Error types for the multisort crate.

use thiserror::Error;

/// Errors that can occur when building sort keys or checking records.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SortError {
    /// Two present values under the same sort key cannot be ordered.
    #[error("field '{field}' holds incomparable values: {left} vs {right}")]
    Incomparable {
        field: String,
        left: &'static str,
        right: &'static str,
    },

    /// A sort key string could not be parsed.
    #[error("invalid sort key '{0}': expected FIELD or FIELD:asc|desc")]
    InvalidSortKey(String),

    /// A direction string was neither `asc` nor `desc`.
    #[error("invalid sort direction '{0}': expected asc or desc")]
    InvalidDirection(String),

    /// A JSON value has no record or field representation.
    #[error("unsupported JSON {kind}: {context}")]
    UnsupportedJson {
        kind: &'static str,
        context: String,
    },
}

/// Result type for multisort operations.
pub type Result<T> = std::result::Result<T, SortError>;
