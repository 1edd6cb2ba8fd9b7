//! Error types for txquery

use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// A field that is not a nonnegative item identifier.
    #[error("malformed item {field:?} on line {line}")]
    Malformed { line: usize, field: String },

    /// Single query selection outside the batch.
    #[error("query {index} out of range, batch has {len} queries")]
    QueryOutOfRange { index: usize, len: usize },
}
