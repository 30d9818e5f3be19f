//! Data error types.

use thiserror::Error;

/// Errors raised while loading stat records.
#[derive(Debug, Clone, Error)]
pub enum DataError {
    /// Failed to read the input file
    #[error("I/O error: {0}")]
    Io(String),

    /// Failed to parse a row
    #[error("Parse error: {0}")]
    Parse(String),

    /// Input rows are missing a required column
    #[error("Schema mismatch: missing required column '{column}'")]
    SchemaMismatch { column: String },

    /// The source produced no rows at all
    #[error("No data returned")]
    NoData,
}

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;
