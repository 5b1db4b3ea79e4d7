//! Error types for the EasyViz library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for EasyViz operations.
///
/// Chart validation failures are not errors: they are reported as
/// [`ValidationResult::Rejected`](crate::chart::ValidationResult) values.
#[derive(Debug, Error)]
pub enum EasyvizError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid delimiter specified.
    #[error("Invalid delimiter: {0}")]
    InvalidDelimiter(String),

    /// Empty input or no columns to profile.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Column referenced by a request does not exist in the table.
    #[error("Column '{0}' not found")]
    ColumnNotFound(String),

    /// Column holds values that cannot be read as numbers.
    #[error("Column '{column}' is not numeric (row {row}: '{value}')")]
    NonNumericColumn {
        column: String,
        row: usize,
        value: String,
    },

    /// Not enough values to compute the requested series.
    #[error("Insufficient data for '{column}': need {required} values, got {actual}")]
    InsufficientData {
        column: String,
        required: usize,
        actual: usize,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for EasyViz operations.
pub type Result<T> = std::result::Result<T, EasyvizError>;
