//! Error types for data operations.

use thiserror::Error;

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur during data operations.
#[derive(Debug, Error)]
pub enum DataError {
    /// Generator configuration is unusable
    #[error("Invalid synthetic data config: {0}")]
    InvalidConfig(String),

    /// Unknown dataset name
    #[error("Unknown dataset: {0} (expected one of: {expected})", expected = crate::schema::Dataset::names().join(", "))]
    UnknownDataset(String),

    /// CSV read error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A CSV row could not be turned into a record
    #[error("Invalid row {line} in {source_name}: {reason}")]
    InvalidRow {
        /// Line number in the source (1-based, header is line 1)
        line: u64,
        /// File or stream the row came from
        source_name: String,
        /// What was wrong with the row
        reason: String,
    },

    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
