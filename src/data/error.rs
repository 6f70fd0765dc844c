//! Error types for data operations
//!
//! Every load failure ends in the same "no data" presentation; the variants
//! exist so operators can tell failures apart in the logs.

use thiserror::Error;

pub use crate::constants::MAX_CSV_ROWS;

/// Errors that can occur while fetching or parsing a data set
#[derive(Error, Debug)]
pub enum DataError {
    /// Transport-level failure from the HTTP client
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP {status} fetching {url}")]
    Http { status: u16, url: String },

    /// CSV parsing error
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Too many rows for an in-memory widget
    #[error("Too many rows: {rows} (max {max_rows})")]
    TooManyRows { rows: usize, max_rows: usize },

    /// URL could not be parsed or has no registered payload
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Generic error message
    #[error("{0}")]
    Other(String),
}

/// Result type alias for data operations
pub type DataResult<T> = Result<T, DataError>;

impl From<String> for DataError {
    fn from(s: String) -> Self {
        DataError::Other(s)
    }
}

impl From<&str> for DataError {
    fn from(s: &str) -> Self {
        DataError::Other(s.to_string())
    }
}
