//! Tracker error types

use thiserror::Error;

/// Errors raised by the treatment tracker
///
/// Trend queries signal insufficient data by returning `None`, not by
/// erroring; these variants cover the summary on an empty tracker and
/// the import/export paths.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Summary requested before any observation was recorded
    #[error("No data points recorded")]
    NoDataPoints,

    /// Error reading or deserializing a CSV treatment log
    #[error("CSV error: {0}")]
    Csv(String),

    /// A date column did not parse as an ISO calendar date
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },

    /// JSON export failed to serialize
    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),
}
