//! Error types for the trend_analytics crate

use thiserror::Error;

/// Custom error types for the trend_analytics crate
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error from inputs too small for a calculation
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Error from malformed input values
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Error from JSON serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Error from CSV operations
    #[error("CSV error: {0}")]
    CsvError(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, AnalyticsError>;

impl From<serde_json::Error> for AnalyticsError {
    fn from(err: serde_json::Error) -> Self {
        AnalyticsError::SerializationError(err.to_string())
    }
}

impl From<csv::Error> for AnalyticsError {
    fn from(err: csv::Error) -> Self {
        AnalyticsError::CsvError(err.to_string())
    }
}
