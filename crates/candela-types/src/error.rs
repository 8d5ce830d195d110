//! Error types for candela.

use thiserror::Error;

/// Result type alias for candela operations.
pub type Result<T> = std::result::Result<T, CandelaError>;

/// Errors that can occur during aggregation and statistics computation.
#[derive(Error, Debug)]
pub enum CandelaError {
    /// Malformed timeframe token.
    #[error("invalid timeframe '{0}', expected 'tick' or <count><unit> with unit m, h or d")]
    InvalidTimeframe(String),

    /// A moment statistic was requested with fewer data points than its
    /// minimum sample size.
    #[error("insufficient data for {statistic}: requires at least {required} values, got {actual}")]
    InsufficientData {
        /// The statistic that could not be computed.
        statistic: &'static str,
        /// Minimum number of values the statistic needs.
        required: usize,
        /// Number of values actually supplied.
        actual: usize,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_data_display() {
        let err = CandelaError::InsufficientData {
            statistic: "skewness",
            required: 3,
            actual: 1,
        };
        let msg = err.to_string();
        assert!(msg.contains("skewness"));
        assert!(msg.contains("at least 3"));
    }

    #[test]
    fn test_invalid_timeframe_display() {
        let err = CandelaError::InvalidTimeframe("5x".to_string());
        assert!(err.to_string().contains("'5x'"));
    }
}
