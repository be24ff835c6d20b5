//! Error types for scheduler-core.

use thiserror::Error;

/// Result type alias using ScheduleError.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Contract violations rejected before any scheduling is computed.
#[derive(Debug, Error, PartialEq)]
pub enum ScheduleError {
    #[error("quality {0} is outside the 0-5 scale")]
    InvalidQuality(u8),

    #[error("unknown rating: {0}")]
    InvalidRating(String),

    #[error("invalid interval: {0}")]
    InvalidInterval(f64),

    #[error("invalid ease factor: {0}")]
    InvalidEaseFactor(f64),

    #[error("{field} must be non-negative, got {value}")]
    NegativeCount { field: &'static str, value: i64 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
