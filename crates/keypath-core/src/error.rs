use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum KeypathError {
    #[error("Invalid duration: {duration} (durations must be non-negative)")]
    InvalidDuration { duration: f64 },

    #[error("Spline has no control points")]
    EmptySpline,

    #[error("Truncated data: {0}")]
    TruncatedData(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

pub type Result<T> = std::result::Result<T, KeypathError>;
