//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Value comparison failed
    #[error(
        "value comparison failed at index {index}: expected {expected}, got {actual}, delta {delta}"
    )]
    ValueMismatch {
        index: usize,
        expected: f64,
        actual: f64,
        delta: f64,
    },

    /// Bitmap comparison failed
    #[error("bitmap comparison failed at index {index}")]
    BitmapMismatch { index: usize },

    /// A named boolean check failed
    #[error("check failed at index {index}: {what}")]
    CheckFailed { index: usize, what: String },
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
