//! Error types for ridgekit-morph

use thiserror::Error;

/// Errors that can occur during morphological operations
#[derive(Debug, Error)]
pub enum MorphError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] ridgekit_core::Error),

    /// Degenerate or unsupported structuring element shape
    #[error("invalid structuring element shape {width}x{height}: {reason}")]
    InvalidShape {
        width: u32,
        height: u32,
        reason: &'static str,
    },

    /// Malformed structuring element pattern string
    #[error("invalid structuring element pattern: {0}")]
    InvalidPattern(String),
}

/// Result type for morphological operations
pub type MorphResult<T> = Result<T, MorphError>;
