//! Error types for ridgekit-core
//!
//! A single error enum covers every failure in the core crate. Each
//! variant carries enough context for diagnostics without exposing
//! representation details.

use thiserror::Error;

/// ridgekit core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid raster dimensions (zero width or height)
    #[error("invalid raster dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Coordinates outside the raster
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} raster")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
