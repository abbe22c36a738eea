//! ridgekit-core - Binary raster container for morphological processing
//!
//! This crate provides the fundamental data structures used throughout
//! the ridgekit library:
//!
//! - [`Bitmap`] - A rectangular binary raster (every cell is 0 or 1)
//! - [`Error`] / [`Result`] - Unified error handling
//! - [`binarize`] - Threshold conversion from an 8-bit grayscale buffer
//!
//! The raster is a plain value type: one byte per pixel, row-major,
//! freshly allocated by every producing operation. Nothing in this crate
//! performs I/O or holds state between calls.

pub mod bitmap;
pub mod convert;
pub mod error;
pub mod graphics;

pub use bitmap::Bitmap;
pub use convert::binarize;
pub use error::{Error, Result};
