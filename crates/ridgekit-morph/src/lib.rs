//! ridgekit-morph - Binary morphology engine
//!
//! This crate implements the four textbook morphological operations on
//! binary rasters:
//!
//! - [`dilate`] - grow foreground regions by the structuring element
//! - [`erode`] - shrink foreground regions by the structuring element
//! - [`open`] - erosion followed by dilation (removes small noise)
//! - [`close`] - dilation followed by erosion (fills small gaps)
//!
//! All operations use zero-padding boundary semantics: space outside
//! the raster is background. Outputs always have the input's shape.
//!
//! Structuring elements ([`Sel`]) are rectangular binary masks with a
//! well-defined center; only odd dimensions are accepted.

pub mod binary;
pub mod dispatch;
mod error;
pub mod sel;

pub use error::{MorphError, MorphResult};
pub use sel::Sel;

// Re-export the core raster type so callers need only this crate.
pub use ridgekit_core::Bitmap;

pub use binary::{
    close, close_brick, dilate, dilate_brick, erode, erode_brick, open, open_brick,
};

pub use dispatch::{Command, KERNEL_SIZES, MorphOp};
