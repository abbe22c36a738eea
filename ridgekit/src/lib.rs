//! ridgekit - Binary image morphology for Rust
//!
//! A small library for binary morphological processing, grown out of a
//! fingerprint-processing teaching tool. It provides:
//!
//! - A binary raster container ([`Bitmap`]) with threshold binarization
//!   and textual rendering
//! - The four morphological operations (dilation, erosion, opening,
//!   closing) over odd-sized structuring elements ([`Sel`])
//! - A UI-free dispatch layer ([`morph::MorphOp`], [`morph::Command`])
//!   for interactive front ends
//!
//! # Example
//!
//! ```
//! use ridgekit::{Bitmap, morph};
//!
//! let bm = Bitmap::from_rows(&[
//!     [0, 0, 0],
//!     [0, 1, 0],
//!     [0, 0, 0],
//! ]).unwrap();
//! let sel = morph::Sel::brick(3, 3).unwrap();
//!
//! let dilated = morph::dilate(&bm, &sel).unwrap();
//! assert_eq!(dilated.count_foreground(), 9);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use ridgekit_core::*;

// Re-export the morphology engine as a module
pub use ridgekit_morph as morph;
