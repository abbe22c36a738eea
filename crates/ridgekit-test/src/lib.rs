//! ridgekit-test - Regression test support
//!
//! Provides a small regression runner ([`RegParams`]) that tracks
//! indexed comparisons across a test and reports every failure at once,
//! plus the named fixtures shared by the regression suites (the
//! textbook 10x10 raster, synthetic ridge patterns).
//!
//! # Usage
//!
//! ```
//! use ridgekit_test::{RegParams, fixtures};
//!
//! let mut rp = RegParams::new("example");
//! let bm = fixtures::textbook_raster();
//! rp.compare_values(26.0, bm.count_foreground() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
pub mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use params::RegParams;
