//! Regression test parameters and comparisons

use crate::error::TestError;
use ridgekit_core::Bitmap;

/// Regression test state
///
/// Tracks the test name, a running comparison index, and every recorded
/// failure. Call [`RegParams::cleanup`] at the end of the test and
/// assert its result so a single run reports all mismatches.
pub struct RegParams {
    /// Name of the test (e.g., "binmorph")
    pub test_name: String,
    /// Current comparison index (incremented before each comparison)
    index: usize,
    /// Recorded failures
    failures: Vec<TestError>,
}

impl RegParams {
    /// Create new regression test parameters.
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            failures: Vec::new(),
        }
    }

    /// Get the current comparison index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Recorded failures so far.
    pub fn failures(&self) -> &[TestError] {
        &self.failures
    }

    fn record(&mut self, err: TestError) {
        eprintln!("Failure in {}_reg: {}", self.test_name, err);
        self.failures.push(err);
    }

    /// Compare two floating-point values within `delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;

        if (expected - actual).abs() > delta {
            self.record(TestError::ValueMismatch {
                index: self.index,
                expected,
                actual,
                delta,
            });
            false
        } else {
            true
        }
    }

    /// Compare two bitmaps for exact equality.
    ///
    /// On mismatch, both rasters are printed as numeric matrices.
    pub fn compare_bitmaps(&mut self, expected: &Bitmap, actual: &Bitmap) -> bool {
        self.index += 1;

        if expected != actual {
            eprintln!("expected:\n{}actual:\n{}", expected, actual);
            self.record(TestError::BitmapMismatch { index: self.index });
            false
        } else {
            true
        }
    }

    /// Record an arbitrary boolean check.
    pub fn check(&mut self, ok: bool, what: &str) -> bool {
        self.index += 1;
        if !ok {
            self.record(TestError::CheckFailed {
                index: self.index,
                what: what.to_string(),
            });
        }
        ok
    }

    /// Report the final status and return overall success.
    pub fn cleanup(&self) -> bool {
        if self.failures.is_empty() {
            eprintln!("SUCCESS: {}_reg ({} comparisons)", self.test_name, self.index);
            true
        } else {
            eprintln!(
                "FAILURE: {}_reg ({} of {} comparisons failed)",
                self.test_name,
                self.failures.len(),
                self.index
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_values() {
        let mut rp = RegParams::new("params_values");
        assert!(rp.compare_values(1.0, 1.0, 0.0));
        assert!(rp.compare_values(1.0, 1.05, 0.1));
        assert!(!rp.compare_values(1.0, 2.0, 0.5));
        assert_eq!(rp.index(), 3);
        assert_eq!(rp.failures().len(), 1);
        assert!(matches!(
            rp.failures()[0],
            TestError::ValueMismatch { index: 3, .. }
        ));
        assert!(!rp.cleanup());
    }

    #[test]
    fn test_compare_bitmaps() {
        let mut rp = RegParams::new("params_bitmaps");
        let a = Bitmap::from_rows(&[[0, 1], [1, 0]]).unwrap();
        let b = a.clone();
        assert!(rp.compare_bitmaps(&a, &b));
        let c = Bitmap::from_rows(&[[1, 1], [1, 0]]).unwrap();
        assert!(!rp.compare_bitmaps(&a, &c));
        assert!(!rp.cleanup());
    }

    #[test]
    fn test_check() {
        let mut rp = RegParams::new("params_check");
        assert!(rp.check(true, "fine"));
        assert!(rp.cleanup());
    }
}
