//! Grayscale-to-binary conversion
//!
//! Callers that source images from files decode them elsewhere and hand
//! this crate a plain grayscale buffer. Thresholding is the only
//! conversion the morphology pipeline needs.

use crate::bitmap::Bitmap;
use crate::error::{Error, Result};

/// Binarize an 8-bit grayscale buffer by global threshold.
///
/// Pixels strictly above `threshold` become foreground (1), the rest
/// background (0). The buffer is row-major, `width * height` bytes.
///
/// # Errors
///
/// Returns [`Error::InvalidDimension`] for zero dimensions and
/// [`Error::InvalidParameter`] if the buffer length does not match.
pub fn binarize(gray: &[u8], width: u32, height: u32, threshold: u8) -> Result<Bitmap> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    let expected = width as usize * height as usize;
    if gray.len() != expected {
        return Err(Error::InvalidParameter(format!(
            "grayscale buffer has {} bytes, expected {}",
            gray.len(),
            expected
        )));
    }

    let mut bm = Bitmap::new(width, height)?;
    for y in 0..height {
        for x in 0..width {
            let v = gray[y as usize * width as usize + x as usize];
            if v > threshold {
                bm.set_unchecked(x, y, 1);
            }
        }
    }
    Ok(bm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binarize_threshold() {
        let gray = [0u8, 127, 128, 255];
        let bm = binarize(&gray, 2, 2, 127).unwrap();
        assert_eq!(bm.get(0, 0), Some(0));
        assert_eq!(bm.get(1, 0), Some(0)); // 127 is not strictly above
        assert_eq!(bm.get(0, 1), Some(1));
        assert_eq!(bm.get(1, 1), Some(1));
    }

    #[test]
    fn test_binarize_length_mismatch() {
        assert!(binarize(&[0u8; 5], 2, 2, 127).is_err());
    }

    #[test]
    fn test_binarize_zero_dimension() {
        assert!(binarize(&[], 0, 4, 127).is_err());
    }
}
