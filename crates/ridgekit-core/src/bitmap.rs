//! Bitmap - the binary raster container
//!
//! A `Bitmap` is a rectangular grid of binary pixels (0 = background,
//! 1 = foreground), stored one byte per pixel in row-major order. Both
//! dimensions are at least 1; degenerate rasters cannot be constructed,
//! so downstream code may rely on that invariant.
//!
//! # Value semantics
//!
//! `Bitmap` is a plain value type. Operations that produce a raster
//! allocate a fresh one; nothing shares or retains pixel data across
//! calls. Equality is structural (same dimensions, same pixels).

use crate::error::{Error, Result};
use std::fmt;

/// A rectangular binary raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Bitmap {
    /// Create a new all-background bitmap.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            data: vec![0; width as usize * height as usize],
        })
    }

    /// Build a bitmap from literal rows.
    ///
    /// Every row must have the same nonzero length and contain only 0s
    /// and 1s. Useful for hand-written test grids:
    ///
    /// ```
    /// use ridgekit_core::Bitmap;
    ///
    /// let bm = Bitmap::from_rows(&[
    ///     [0, 1, 0],
    ///     [1, 1, 1],
    ///     [0, 1, 0],
    /// ]).unwrap();
    /// assert_eq!(bm.count_foreground(), 5);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for an empty grid and
    /// [`Error::InvalidParameter`] for ragged rows or non-binary values.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.as_ref().len()) as u32;
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let mut data = Vec::with_capacity(width as usize * height as usize);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width as usize {
                return Err(Error::InvalidParameter(format!(
                    "row {} has length {}, expected {}",
                    y,
                    row.len(),
                    width
                )));
            }
            for &v in row {
                if v > 1 {
                    return Err(Error::InvalidParameter(format!(
                        "pixel value {} in row {} is not binary",
                        v, y
                    )));
                }
                data.push(v);
            }
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Get the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x < self.width && y < self.height {
            Some(self.data[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }

    /// Get a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> u8 {
        assert!(x < self.width && y < self.height);
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Read a pixel at signed coordinates with zero-padding semantics.
    ///
    /// Any coordinate outside the raster reads as background. This is
    /// the boundary policy for all morphological windows: the world
    /// beyond the image edge is background.
    #[inline]
    pub fn foreground_at(&self, x: i32, y: i32) -> bool {
        x >= 0
            && y >= 0
            && (x as u32) < self.width
            && (y as u32) < self.height
            && self.data[y as usize * self.width as usize + x as usize] != 0
    }

    /// Set a pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] for coordinates outside the raster
    /// and [`Error::InvalidParameter`] for a non-binary value.
    pub fn set(&mut self, x: u32, y: u32, val: u8) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        if val > 1 {
            return Err(Error::InvalidParameter(format!(
                "pixel value {} is not binary",
                val
            )));
        }
        self.data[y as usize * self.width as usize + x as usize] = val;
        Ok(())
    }

    /// Set a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn set_unchecked(&mut self, x: u32, y: u32, val: u8) {
        assert!(x < self.width && y < self.height);
        self.data[y as usize * self.width as usize + x as usize] = val;
    }

    /// Fill the entire raster with the given binary value.
    pub fn fill(&mut self, val: u8) {
        debug_assert!(val <= 1);
        self.data.fill(val);
    }

    /// Count foreground pixels.
    pub fn count_foreground(&self) -> u64 {
        self.data.iter().filter(|&&v| v != 0).count() as u64
    }

    /// Raw pixel data, row-major, one byte per pixel.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// True if every foreground pixel of `self` is foreground in `other`.
    ///
    /// Requires identical dimensions; returns `false` otherwise.
    pub fn is_subset_of(&self, other: &Bitmap) -> bool {
        self.dimensions() == other.dimensions()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(&a, &b)| a == 0 || b != 0)
    }

    /// Render as a two-tone ASCII picture (`#` foreground, `.` background).
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                out.push(if self.get_unchecked(x, y) != 0 { '#' } else { '.' });
            }
            out.push('\n');
        }
        out
    }
}

/// Prints the raster as a numeric matrix, one row per line.
impl fmt::Display for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.get_unchecked(x, y))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
