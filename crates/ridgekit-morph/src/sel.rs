//! Structuring element (SEL) for morphological operations
//!
//! A structuring element is a small rectangular binary mask that defines
//! the neighborhood shape of a morphological operation. Its origin is
//! fixed at the geometric center, which is only well-defined when both
//! dimensions are odd; even or zero dimensions are rejected outright
//! rather than silently biasing the window toward one corner.

use crate::error::{MorphError, MorphResult};

/// Structuring element: an odd-sized rectangular binary mask.
///
/// Cells equal to 1 ("hits") participate in the operation; cells equal
/// to 0 are ignored. The origin is at `(width / 2, height / 2)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sel {
    width: u32,
    height: u32,
    data: Vec<u8>,
    name: Option<String>,
}

fn check_shape(width: u32, height: u32) -> MorphResult<()> {
    if width == 0 || height == 0 {
        return Err(MorphError::InvalidShape {
            width,
            height,
            reason: "dimensions must be nonzero",
        });
    }
    if width % 2 == 0 || height % 2 == 0 {
        return Err(MorphError::InvalidShape {
            width,
            height,
            reason: "dimensions must be odd so the center is well-defined",
        });
    }
    Ok(())
}

impl Sel {
    /// Create a rectangular "brick" element with every cell a hit.
    pub fn brick(width: u32, height: u32) -> MorphResult<Self> {
        check_shape(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![1; width as usize * height as usize],
            name: None,
        })
    }

    /// Create a square all-ones element (the usual kernel shape).
    pub fn square(size: u32) -> MorphResult<Self> {
        let mut sel = Self::brick(size, size)?;
        sel.name = Some(format!("square{}", size));
        Ok(sel)
    }

    /// Build an element from literal rows of 0s and 1s.
    ///
    /// Rows must be rectangular with odd, nonzero dimensions.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> MorphResult<Self> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.as_ref().len()) as u32;
        check_shape(width, height)?;

        let mut data = Vec::with_capacity(width as usize * height as usize);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width as usize {
                return Err(MorphError::InvalidPattern(format!(
                    "row {} has length {}, expected {}",
                    y,
                    row.len(),
                    width
                )));
            }
            for &v in row {
                if v > 1 {
                    return Err(MorphError::InvalidPattern(format!(
                        "cell value {} in row {} is not binary",
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
            name: None,
        })
    }

    /// Build an element from a string pattern.
    ///
    /// `x` marks a hit, `.` (or `o`) a background cell; rows are
    /// separated by newlines:
    ///
    /// ```
    /// use ridgekit_morph::Sel;
    ///
    /// let cross = Sel::from_string(
    ///     ".x.\n\
    ///      xxx\n\
    ///      .x.",
    /// ).unwrap();
    /// assert_eq!(cross.hit_count(), 5);
    /// ```
    pub fn from_string(pattern: &str) -> MorphResult<Self> {
        let rows: Vec<Vec<u8>> = pattern
            .lines()
            .map(|line| {
                line.chars()
                    .map(|c| match c {
                        'x' | 'X' => Ok(1),
                        '.' | 'o' | 'O' => Ok(0),
                        other => Err(MorphError::InvalidPattern(format!(
                            "unexpected character '{}'",
                            other
                        ))),
                    })
                    .collect()
            })
            .collect::<MorphResult<_>>()?;
        Self::from_rows(&rows)
    }

    /// Get the width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// X coordinate of the center origin.
    #[inline]
    pub fn origin_x(&self) -> u32 {
        self.width / 2
    }

    /// Y coordinate of the center origin.
    #[inline]
    pub fn origin_y(&self) -> u32 {
        self.height / 2
    }

    /// Optional descriptive name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set the descriptive name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Cell value at (x, y), or `None` out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x < self.width && y < self.height {
            Some(self.data[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }

    /// Number of hit cells.
    pub fn hit_count(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }

    /// Iterate over hit positions as (dx, dy) offsets from the origin.
    pub fn hit_offsets(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let cx = self.origin_x() as i32;
        let cy = self.origin_y() as i32;
        let width = self.width;

        self.data
            .iter()
            .enumerate()
            .filter_map(move |(idx, &v)| {
                if v != 0 {
                    let x = (idx as u32 % width) as i32;
                    let y = (idx as u32 / width) as i32;
                    Some((x - cx, y - cy))
                } else {
                    None
                }
            })
    }
}
