//! Binary morphological operations
//!
//! Implements dilation, erosion, opening, and closing on binary rasters.
//!
//! Each output pixel is a boolean reduction over the structuring
//! element's hit offsets, read from the input with zero-padding at the
//! border: dilation asks whether *any* hit lands on foreground, erosion
//! whether *all* hits do. Addressing (offset arithmetic and the padding
//! policy) lives in [`Bitmap::foreground_at`]; this module contributes
//! only the reduction predicates, so each half can be tested on its own.
//!
//! Zero-padding makes erosion eat into the border even of an all-ones
//! raster: a window hanging over the edge sees background there and
//! fails the all-hits test. That is the intended semantics, not a bug.

use crate::{MorphResult, Sel};
use ridgekit_core::Bitmap;

/// Dilate a binary raster.
///
/// Each output pixel is foreground iff any hit of the SEL, centered on
/// that pixel, lands on an input foreground pixel. Foreground regions
/// grow by the SEL's footprint; gaps narrower than the SEL fill in.
///
/// The output has the input's shape. Dilation by any SEL with at least
/// one hit at the origin never removes foreground; with the usual
/// all-ones SELs it never removes foreground at all.
pub fn dilate(bitmap: &Bitmap, sel: &Sel) -> MorphResult<Bitmap> {
    let (w, h) = bitmap.dimensions();
    let mut out = Bitmap::new(w, h)?;
    let hits: Vec<_> = sel.hit_offsets().collect();

    for y in 0..h {
        for x in 0..w {
            let on = hits
                .iter()
                .any(|&(dx, dy)| bitmap.foreground_at(x as i32 + dx, y as i32 + dy));
            if on {
                out.set_unchecked(x, y, 1);
            }
        }
    }

    Ok(out)
}

/// Erode a binary raster.
///
/// Each output pixel is foreground iff every hit of the SEL, centered
/// on that pixel, lands on an input foreground pixel. Regions too small
/// to contain the SEL's footprint are erased, and the zero-padded
/// border erodes like any other background neighborhood.
///
/// A SEL with no hits makes the all-hits test vacuously true, so the
/// output is all foreground; that follows directly from the definition
/// and is pinned down by a test rather than special-cased.
pub fn erode(bitmap: &Bitmap, sel: &Sel) -> MorphResult<Bitmap> {
    let (w, h) = bitmap.dimensions();
    let mut out = Bitmap::new(w, h)?;
    let hits: Vec<_> = sel.hit_offsets().collect();

    for y in 0..h {
        for x in 0..w {
            let on = hits
                .iter()
                .all(|&(dx, dy)| bitmap.foreground_at(x as i32 + dx, y as i32 + dy));
            if on {
                out.set_unchecked(x, y, 1);
            }
        }
    }

    Ok(out)
}

/// Open a binary raster: erosion followed by dilation.
///
/// Removes foreground protrusions and specks narrower than the SEL
/// while approximately preserving larger regions. Idempotent for a
/// fixed SEL.
pub fn open(bitmap: &Bitmap, sel: &Sel) -> MorphResult<Bitmap> {
    let eroded = erode(bitmap, sel)?;
    dilate(&eroded, sel)
}

/// Close a binary raster: dilation followed by erosion.
///
/// Fills background gaps and holes narrower than the SEL while
/// approximately preserving overall shape. Idempotent for a fixed SEL.
///
/// Closing keeps every foreground pixel whose dilated neighborhood
/// stays in bounds; foreground within a half-extent of the border can
/// erode back out of the clipped dilation.
pub fn close(bitmap: &Bitmap, sel: &Sel) -> MorphResult<Bitmap> {
    let dilated = dilate(bitmap, sel)?;
    erode(&dilated, sel)
}

/// Dilate with an all-ones rectangular element of the given odd size.
pub fn dilate_brick(bitmap: &Bitmap, width: u32, height: u32) -> MorphResult<Bitmap> {
    dilate(bitmap, &Sel::brick(width, height)?)
}

/// Erode with an all-ones rectangular element of the given odd size.
pub fn erode_brick(bitmap: &Bitmap, width: u32, height: u32) -> MorphResult<Bitmap> {
    erode(bitmap, &Sel::brick(width, height)?)
}

/// Open with an all-ones rectangular element of the given odd size.
pub fn open_brick(bitmap: &Bitmap, width: u32, height: u32) -> MorphResult<Bitmap> {
    open(bitmap, &Sel::brick(width, height)?)
}

/// Close with an all-ones rectangular element of the given odd size.
pub fn close_brick(bitmap: &Bitmap, width: u32, height: u32) -> MorphResult<Bitmap> {
    close(bitmap, &Sel::brick(width, height)?)
}
