//! Operation dispatch
//!
//! Maps operation identifiers to engine calls, keeping the engine free
//! of any UI concern. An interactive front end (out of scope here)
//! translates its buttons into a [`Command`] and renders the labelled
//! rasters that come back.

use crate::binary::{close, dilate, erode, open};
use crate::{Bitmap, MorphResult, Sel};

/// Square kernel sizes offered for interactive selection.
pub const KERNEL_SIZES: [u32; 5] = [3, 5, 7, 9, 11];

/// One of the four morphological operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MorphOp {
    /// Grow foreground by the SEL footprint
    Dilate,
    /// Shrink foreground by the SEL footprint
    Erode,
    /// Erosion then dilation
    Open,
    /// Dilation then erosion
    Close,
}

impl MorphOp {
    /// All operations, in presentation order.
    pub const ALL: [MorphOp; 4] = [
        MorphOp::Dilate,
        MorphOp::Erode,
        MorphOp::Open,
        MorphOp::Close,
    ];

    /// Human-readable operation name.
    pub fn name(&self) -> &'static str {
        match self {
            MorphOp::Dilate => "Dilation",
            MorphOp::Erode => "Erosion",
            MorphOp::Open => "Opening",
            MorphOp::Close => "Closing",
        }
    }

    /// Apply this operation to a raster.
    pub fn apply(&self, bitmap: &Bitmap, sel: &Sel) -> MorphResult<Bitmap> {
        match self {
            MorphOp::Dilate => dilate(bitmap, sel),
            MorphOp::Erode => erode(bitmap, sel),
            MorphOp::Open => open(bitmap, sel),
            MorphOp::Close => close(bitmap, sel),
        }
    }
}

/// A user-level request: a single operation or the full panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Apply one operation
    Apply(MorphOp),
    /// Apply all four operations for side-by-side display
    ShowAll,
}

impl Command {
    /// Run the command, returning labelled result rasters.
    ///
    /// `Apply` yields one entry; `ShowAll` yields all four in
    /// [`MorphOp::ALL`] order.
    pub fn run(&self, bitmap: &Bitmap, sel: &Sel) -> MorphResult<Vec<(&'static str, Bitmap)>> {
        let ops: &[MorphOp] = match self {
            Command::Apply(op) => std::slice::from_ref(op),
            Command::ShowAll => &MorphOp::ALL,
        };
        ops.iter()
            .map(|op| Ok((op.name(), op.apply(bitmap, sel)?)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Bitmap {
        Bitmap::from_rows(&[
            [0, 0, 0, 0, 0],
            [0, 1, 1, 1, 0],
            [0, 1, 1, 1, 0],
            [0, 1, 1, 1, 0],
            [0, 0, 0, 0, 0],
        ])
        .unwrap()
    }

    #[test]
    fn test_op_apply_matches_engine() {
        let bm = sample();
        let sel = Sel::brick(3, 3).unwrap();
        assert_eq!(
            MorphOp::Dilate.apply(&bm, &sel).unwrap(),
            dilate(&bm, &sel).unwrap()
        );
        assert_eq!(
            MorphOp::Close.apply(&bm, &sel).unwrap(),
            close(&bm, &sel).unwrap()
        );
    }

    #[test]
    fn test_show_all_order_and_labels() {
        let bm = sample();
        let sel = Sel::brick(3, 3).unwrap();
        let results = Command::ShowAll.run(&bm, &sel).unwrap();
        let labels: Vec<_> = results.iter().map(|(name, _)| *name).collect();
        assert_eq!(labels, ["Dilation", "Erosion", "Opening", "Closing"]);
        for (_, out) in &results {
            assert_eq!(out.dimensions(), bm.dimensions());
        }
    }

    #[test]
    fn test_single_command() {
        let bm = sample();
        let sel = Sel::brick(3, 3).unwrap();
        let results = Command::Apply(MorphOp::Erode).run(&bm, &sel).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].0, "Erosion");
        assert_eq!(results[0].1, erode(&bm, &sel).unwrap());
    }

    #[test]
    fn test_kernel_sizes_are_valid_sels() {
        for size in KERNEL_SIZES {
            let sel = Sel::square(size).unwrap();
            assert_eq!(sel.hit_count(), (size * size) as usize);
        }
    }
}
