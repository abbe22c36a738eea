//! Textbook morphology demonstration
//!
//! Builds the classic hand-written 10x10 binary raster and a 3x3
//! all-ones structuring element, applies all four morphological
//! operations, and prints the five grids (original plus the four
//! results) as numeric matrices and ASCII pictures.
//!
//! Run with:
//! ```
//! cargo run -p ridgekit --bin textbook_demo
//! ```

use ridgekit::Bitmap;
use ridgekit::morph::{MorphOp, Sel};

const SAMPLE: [[u8; 10]; 10] = [
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 1, 1, 0, 0, 1, 0, 0, 0],
    [0, 0, 0, 1, 1, 1, 1, 1, 0, 0],
    [0, 0, 1, 1, 1, 1, 1, 0, 0, 0],
    [0, 0, 1, 1, 1, 1, 0, 0, 0, 0],
    [0, 0, 1, 1, 1, 1, 1, 0, 0, 0],
    [0, 0, 0, 1, 1, 1, 1, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
];

fn print_grid(title: &str, bm: &Bitmap) {
    println!("{}:", title);
    println!("{}", bm);
    println!("{}", bm.to_ascii());
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let original = Bitmap::from_rows(&SAMPLE)?;
    let sel = Sel::square(3)?;

    print_grid("Original", &original);

    // Same presentation order as the classic demonstration:
    // dilation, erosion, closing, opening.
    for op in [MorphOp::Dilate, MorphOp::Erode, MorphOp::Close, MorphOp::Open] {
        let result = op.apply(&original, &sel)?;
        print_grid(op.name(), &result);
    }

    Ok(())
}
