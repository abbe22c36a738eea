//! Named test fixtures
//!
//! The sample inputs used across the regression suites live here as
//! explicit constructors rather than ad-hoc globals, so every test
//! names exactly the data it uses.

use ridgekit_core::Bitmap;

/// The textbook 10x10 demonstration raster.
///
/// A small blob with a one-pixel notch and a protruding speck, chosen
/// so that a 3x3 opening removes the speck and a 3x3 closing fills the
/// notch. 26 foreground pixels.
pub const TEXTBOOK_RASTER: [[u8; 10]; 10] = [
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

/// Build the textbook raster as a [`Bitmap`].
pub fn textbook_raster() -> Bitmap {
    Bitmap::from_rows(&TEXTBOOK_RASTER).expect("textbook raster is well-formed")
}

/// An all-foreground raster of the given size.
pub fn all_ones(width: u32, height: u32) -> Bitmap {
    let mut bm = Bitmap::new(width, height).expect("nonzero fixture dimensions");
    bm.fill(1);
    bm
}

/// A synthetic fingerprint-like pattern: parallel diagonal ridge
/// strokes, three pixels thick, on a 200x200 raster.
pub fn synthetic_ridges() -> Bitmap {
    let mut bm = Bitmap::new(200, 200).expect("fixture dimensions");
    for i in (50..150).step_by(10) {
        // Thicken each stroke by drawing at three x offsets
        for off in -1..=1 {
            bm.draw_line(i + off, 50, i + 30 + off, 150);
        }
    }
    bm
}
