//! Line drawing on binary rasters
//!
//! Just enough rasterization to synthesize test patterns (the sample
//! fingerprint ridges are parallel diagonal strokes). Coordinates may
//! fall outside the raster; out-of-bounds pixels are silently clipped.

use crate::bitmap::Bitmap;

impl Bitmap {
    /// Draw a one-pixel foreground line from (x0, y0) to (x1, y1).
    ///
    /// Standard Bresenham walk; endpoints and any intermediate pixels
    /// outside the raster are clipped.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            if x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height() {
                self.set_unchecked(x as u32, y as u32, 1);
            }
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}
