//! Morphological property regression test
//!
//! Checks the order-theoretic laws of the four operations on randomized
//! rasters: shape preservation, the 1x1 identity, dilation/erosion
//! extensivity bounds, and idempotence of opening and closing.
//!
//! Run with:
//! ```
//! cargo test -p ridgekit-morph --test morphprops_reg
//! ```

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use ridgekit_morph::{Bitmap, Sel, close, dilate, erode, open};
use ridgekit_test::RegParams;

fn random_bitmap(rng: &mut StdRng, width: u32, height: u32, density: f64) -> Bitmap {
    let mut bm = Bitmap::new(width, height).unwrap();
    for y in 0..height {
        for x in 0..width {
            if rng.random_bool(density) {
                bm.set_unchecked(x, y, 1);
            }
        }
    }
    bm
}

fn random_cases(rng: &mut StdRng, n: usize) -> Vec<Bitmap> {
    (0..n)
        .map(|_| {
            let w = rng.random_range(1..=24);
            let h = rng.random_range(1..=24);
            let density = rng.random_range(0.1..0.9);
            random_bitmap(rng, w, h, density)
        })
        .collect()
}

/// Random raster whose foreground keeps a background margin of the
/// given width on every side.
fn random_bitmap_with_margin(rng: &mut StdRng, width: u32, height: u32, margin: u32) -> Bitmap {
    let mut bm = Bitmap::new(width, height).unwrap();
    for y in margin..height.saturating_sub(margin) {
        for x in margin..width.saturating_sub(margin) {
            if rng.random_bool(0.5) {
                bm.set_unchecked(x, y, 1);
            }
        }
    }
    bm
}

const SEL_SIZES: &[(u32, u32)] = &[(1, 1), (3, 3), (1, 5), (5, 1), (3, 5), (5, 5)];

#[test]
fn morphprops_shape_reg() {
    let mut rp = RegParams::new("morphprops_shape");
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for bm in random_cases(&mut rng, 20) {
        for &(sw, sh) in SEL_SIZES {
            let sel = Sel::brick(sw, sh).unwrap();
            for result in [
                dilate(&bm, &sel).unwrap(),
                erode(&bm, &sel).unwrap(),
                open(&bm, &sel).unwrap(),
                close(&bm, &sel).unwrap(),
            ] {
                rp.check(
                    result.dimensions() == bm.dimensions(),
                    "output shape equals input shape",
                );
            }
        }
    }

    assert!(rp.cleanup());
}

#[test]
fn morphprops_identity_reg() {
    let mut rp = RegParams::new("morphprops_identity");
    let mut rng = StdRng::seed_from_u64(0x1d);
    let identity = Sel::brick(1, 1).unwrap();

    for bm in random_cases(&mut rng, 20) {
        rp.compare_bitmaps(&bm, &dilate(&bm, &identity).unwrap());
        rp.compare_bitmaps(&bm, &erode(&bm, &identity).unwrap());
    }

    assert!(rp.cleanup());
}

#[test]
fn morphprops_bounds_reg() {
    let mut rp = RegParams::new("morphprops_bounds");
    let mut rng = StdRng::seed_from_u64(0xb0d5);

    for bm in random_cases(&mut rng, 20) {
        for &(sw, sh) in SEL_SIZES {
            let sel = Sel::brick(sw, sh).unwrap();
            // All-ones SELs include the origin, so dilation is
            // extensive and erosion anti-extensive
            rp.check(
                bm.is_subset_of(&dilate(&bm, &sel).unwrap()),
                "dilation never removes foreground",
            );
            rp.check(
                erode(&bm, &sel).unwrap().is_subset_of(&bm),
                "erosion never adds foreground",
            );
            rp.check(
                open(&bm, &sel).unwrap().is_subset_of(&bm),
                "opening never adds foreground",
            );
        }
    }

    // Closing is only extensive when the dilated foreground stays in
    // bounds: zero padding lets erosion eat border pixels back out of a
    // clipped dilation. Keep foreground a half-extent away from the
    // border and the unbounded-plane law applies.
    for _ in 0..20 {
        let w = rng.random_range(6..=24);
        let h = rng.random_range(6..=24);
        let bm = random_bitmap_with_margin(&mut rng, w, h, 2);
        for &(sw, sh) in SEL_SIZES {
            let sel = Sel::brick(sw, sh).unwrap();
            rp.check(
                bm.is_subset_of(&close(&bm, &sel).unwrap()),
                "closing never removes interior foreground",
            );
        }
    }

    assert!(rp.cleanup());
}

#[test]
fn morphprops_idempotence_reg() {
    let mut rp = RegParams::new("morphprops_idempotence");
    let mut rng = StdRng::seed_from_u64(0x1de8);
    let sel = Sel::brick(3, 3).unwrap();

    for bm in random_cases(&mut rng, 20) {
        let opened = open(&bm, &sel).unwrap();
        rp.compare_bitmaps(&opened, &open(&opened, &sel).unwrap());

        let closed = close(&bm, &sel).unwrap();
        rp.compare_bitmaps(&closed, &close(&closed, &sel).unwrap());
    }

    assert!(rp.cleanup());
}
