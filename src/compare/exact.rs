//! Strict pixel-for-pixel equality.

use crate::raster::{Raster, RGB_MASK};

/// Returns `true` when both rasters have the same dimensions and identical
/// red, green and blue values at every coordinate.
///
/// The alpha byte is ignored. Rasters of differing dimensions never match,
/// regardless of content; two zero-pixel rasters of equal dimensions match
/// vacuously. The scan short-circuits on the first differing pixel.
pub fn exact_match<E: Raster, A: Raster>(expected: &E, actual: &A) -> bool {
    let width = expected.width();
    let height = expected.height();
    if width != actual.width() || height != actual.height() {
        return false;
    }
    for y in 0..height {
        for x in 0..width {
            if expected.packed(x, y) & RGB_MASK != actual.packed(x, y) & RGB_MASK {
                return false;
            }
        }
    }
    true
}
