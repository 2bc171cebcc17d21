//! Rayon-parallel comparison variants (feature-gated).
//!
//! Row-parallel scans that return exactly the scalar results: per-pixel
//! contributions are integral and commutative, so partial row sums combine
//! with ordinary addition and no rounding tolerance is needed.

use crate::compare::score::{normalize, pixel_difference};
use crate::compare::{ChannelMode, DiffMode};
use crate::raster::{Raster, RGB_MASK};
use crate::trace::trace_span;
use rayon::prelude::*;

/// Row-parallel variant of [`exact_match`](crate::exact_match).
pub fn exact_match_par<E, A>(expected: &E, actual: &A) -> bool
where
    E: Raster + Sync,
    A: Raster + Sync,
{
    let width = expected.width();
    let height = expected.height();
    if width != actual.width() || height != actual.height() {
        return false;
    }
    (0..height).into_par_iter().all(|y| {
        (0..width).all(|x| expected.packed(x, y) & RGB_MASK == actual.packed(x, y) & RGB_MASK)
    })
}

/// Row-parallel variant of [`score`](crate::score).
pub fn score_par<E, A>(
    expected: &E,
    actual: &A,
    channel_mode: ChannelMode,
    diff_mode: DiffMode,
) -> f64
where
    E: Raster + Sync,
    A: Raster + Sync,
{
    let width = expected.width();
    let height = expected.height();
    if width != actual.width() || height != actual.height() {
        return 0.0;
    }
    let pixels = (width as u64) * (height as u64);
    if pixels == 0 {
        return 1.0;
    }

    let _span = trace_span!("score_par", width = width, height = height).entered();

    let accumulated: u64 = (0..height)
        .into_par_iter()
        .map(|y| {
            let mut row_sum = 0u64;
            for x in 0..width {
                row_sum += pixel_difference(
                    expected.packed(x, y),
                    actual.packed(x, y),
                    channel_mode,
                    diff_mode,
                );
            }
            row_sum
        })
        .sum();

    normalize(accumulated, pixels, channel_mode, diff_mode)
}
