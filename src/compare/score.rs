//! Similarity scoring under configurable difference policies.
//!
//! The score accumulates an integral per-pixel difference, normalizes it by
//! the largest difference the selected modes allow, and returns
//! `1.0 - normalized`. Accumulation is exact `u64` arithmetic; only the final
//! normalization is floating point.

use crate::raster::{Raster, Rgb, RGB_MASK};
use crate::trace::{trace_event, trace_span};

/// Selects how colors are decomposed when measuring a pixel difference.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ChannelMode {
    /// Red, green and blue are measured independently. A pixel differing in
    /// one channel scores better than one differing in all three.
    PerChannel,
    /// The packed 24-bit value is measured as one atomic unit.
    Packed,
}

/// Selects how a measured difference contributes to the total.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DiffMode {
    /// Accumulate the magnitude of the deviation, tolerating anti-aliasing
    /// and minor rendering noise.
    Distance,
    /// Count any deviation as a full mismatch, ignoring magnitude.
    CountMismatch,
}

/// Computes the similarity of two rasters as a ratio in `[0.0, 1.0]`.
///
/// `1.0` is a perfect match, `0.0` the maximal measured difference under the
/// chosen modes. The alpha byte is ignored in every mode. Rasters of differing
/// dimensions score `0.0` regardless of content; two zero-pixel rasters of
/// equal dimensions score `1.0`, sidestepping the undefined `0 / 0` ratio.
pub fn score<E: Raster, A: Raster>(
    expected: &E,
    actual: &A,
    channel_mode: ChannelMode,
    diff_mode: DiffMode,
) -> f64 {
    let width = expected.width();
    let height = expected.height();
    if width != actual.width() || height != actual.height() {
        return 0.0;
    }
    let pixels = (width as u64) * (height as u64);
    if pixels == 0 {
        return 1.0;
    }

    let _span = trace_span!("score", width = width, height = height).entered();

    let mut accumulated = 0u64;
    for y in 0..height {
        for x in 0..width {
            accumulated += pixel_difference(
                expected.packed(x, y),
                actual.packed(x, y),
                channel_mode,
                diff_mode,
            );
        }
    }

    normalize(accumulated, pixels, channel_mode, diff_mode)
}

/// Difference contribution of one pixel pair under the given modes.
pub(crate) fn pixel_difference(
    expected: u32,
    actual: u32,
    channel_mode: ChannelMode,
    diff_mode: DiffMode,
) -> u64 {
    let expected = expected & RGB_MASK;
    let actual = actual & RGB_MASK;
    match channel_mode {
        ChannelMode::PerChannel => {
            let e = Rgb::from_packed(expected);
            let a = Rgb::from_packed(actual);
            match diff_mode {
                DiffMode::Distance => {
                    channel_distance(e.r, a.r)
                        + channel_distance(e.g, a.g)
                        + channel_distance(e.b, a.b)
                }
                DiffMode::CountMismatch => {
                    u64::from(e.r != a.r) + u64::from(e.g != a.g) + u64::from(e.b != a.b)
                }
            }
        }
        ChannelMode::Packed => match diff_mode {
            // Arithmetic difference of the packed values, kept verbatim: a
            // deviation in the red byte outweighs one in the blue byte by the
            // packing layout, not by perception.
            DiffMode::Distance => u64::from(expected.abs_diff(actual)),
            DiffMode::CountMismatch => u64::from(expected != actual),
        },
    }
}

fn channel_distance(expected: u8, actual: u8) -> u64 {
    u64::from(expected.abs_diff(actual))
}

/// Largest contribution a single pixel can produce under the given modes.
pub(crate) fn max_pixel_difference(channel_mode: ChannelMode, diff_mode: DiffMode) -> u64 {
    match (channel_mode, diff_mode) {
        (ChannelMode::PerChannel, DiffMode::Distance) => 3 * 255,
        (ChannelMode::PerChannel, DiffMode::CountMismatch) => 3,
        (ChannelMode::Packed, DiffMode::Distance) => u64::from(RGB_MASK),
        (ChannelMode::Packed, DiffMode::CountMismatch) => 1,
    }
}

/// Turns an accumulated difference over `pixels` pixels into the final ratio.
pub(crate) fn normalize(
    accumulated: u64,
    pixels: u64,
    channel_mode: ChannelMode,
    diff_mode: DiffMode,
) -> f64 {
    let denominator = pixels as f64 * max_pixel_difference(channel_mode, diff_mode) as f64;
    let ratio = accumulated as f64 / denominator;
    trace_event!(
        "score_normalized",
        accumulated = accumulated,
        pixels = pixels,
        ratio = ratio
    );
    1.0 - ratio
}
