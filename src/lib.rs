//! PixMatch compares two raster images pixel by pixel for test assertions.
//!
//! The crate provides a strict exact-match predicate and a tolerant similarity
//! score over an abstract [`Raster`] pixel source, with optional row-parallel
//! variants via the `rayon` feature and optional diagnostics via the `tracing`
//! feature.

pub mod compare;
pub mod raster;
mod trace;
pub mod util;

pub use compare::{exact_match, score, ChannelMode, DiffMode};
pub use raster::{OwnedRaster, Raster, RasterView, Rgb, RGB_MASK};
pub use util::{PixMatchError, PixMatchResult};

#[cfg(feature = "rayon")]
pub use compare::rayon::{exact_match_par, score_par};

#[cfg(feature = "image-io")]
pub use raster::io;
