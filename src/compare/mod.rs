//! Pixel-for-pixel comparison of raster images.
//!
//! `exact_match` is a strict equality predicate; `score` is a tolerant
//! similarity ratio configured by [`ChannelMode`] and [`DiffMode`]. Both are
//! pure functions over borrowed [`Raster`](crate::Raster) views.

mod exact;
mod score;

#[cfg(feature = "rayon")]
pub mod rayon;

pub use exact::exact_match;
pub use score::{score, ChannelMode, DiffMode};
