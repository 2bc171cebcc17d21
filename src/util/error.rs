//! Error types for pixmatch.

use thiserror::Error;

/// Result alias for pixmatch operations.
pub type PixMatchResult<T> = std::result::Result<T, PixMatchError>;

/// Errors that can occur when constructing rasters.
///
/// The comparison functions themselves are infallible; dimension mismatch is a
/// defined result, not an error. Everything here fails fast at the input
/// boundary so a bad buffer is never misread as a "no match."
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PixMatchError {
    /// The backing buffer is shorter than the dimensions require.
    #[error("buffer too small: needed {needed} elements, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// The row stride is smaller than the width.
    #[error("invalid stride {stride} for width {width}")]
    InvalidStride { width: usize, stride: usize },
    /// The dimensions overflow the addressable buffer size.
    #[error("dimensions {width}x{height} overflow")]
    DimensionOverflow { width: usize, height: usize },
    /// Loading or decoding an image failed.
    #[cfg(feature = "image-io")]
    #[error("image i/o failed: {reason}")]
    ImageIo { reason: String },
}
