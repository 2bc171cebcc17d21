//! Convenience helpers for loading rasters via the `image` crate.
//!
//! Available when the `image-io` feature is enabled.

use crate::raster::OwnedRaster;
use crate::util::{PixMatchError, PixMatchResult};
use std::path::Path;

/// Creates an owned raster from an RGBA image buffer.
pub fn owned_from_rgba_image(img: &image::RgbaImage) -> PixMatchResult<OwnedRaster> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    let mut data = Vec::with_capacity(width * height);
    for pixel in img.pixels() {
        let [r, g, b, a] = pixel.0;
        data.push(
            (u32::from(a) << 24) | (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b),
        );
    }
    OwnedRaster::new(data, width, height)
}

/// Creates an owned raster from a dynamic image.
pub fn owned_from_dynamic_image(img: &image::DynamicImage) -> PixMatchResult<OwnedRaster> {
    let rgba = img.to_rgba8();
    owned_from_rgba_image(&rgba)
}

/// Loads an image from disk and converts it to a packed raster.
pub fn load_raster<P: AsRef<Path>>(path: P) -> PixMatchResult<OwnedRaster> {
    let img = image::open(path).map_err(|err| PixMatchError::ImageIo {
        reason: err.to_string(),
    })?;
    owned_from_dynamic_image(&img)
}
