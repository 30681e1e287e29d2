//! Pixel access behind a narrow interface: width, height, brightness.
//!
//! The extraction algorithm only ever needs a luminance value per coordinate,
//! so it is written against this trait rather than any particular decoder.

use std::path::Path;

use anyhow::{Context, Result};
use image::RgbImage;

/// A decoded image viewed as a brightness field.
pub trait Raster {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Luminance in [0.0, 1.0] at (x, y). sRGB weights: 0.2126 R,
    /// 0.7152 G, 0.0722 B, divided by 255.
    fn brightness(&self, x: u32, y: u32) -> f32;
}

impl Raster for RgbImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn brightness(&self, x: u32, y: u32) -> f32 {
        let [r, g, b] = self.get_pixel(x, y).0;
        (r as f32 * 0.2126 + g as f32 * 0.7152 + b as f32 * 0.0722) / 255.0
    }
}

/// Decode an image file into an RGB raster.
///
/// Any format the `image` crate understands works; alpha is dropped.
pub fn load_raster(path: &Path) -> Result<RgbImage> {
    let img = image::open(path)
        .with_context(|| format!("Failed to decode image: {}", path.display()))?;
    Ok(img.to_rgb8())
}
