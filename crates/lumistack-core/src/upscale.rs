use image::imageops::FilterType;
use tracing::debug;

use crate::consts::UPSCALE_FACTOR_MIN;
use crate::error::{Result, StackError};
use crate::raster::RasterImage;

/// Resize by `factor` using Lanczos3 resampling.
///
/// Output dimensions are round(width * factor) x round(height * factor).
/// A factor of exactly 1.0 returns the input unchanged rather than an
/// equivalent copy; factors below 1.0 are rejected.
pub fn upscale(image: RasterImage, factor: f32) -> Result<RasterImage> {
    if !factor.is_finite() || factor < UPSCALE_FACTOR_MIN {
        return Err(StackError::InvalidFactor(factor));
    }
    if factor == 1.0 {
        return Ok(image);
    }

    let new_w = (image.width() as f32 * factor).round() as u32;
    let new_h = (image.height() as f32 * factor).round() as u32;
    debug!(
        width = image.width(),
        height = image.height(),
        new_w,
        new_h,
        "upscaling"
    );

    let resized = image
        .to_dynamic()
        .resize_exact(new_w, new_h, FilterType::Lanczos3);
    Ok(RasterImage::from_dynamic(resized))
}
