use ndarray::Array3;

use crate::consts::{CONTRAST_FACTOR, CONTRAST_MIDPOINT, SHARPEN_FACTOR, SMOOTH_KERNEL};
use crate::error::Result;
use crate::raster::{alloc_samples, RasterImage};

/// Apply the fixed enhancement pass: sharpening at 1.10, then contrast at 1.05.
///
/// Deterministic and non-configurable. Color channels only; an alpha channel
/// passes through untouched. Returns a new image, the input is not mutated.
pub fn enhance(image: &RasterImage) -> Result<RasterImage> {
    let sharpened = sharpen(image, SHARPEN_FACTOR)?;
    contrast(&sharpened, CONTRAST_FACTOR)
}

/// Unsharp-style sharpening: original plus (factor - 1) times the difference
/// between the original and a 3x3 smoothed copy.
fn sharpen(image: &RasterImage, factor: f32) -> Result<RasterImage> {
    let (h, w, c) = image.data.dim();
    let color_channels = color_channel_count(c);
    let amount = factor - 1.0;

    let mut samples = alloc_samples(h * w * c)?;
    for row in 0..h {
        for col in 0..w {
            for ch in 0..c {
                let orig = image.data[[row, col, ch]] as f32;
                samples[(row * w + col) * c + ch] = if ch < color_channels {
                    let smooth = smooth_at(&image.data, row, col, ch);
                    (orig + amount * (orig - smooth)).round().clamp(0.0, 255.0) as u8
                } else {
                    image.data[[row, col, ch]]
                };
            }
        }
    }
    Ok(RasterImage::from_samples(w as u32, h as u32, c, samples))
}

/// 3x3 smoothed sample with clamped borders.
fn smooth_at(data: &Array3<u8>, row: usize, col: usize, ch: usize) -> f32 {
    let (h, w, _) = data.dim();
    let mut sum = 0.0f32;
    for (ki, &kv) in SMOOTH_KERNEL.iter().enumerate() {
        let dr = (ki / 3) as isize - 1;
        let dc = (ki % 3) as isize - 1;
        let src_row = (row as isize + dr).clamp(0, h as isize - 1) as usize;
        let src_col = (col as isize + dc).clamp(0, w as isize - 1) as usize;
        sum += data[[src_row, src_col, ch]] as f32 * kv;
    }
    sum
}

/// Scale sample distance from the 8-bit midpoint by `factor`.
fn contrast(image: &RasterImage, factor: f32) -> Result<RasterImage> {
    let (h, w, c) = image.data.dim();
    let color_channels = color_channel_count(c);

    let mut samples = alloc_samples(h * w * c)?;
    for ((row, col, ch), &v) in image.data.indexed_iter() {
        samples[(row * w + col) * c + ch] = if ch < color_channels {
            ((v as f32 - CONTRAST_MIDPOINT) * factor + CONTRAST_MIDPOINT)
                .round()
                .clamp(0.0, 255.0) as u8
        } else {
            v
        };
    }
    Ok(RasterImage::from_samples(w as u32, h as u32, c, samples))
}

fn color_channel_count(channels: usize) -> usize {
    if channels == 4 {
        3
    } else {
        channels
    }
}
