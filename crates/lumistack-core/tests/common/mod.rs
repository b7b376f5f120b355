use ndarray::Array3;

use lumistack_core::io::decode::Upload;
use lumistack_core::io::encode::export;
use lumistack_core::raster::RasterImage;
use lumistack_core::settings::{OutputFormat, StackSettings};

/// Build a solid-color RGB raster.
pub fn solid_raster(width: usize, height: usize, value: u8) -> RasterImage {
    RasterImage::new(Array3::from_elem((height, width, 3), value))
}

/// Build a solid-color RGBA raster with a fixed alpha value.
pub fn solid_rgba_raster(width: usize, height: usize, value: u8, alpha: u8) -> RasterImage {
    let mut data = Array3::<u8>::zeros((height, width, 4));
    for row in 0..height {
        for col in 0..width {
            for ch in 0..3 {
                data[[row, col, ch]] = value;
            }
            data[[row, col, 3]] = alpha;
        }
    }
    RasterImage::new(data)
}

/// Build an RGB raster with a deterministic gradient-plus-texture pattern,
/// so lossy encoders have real detail to work with.
pub fn textured_raster(width: usize, height: usize) -> RasterImage {
    let mut data = Array3::<u8>::zeros((height, width, 3));
    for row in 0..height {
        for col in 0..width {
            data[[row, col, 0]] = ((row * 7 + col * 13) % 256) as u8;
            data[[row, col, 1]] = (((row * 3) ^ (col * 5)) % 256) as u8;
            data[[row, col, 2]] = ((row * row + col) % 256) as u8;
        }
    }
    RasterImage::new(data)
}

/// Encode a raster as PNG bytes and wrap it as an upload.
pub fn png_upload(name: &str, raster: &RasterImage) -> Upload {
    let settings = StackSettings {
        output_format: OutputFormat::Png,
        ..Default::default()
    };
    let result = export(raster, &settings).expect("encode PNG fixture");
    Upload::new(name, result.bytes)
}

/// Settings with the given factor and format, no explicit quality.
pub fn settings(factor: f32, format: OutputFormat) -> StackSettings {
    StackSettings {
        upscale_factor: factor,
        output_format: format,
        jpeg_quality: None,
    }
}
