use image::{DynamicImage, RgbImage, RgbaImage};
use ndarray::Array3;

use crate::error::{Result, StackError};

/// A decoded 8-bit raster image.
///
/// Samples are stored row-major with shape (height, width, channels);
/// channels is 3 (RGB) or 4 (RGBA). The buffer length always equals
/// width * height * channels, enforced by the array shape.
#[derive(Clone, Debug, PartialEq)]
pub struct RasterImage {
    /// Pixel samples, shape = (height, width, channels)
    pub data: Array3<u8>,
}

impl RasterImage {
    pub fn new(data: Array3<u8>) -> Self {
        Self { data }
    }

    pub fn width(&self) -> u32 {
        self.data.dim().1 as u32
    }

    pub fn height(&self) -> u32 {
        self.data.dim().0 as u32
    }

    pub fn channels(&self) -> usize {
        self.data.dim().2
    }

    /// Build from a packed row-major sample buffer.
    pub fn from_samples(width: u32, height: u32, channels: usize, samples: Vec<u8>) -> Self {
        let data = Array3::from_shape_vec((height as usize, width as usize, channels), samples)
            .expect("sample buffer length matches dimensions");
        Self { data }
    }

    /// Packed row-major copy of the samples.
    pub fn to_samples(&self) -> Vec<u8> {
        self.data.iter().copied().collect()
    }

    /// Human-readable dimensions, e.g. "800 x 600 px".
    pub fn dimensions_label(&self) -> String {
        format!("{} x {} px", self.width(), self.height())
    }

    /// Convert a decoded image, keeping alpha only when the source carries it.
    pub fn from_dynamic(img: DynamicImage) -> Self {
        let (w, h) = (img.width(), img.height());
        if img.color().has_alpha() {
            Self::from_samples(w, h, 4, img.into_rgba8().into_raw())
        } else {
            Self::from_samples(w, h, 3, img.into_rgb8().into_raw())
        }
    }

    /// Convert back for resampling or encoding through the `image` crate.
    pub fn to_dynamic(&self) -> DynamicImage {
        let samples = self.to_samples();
        match self.channels() {
            4 => {
                let buf = RgbaImage::from_raw(self.width(), self.height(), samples)
                    .expect("sample buffer length matches dimensions");
                DynamicImage::ImageRgba8(buf)
            }
            _ => {
                let buf = RgbImage::from_raw(self.width(), self.height(), samples)
                    .expect("sample buffer length matches dimensions");
                DynamicImage::ImageRgb8(buf)
            }
        }
    }
}

/// Allocate a zeroed sample buffer, surfacing allocation failure as `OutOfMemory`
/// instead of aborting the process.
pub(crate) fn alloc_samples(bytes: usize) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(bytes)
        .map_err(|_| StackError::OutOfMemory { bytes })?;
    buf.resize(bytes, 0);
    Ok(buf)
}
