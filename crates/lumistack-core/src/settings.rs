use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_JPEG_QUALITY, DEFAULT_UPSCALE_FACTOR, JPEG_QUALITY_MAX, JPEG_QUALITY_MIN,
    UPSCALE_FACTOR_MAX, UPSCALE_FACTOR_MIN,
};
use crate::error::{Result, StackError};

/// Output encoding for the processed image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Lossless raster.
    #[default]
    Png,
    /// Lossy raster with a quality parameter.
    Jpeg,
    /// Professional tagged raster.
    Tiff,
}

impl OutputFormat {
    /// Lowercase file extension for the suggested download filename.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Tiff => "tiff",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Png => "PNG",
            Self::Jpeg => "JPEG",
            Self::Tiff => "TIFF",
        }
    }

    pub fn is_lossy(&self) -> bool {
        matches!(self, Self::Jpeg)
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// User-chosen processing parameters, fixed for the duration of one run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StackSettings {
    /// Output size multiplier, 1.0..=4.0.
    #[serde(default = "default_upscale_factor")]
    pub upscale_factor: f32,
    /// Target encoding.
    #[serde(default)]
    pub output_format: OutputFormat,
    /// JPEG quality, 60..=100. Ignored for the lossless formats.
    #[serde(default)]
    pub jpeg_quality: Option<u8>,
}

fn default_upscale_factor() -> f32 {
    DEFAULT_UPSCALE_FACTOR
}

impl Default for StackSettings {
    fn default() -> Self {
        Self {
            upscale_factor: DEFAULT_UPSCALE_FACTOR,
            output_format: OutputFormat::default(),
            jpeg_quality: None,
        }
    }
}

impl StackSettings {
    /// Reject settings outside the recognized option ranges.
    pub fn validate(&self) -> Result<()> {
        if !self.upscale_factor.is_finite()
            || self.upscale_factor < UPSCALE_FACTOR_MIN
            || self.upscale_factor > UPSCALE_FACTOR_MAX
        {
            return Err(StackError::InvalidFactor(self.upscale_factor));
        }
        Ok(())
    }

    /// Effective JPEG quality: the configured value clamped into range, or the default.
    pub fn effective_quality(&self) -> u8 {
        self.jpeg_quality
            .unwrap_or(DEFAULT_JPEG_QUALITY)
            .clamp(JPEG_QUALITY_MIN, JPEG_QUALITY_MAX)
    }
}
