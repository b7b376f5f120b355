/// Minimum sample count (h*w*channels) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Fixed sharpening intensity: 1.0 is the unmodified image, 1.10 adds 10% edge emphasis.
pub const SHARPEN_FACTOR: f32 = 1.10;

/// Fixed contrast intensity: 1.0 is the unmodified image, 1.05 adds 5% contrast.
pub const CONTRAST_FACTOR: f32 = 1.05;

/// Midpoint of the 8-bit sample range; contrast adjustment pivots around this value.
pub const CONTRAST_MIDPOINT: f32 = 127.5;

/// 3x3 smoothing kernel (row-major, sums to 1) used as the blurred copy for sharpening.
pub const SMOOTH_KERNEL: [f32; 9] = [
    1.0 / 13.0,
    1.0 / 13.0,
    1.0 / 13.0,
    1.0 / 13.0,
    5.0 / 13.0,
    1.0 / 13.0,
    1.0 / 13.0,
    1.0 / 13.0,
    1.0 / 13.0,
];

/// Bytes per pixel assumed by the pre-encode size estimate (RGB, uncompressed).
pub const ESTIMATE_BYTES_PER_PIXEL: usize = 3;

/// Smallest accepted upscale factor.
pub const UPSCALE_FACTOR_MIN: f32 = 1.0;

/// Largest accepted upscale factor.
pub const UPSCALE_FACTOR_MAX: f32 = 4.0;

/// Upscale factor used when none is configured.
pub const DEFAULT_UPSCALE_FACTOR: f32 = 2.0;

/// Smallest accepted JPEG quality; lower configured values are clamped up.
pub const JPEG_QUALITY_MIN: u8 = 60;

/// Largest accepted JPEG quality.
pub const JPEG_QUALITY_MAX: u8 = 100;

/// JPEG quality used when none is configured.
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Base name for exported files; the extension comes from the output format.
pub const EXPORT_BASENAME: &str = "processed_image";
