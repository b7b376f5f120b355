use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::ImageFormat;
use tracing::info;

use crate::consts::{ESTIMATE_BYTES_PER_PIXEL, EXPORT_BASENAME};
use crate::error::{Result, StackError};
use crate::raster::RasterImage;
use crate::settings::{OutputFormat, StackSettings};

/// Display metadata for a processed image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportInfo {
    pub dimensions: String,
    pub format: String,
    pub size_estimate: String,
}

/// Encoded output ready for download: bytes, suggested filename, display metadata.
#[derive(Clone, Debug)]
pub struct ExportResult {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub info: ExportInfo,
}

/// Compute display metadata without encoding.
///
/// The size estimate assumes 3 uncompressed bytes per pixel regardless of
/// format. It is a rough pre-encode heuristic, not the true encoded size.
pub fn describe(image: &RasterImage, settings: &StackSettings) -> ExportInfo {
    let pixels = image.width() as usize * image.height() as usize;
    let kb = pixels * ESTIMATE_BYTES_PER_PIXEL / 1024;
    ExportInfo {
        dimensions: image.dimensions_label(),
        format: settings.output_format.name().to_string(),
        size_estimate: format!("~{} KB", kb),
    }
}

/// Suggested download filename for the chosen format.
pub fn export_filename(format: OutputFormat) -> String {
    format!("{}.{}", EXPORT_BASENAME, format.extension())
}

/// Serialize a raster to the configured format.
///
/// JPEG honors the quality setting; the other formats ignore it. RGBA input is
/// flattened to RGB for JPEG since the codec carries no alpha channel.
pub fn export(image: &RasterImage, settings: &StackSettings) -> Result<ExportResult> {
    let format = settings.output_format;
    let dynamic = image.to_dynamic();
    let mut bytes = Vec::new();

    let encoded = match format {
        OutputFormat::Jpeg => {
            let rgb = dynamic.into_rgb8();
            JpegEncoder::new_with_quality(Cursor::new(&mut bytes), settings.effective_quality())
                .encode_image(&rgb)
        }
        OutputFormat::Png => dynamic.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png),
        OutputFormat::Tiff => dynamic.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Tiff),
    };
    encoded.map_err(|source| StackError::Encode {
        format: format.name(),
        source,
    })?;

    info!(format = format.name(), bytes = bytes.len(), "encoded output");

    Ok(ExportResult {
        bytes,
        filename: export_filename(format),
        info: describe(image, settings),
    })
}
