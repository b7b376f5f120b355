use tracing::debug;

use crate::error::{Result, StackError};
use crate::raster::RasterImage;

/// One uploaded file: raw bytes plus a name used only for diagnostics.
#[derive(Clone, Debug)]
pub struct Upload {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

/// Decode one upload into a raster, failing on malformed or unsupported bytes.
///
/// The format is sniffed from the content; PNG, JPEG and TIFF are all accepted.
/// Sources with an alpha channel decode to RGBA, everything else to RGB.
pub fn decode(upload: &Upload) -> Result<RasterImage> {
    let img = image::load_from_memory(&upload.bytes).map_err(|source| StackError::Decode {
        name: upload.name.clone(),
        source,
    })?;
    debug!(
        name = %upload.name,
        width = img.width(),
        height = img.height(),
        "decoded upload"
    );
    Ok(RasterImage::from_dynamic(img))
}

/// Decode an ordered upload list, failing on the first bad file.
pub fn decode_all(uploads: &[Upload]) -> Result<Vec<RasterImage>> {
    uploads.iter().map(decode).collect()
}
