use crate::error::Result;
use crate::raster::RasterImage;

/// Pluggable alignment strategy run before stacking.
///
/// Implementations take the decoded images (length >= 2) and return a
/// same-length sequence whose elements share identical dimensions.
pub trait AlignStrategy {
    fn name(&self) -> &'static str;

    fn align(&self, images: Vec<RasterImage>) -> Result<Vec<RasterImage>>;
}

/// Identity passthrough: assumes the caller already supplies same-sized images.
///
/// No resizing, cropping, or feature registration is performed. Mismatched
/// inputs surface later as a shape error from the stacker.
pub struct IdentityAlign;

impl AlignStrategy for IdentityAlign {
    fn name(&self) -> &'static str {
        "identity"
    }

    fn align(&self, images: Vec<RasterImage>) -> Result<Vec<RasterImage>> {
        Ok(images)
    }
}
