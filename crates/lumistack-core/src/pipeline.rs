use tracing::info;

use crate::align::{AlignStrategy, IdentityAlign};
use crate::enhance::enhance;
use crate::error::{Result, StackError};
use crate::io::decode::{decode_all, Upload};
use crate::raster::RasterImage;
use crate::settings::StackSettings;
use crate::stack::median_stack;
use crate::upscale::upscale;

/// Pipeline stage labels, used for logging and progress display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    Decoding,
    Alignment,
    Stacking,
    Upscaling,
    Enhancement,
    Encoding,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decoding => write!(f, "Decoding uploads"),
            Self::Alignment => write!(f, "Aligning images"),
            Self::Stacking => write!(f, "Median stacking"),
            Self::Upscaling => write!(f, "Upscaling"),
            Self::Enhancement => write!(f, "Enhancing"),
            Self::Encoding => write!(f, "Encoding output"),
        }
    }
}

/// Run the full pipeline with the default identity aligner.
pub fn process(uploads: &[Upload], settings: &StackSettings) -> Result<RasterImage> {
    process_with_aligner(uploads, settings, &IdentityAlign)
}

/// Run the full pipeline with a caller-chosen alignment strategy.
///
/// Two or more uploads are aligned and median-stacked before upscaling and
/// enhancement; a single upload skips straight to upscaling. Zero uploads is
/// an error. Every stage either fully succeeds or aborts the run.
pub fn process_with_aligner(
    uploads: &[Upload],
    settings: &StackSettings,
    aligner: &dyn AlignStrategy,
) -> Result<RasterImage> {
    settings.validate()?;
    if uploads.is_empty() {
        return Err(StackError::InsufficientInput {
            required: 1,
            got: 0,
        });
    }

    info!(stage = %PipelineStage::Decoding, count = uploads.len());
    let mut images = decode_all(uploads)?;

    let combined = if images.len() == 1 {
        images.remove(0)
    } else {
        info!(stage = %PipelineStage::Alignment, strategy = aligner.name());
        let aligned = aligner.align(images)?;
        info!(stage = %PipelineStage::Stacking, count = aligned.len());
        median_stack(&aligned)?
    };

    info!(stage = %PipelineStage::Upscaling, factor = settings.upscale_factor);
    let upscaled = upscale(combined, settings.upscale_factor)?;

    info!(stage = %PipelineStage::Enhancement);
    enhance(&upscaled)
}
