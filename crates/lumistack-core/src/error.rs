use thiserror::Error;

#[derive(Error, Debug)]
pub enum StackError {
    #[error("failed to decode '{name}': {source}")]
    Decode {
        name: String,
        #[source]
        source: image::ImageError,
    },

    #[error(
        "image shapes do not match: expected {expected_width}x{expected_height} \
         ({expected_channels} channels), got {width}x{height} ({channels} channels)"
    )]
    ShapeMismatch {
        expected_width: u32,
        expected_height: u32,
        expected_channels: usize,
        width: u32,
        height: u32,
        channels: usize,
    },

    #[error("not enough input images: need at least {required}, got {got}")]
    InsufficientInput { required: usize, got: usize },

    #[error("invalid upscale factor {0} (supported range 1.0..=4.0)")]
    InvalidFactor(f32),

    #[error("failed to encode {format} output: {source}")]
    Encode {
        format: &'static str,
        #[source]
        source: image::ImageError,
    },

    #[error("out of memory: failed to allocate {bytes} bytes of pixel data")]
    OutOfMemory { bytes: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StackError>;
