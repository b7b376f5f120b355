pub mod error;
pub mod consts;
pub mod raster;
pub mod settings;
pub mod io;
pub mod align;
pub mod stack;
pub mod upscale;
pub mod enhance;
pub mod pipeline;
