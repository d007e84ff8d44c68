//! Source preprocessing: resample and contrast.
//!
//! This is stage 1 of the reduction pipeline:
//!
//! 1. **Resample** - area-average scaling to the square target size
//! 2. **Contrast** - per-channel scaling around mid-gray (128)
//!
//! Resampling happens first so contrast is computed on the pixels that
//! the later stages actually see.

mod contrast;
mod preprocessor;
mod resize;

pub use contrast::{adjust_channel, adjust_pixel};
pub use preprocessor::Preprocessor;
pub use resize::resample_area;
