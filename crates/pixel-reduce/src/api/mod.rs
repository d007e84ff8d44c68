//! Public API for the pixel-reduce crate.
//!
//! This module provides the high-level API: [`ReductionParameters`], the
//! [`PixelReducer`] runner with the one-shot [`reduce`] function, and the
//! [`ReduceError`] unified error type.

mod builder;
mod error;
mod params;

pub use builder::{reduce, PixelReducer};
pub use error::{ParameterError, ReduceError};
pub use params::{
    ConversionMode, ReductionParameters, UnknownModeError, CONTRAST_RANGE, DITHER_STRENGTH_RANGE,
    PALETTE_SIZE_RANGE, TARGET_SIZE_RANGE,
};
