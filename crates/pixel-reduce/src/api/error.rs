//! Unified error type for the pixel-reduce public API.
//!
//! [`ReduceError`] covers everything that can go wrong between receiving
//! an untrusted bitmap plus caller-supplied parameters and producing a
//! [`ReducedImage`](crate::ReducedImage). All variants are recoverable.

use crate::palette::PaletteError;
use std::fmt;

/// A reduction parameter outside its documented bounds.
///
/// Each variant carries the rejected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterError {
    /// Target grid side length outside `16..=64`
    TargetSize(u32),
    /// Palette size outside `4..=32`
    PaletteSize(u32),
    /// Contrast percentage outside `50..=200`
    Contrast(u32),
    /// Dither strength percentage outside `0..=100`
    DitherStrength(u32),
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use crate::api::params::{
            CONTRAST_RANGE, DITHER_STRENGTH_RANGE, PALETTE_SIZE_RANGE, TARGET_SIZE_RANGE,
        };
        match self {
            ParameterError::TargetSize(v) => write!(
                f,
                "target size {} outside {}..={}",
                v,
                TARGET_SIZE_RANGE.start(),
                TARGET_SIZE_RANGE.end()
            ),
            ParameterError::PaletteSize(v) => write!(
                f,
                "palette size {} outside {}..={}",
                v,
                PALETTE_SIZE_RANGE.start(),
                PALETTE_SIZE_RANGE.end()
            ),
            ParameterError::Contrast(v) => write!(
                f,
                "contrast {}% outside {}..={}",
                v,
                CONTRAST_RANGE.start(),
                CONTRAST_RANGE.end()
            ),
            ParameterError::DitherStrength(v) => write!(
                f,
                "dither strength {}% outside {}..={}",
                v,
                DITHER_STRENGTH_RANGE.start(),
                DITHER_STRENGTH_RANGE.end()
            ),
        }
    }
}

impl std::error::Error for ParameterError {}

/// Unified error type for the pixel-reduce public API.
///
/// # Example
///
/// ```
/// use pixel_reduce::{reduce, Bitmap, ReduceError, ReductionParameters, Rgba};
///
/// let empty = Bitmap::filled(4, 4, Rgba::TRANSPARENT);
/// let result = reduce(&empty, &ReductionParameters::default());
/// assert!(matches!(result, Err(ReduceError::EmptySource)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReduceError {
    /// A parameter was out of bounds; nothing was processed
    InvalidParameters(ParameterError),
    /// The (resampled) bitmap has no opaque pixels to build a palette from
    EmptySource,
    /// Pixel buffer length does not match the declared dimensions,
    /// or a dimension is zero
    InvalidBitmap {
        /// Declared width
        width: usize,
        /// Declared height
        height: usize,
        /// Number of pixels actually supplied
        len: usize,
    },
}

impl fmt::Display for ReduceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReduceError::InvalidParameters(err) => write!(f, "invalid parameters: {}", err),
            ReduceError::EmptySource => write!(f, "source image has no opaque pixels"),
            ReduceError::InvalidBitmap { width, height, len } => write!(
                f,
                "invalid bitmap: {}x{} declared, {} pixels supplied",
                width, height, len
            ),
        }
    }
}

impl std::error::Error for ReduceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReduceError::InvalidParameters(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParameterError> for ReduceError {
    fn from(err: ParameterError) -> Self {
        ReduceError::InvalidParameters(err)
    }
}

impl From<PaletteError> for ReduceError {
    fn from(err: PaletteError) -> Self {
        match err {
            PaletteError::NoOpaquePixels => ReduceError::EmptySource,
        }
    }
}
