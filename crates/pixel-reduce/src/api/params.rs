//! Reduction parameters and their bounds.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use super::error::ParameterError;

/// Allowed target grid side lengths.
pub const TARGET_SIZE_RANGE: RangeInclusive<u32> = 16..=64;
/// Allowed palette sizes.
pub const PALETTE_SIZE_RANGE: RangeInclusive<u32> = 4..=32;
/// Allowed contrast percentages.
pub const CONTRAST_RANGE: RangeInclusive<u32> = 50..=200;
/// Allowed dither strength percentages.
pub const DITHER_STRENGTH_RANGE: RangeInclusive<u32> = 0..=100;

/// What happens between preprocessing and quantization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum ConversionMode {
    /// Quantize the resampled image directly.
    #[default]
    Standard,
    /// Floyd-Steinberg 1-bit-per-channel error diffusion first.
    Dithered,
    /// Sobel gradient magnitude first.
    EdgeDetect,
}

impl ConversionMode {
    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            ConversionMode::Standard => "standard",
            ConversionMode::Dithered => "dithered",
            ConversionMode::EdgeDetect => "edge",
        }
    }
}

impl fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a mode name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownModeError(pub String);

impl fmt::Display for UnknownModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown conversion mode {:?} (expected standard, dithered or edge)",
            self.0
        )
    }
}

impl std::error::Error for UnknownModeError {}

impl FromStr for ConversionMode {
    type Err = UnknownModeError;

    /// Parse a mode name (case-insensitive).
    ///
    /// Accepts `standard`, `dithered` / `dither`, and `edge` / `edge-detect`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(ConversionMode::Standard),
            "dithered" | "dither" => Ok(ConversionMode::Dithered),
            "edge" | "edge-detect" | "edgedetect" => Ok(ConversionMode::EdgeDetect),
            _ => Err(UnknownModeError(s.to_string())),
        }
    }
}

/// Inputs to the reduction pipeline other than the bitmap itself.
///
/// # Defaults
///
/// - Target size: 32
/// - Palette size: 16
/// - Contrast: 100% (unchanged)
/// - Dither strength: 50%
/// - Mode: [`ConversionMode::Standard`]
///
/// # Example
///
/// ```
/// use pixel_reduce::{ConversionMode, ReductionParameters};
///
/// let params = ReductionParameters::new()
///     .target_size(48)
///     .palette_size(8)
///     .mode(ConversionMode::Dithered);
/// assert!(params.validate().is_ok());
///
/// let bad = ReductionParameters::new().contrast(300);
/// assert!(bad.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReductionParameters {
    /// Output grid side length (16..=64).
    pub target_size: u32,
    /// Maximum number of palette colors (4..=32).
    pub palette_size: u32,
    /// Contrast percentage (50..=200, 100 = unchanged).
    pub contrast_percent: u32,
    /// Error diffusion damping percentage (0..=100), used by Dithered mode.
    pub dither_strength: u32,
    /// Mode branch.
    pub mode: ConversionMode,
}

impl Default for ReductionParameters {
    fn default() -> Self {
        Self {
            target_size: 32,
            palette_size: 16,
            contrast_percent: 100,
            dither_strength: 50,
            mode: ConversionMode::Standard,
        }
    }
}

impl ReductionParameters {
    /// Default parameters.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target grid side length.
    #[inline]
    pub fn target_size(mut self, size: u32) -> Self {
        self.target_size = size;
        self
    }

    /// Set the palette size.
    #[inline]
    pub fn palette_size(mut self, colors: u32) -> Self {
        self.palette_size = colors;
        self
    }

    /// Set the contrast percentage.
    #[inline]
    pub fn contrast(mut self, percent: u32) -> Self {
        self.contrast_percent = percent;
        self
    }

    /// Set the dither strength percentage.
    #[inline]
    pub fn dither_strength(mut self, percent: u32) -> Self {
        self.dither_strength = percent;
        self
    }

    /// Set the conversion mode.
    #[inline]
    pub fn mode(mut self, mode: ConversionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Check every bound, reporting the first violation.
    ///
    /// Dither strength is validated in every mode, not only Dithered.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if !TARGET_SIZE_RANGE.contains(&self.target_size) {
            return Err(ParameterError::TargetSize(self.target_size));
        }
        if !PALETTE_SIZE_RANGE.contains(&self.palette_size) {
            return Err(ParameterError::PaletteSize(self.palette_size));
        }
        if !CONTRAST_RANGE.contains(&self.contrast_percent) {
            return Err(ParameterError::Contrast(self.contrast_percent));
        }
        if !DITHER_STRENGTH_RANGE.contains(&self.dither_strength) {
            return Err(ParameterError::DitherStrength(self.dither_strength));
        }
        Ok(())
    }
}
