//! PixelReducer -- the primary entry point for the crate.
//!
//! [`PixelReducer`] validates a [`ReductionParameters`] once and can then
//! reduce any number of bitmaps with it.

use crate::bitmap::Bitmap;
use crate::dither::FloydSteinberg;
use crate::edge::sobel;
use crate::output::ReducedImage;
use crate::palette::{quantize, Palette};
use crate::preprocess::Preprocessor;

use super::error::ReduceError;
use super::params::{ConversionMode, ReductionParameters};

/// Validated, reusable reduction pipeline.
///
/// # Design
///
/// - Construction validates parameters, so a `PixelReducer` never runs
///   with out-of-bounds settings
/// - [`reduce()`](Self::reduce) takes `&self` so the reducer is
///   **reusable** across multiple images
/// - The pipeline is a pure function of (bitmap, parameters): the same
///   inputs always produce the same grid
///
/// # Example
///
/// ```
/// use pixel_reduce::{Bitmap, ConversionMode, PixelReducer, ReductionParameters, Rgba};
///
/// let params = ReductionParameters::new()
///     .target_size(16)
///     .palette_size(4)
///     .mode(ConversionMode::EdgeDetect);
/// let reducer = PixelReducer::new(params).unwrap();
///
/// let source = Bitmap::filled(40, 40, Rgba::opaque(10, 20, 30));
/// let image = reducer.reduce(&source).unwrap();
/// assert_eq!(image.size(), 16);
/// ```
#[derive(Debug, Clone)]
pub struct PixelReducer {
    params: ReductionParameters,
}

impl PixelReducer {
    /// Validate `params` and build a reducer.
    ///
    /// # Errors
    ///
    /// [`ReduceError::InvalidParameters`] naming the first violated bound.
    pub fn new(params: ReductionParameters) -> Result<Self, ReduceError> {
        params.validate()?;
        Ok(Self { params })
    }

    /// The validated parameters.
    #[inline]
    pub fn params(&self) -> &ReductionParameters {
        &self.params
    }

    /// Reduce a bitmap to a quantized square grid.
    ///
    /// Applies the full pipeline:
    /// 1. Resample to `target_size²` and adjust contrast
    /// 2. Mode branch (pass-through, dither, or edge detect)
    /// 3. Stride-sample a palette and map every opaque pixel onto it
    ///
    /// # Errors
    ///
    /// [`ReduceError::EmptySource`] when no opaque pixel survives to the
    /// quantization stage.
    pub fn reduce(&self, source: &Bitmap) -> Result<ReducedImage, ReduceError> {
        let size = self.params.target_size as usize;

        // 1. Resample + contrast
        let mut working = Preprocessor::new(size, self.params.contrast_percent).process(source);

        // 2. Mode branch
        match self.params.mode {
            ConversionMode::Standard => {}
            ConversionMode::Dithered => {
                FloydSteinberg::new(self.params.dither_strength).apply(
                    working.pixels_mut(),
                    size,
                    size,
                );
            }
            ConversionMode::EdgeDetect => {
                let edges = sobel(working.pixels(), size, size);
                working.pixels_mut().copy_from_slice(&edges);
            }
        }

        // 3. Quantize
        let palette = Palette::stride_sample(working.pixels(), self.params.palette_size as usize)?;
        let cells = quantize(working.pixels(), &palette);

        Ok(ReducedImage::new(size, cells))
    }
}

/// Reduce `source` with `params` in one call.
///
/// Equivalent to `PixelReducer::new(params.clone())?.reduce(source)`.
/// Parameters are checked before any pixel is touched.
pub fn reduce(source: &Bitmap, params: &ReductionParameters) -> Result<ReducedImage, ReduceError> {
    PixelReducer::new(params.clone())?.reduce(source)
}
