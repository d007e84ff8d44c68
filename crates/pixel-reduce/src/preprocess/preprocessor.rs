//! Resample + contrast stage.
//!
//! The [`Preprocessor`] turns an arbitrary-size source bitmap into the
//! square intermediate bitmap that the mode branch and the quantizer work
//! on.
//!
//! # Processing Order
//!
//! 1. **Resample** to `target_size x target_size` (area average)
//! 2. **Contrast** per color channel around mid-gray
//!
//! Contrast is applied to the resampled pixels, so it always touches
//! exactly `target_size²` pixels regardless of the source resolution.

use crate::bitmap::Bitmap;

use super::contrast::adjust_pixel;
use super::resize::resample_area;

/// Resample and contrast-adjust a source bitmap.
///
/// # Example
///
/// ```
/// use pixel_reduce::{Bitmap, Preprocessor, Rgba};
///
/// let source = Bitmap::filled(100, 80, Rgba::opaque(128, 128, 128));
/// let result = Preprocessor::new(16, 150).process(&source);
///
/// assert_eq!(result.width(), 16);
/// assert_eq!(result.height(), 16);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Preprocessor {
    target_size: usize,
    contrast_percent: u32,
}

impl Preprocessor {
    /// Create a preprocessor for the given target side length and contrast.
    #[inline]
    pub fn new(target_size: usize, contrast_percent: u32) -> Self {
        Self {
            target_size: target_size.max(1),
            contrast_percent,
        }
    }

    /// Run resample then contrast.
    ///
    /// Contrast applies to the averaged target pixels, the same result a
    /// canvas contrast filter gives when it is set while drawing the
    /// downscaled image.
    pub fn process(&self, source: &Bitmap) -> Bitmap {
        let mut pixels = resample_area(source, self.target_size);
        if self.contrast_percent != 100 {
            for px in pixels.iter_mut() {
                *px = adjust_pixel(*px, self.contrast_percent);
            }
        }
        Bitmap::from_parts(self.target_size, self.target_size, pixels)
    }
}
