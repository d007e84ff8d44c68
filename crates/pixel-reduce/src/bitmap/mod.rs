//! Owned RGBA bitmap
//!
//! [`Bitmap`] is the pipeline's input and its intermediate working buffer.
//! Construction validates that the pixel buffer matches the declared
//! dimensions, so every later stage can index without bounds surprises.

use crate::api::ReduceError;
use crate::color::Rgba;

/// A row-major RGBA image of arbitrary (non-zero) dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
}

impl Bitmap {
    /// Wrap a pixel buffer.
    ///
    /// # Errors
    ///
    /// [`ReduceError::InvalidBitmap`] if either dimension is zero or
    /// `pixels.len() != width * height`.
    pub fn new(width: usize, height: usize, pixels: Vec<Rgba>) -> Result<Self, ReduceError> {
        if width == 0 || height == 0 || width.checked_mul(height) != Some(pixels.len()) {
            return Err(ReduceError::InvalidBitmap {
                width,
                height,
                len: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a bitmap from interleaved `[R, G, B, A, ...]` bytes.
    ///
    /// # Example
    /// ```
    /// use pixel_reduce::Bitmap;
    /// let bitmap = Bitmap::from_rgba8(1, 2, &[255, 0, 0, 255, 0, 0, 255, 255]).unwrap();
    /// assert_eq!(bitmap.height(), 2);
    /// ```
    pub fn from_rgba8(width: usize, height: usize, bytes: &[u8]) -> Result<Self, ReduceError> {
        if bytes.len() % 4 != 0 {
            return Err(ReduceError::InvalidBitmap {
                width,
                height,
                len: bytes.len() / 4,
            });
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|px| Rgba::new(px[0], px[1], px[2], px[3]))
            .collect();
        Self::new(width, height, pixels)
    }

    /// Wrap a buffer produced inside the pipeline, where the dimensions
    /// are known to match.
    pub(crate) fn from_parts(width: usize, height: usize, pixels: Vec<Rgba>) -> Self {
        debug_assert_eq!(width * height, pixels.len());
        Self {
            width,
            height,
            pixels,
        }
    }

    /// A bitmap with every pixel set to `color`.
    ///
    /// Zero dimensions are bumped to 1 so the result is always valid.
    pub fn filled(width: usize, height: usize, color: Rgba) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            pixels: vec![color; width * height],
        }
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major pixel slice.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Mutable row-major pixel slice.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Rgba] {
        &mut self.pixels
    }

    /// Consume the bitmap, returning its pixel buffer.
    pub fn into_pixels(self) -> Vec<Rgba> {
        self.pixels
    }

    /// Pixel at column `x`, row `y`, or `None` outside the image.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Rgba> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Number of pixels that count as opaque.
    pub fn opaque_count(&self) -> usize {
        self.pixels.iter().filter(|px| px.is_opaque()).count()
    }
}
