//! Floyd-Steinberg 1-bit-per-channel error diffusion.
//!
//! Every color channel is thresholded independently at 128 to either 0 or
//! 255, and the quantization error (scaled by the dither strength) is
//! pushed onto the not-yet-visited neighbors. The buffer is updated in
//! place and each write is rounded and clamped to 8 bits, so later pixels
//! see the already-diffused values of earlier ones.
//!
//! This stage is strictly sequential in raster order.

use crate::color::{clamp_channel, Rgba, MIDPOINT};

use super::kernel::{Kernel, FLOYD_STEINBERG};

/// Floyd-Steinberg error diffusion with a damping factor.
///
/// # Algorithm
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// Weights: 7/16 right, 3/16 bottom-left, 5/16 bottom, 1/16 bottom-right,
/// each multiplied by `strength / 100`. Neighbors outside the image are
/// skipped (their share of the error is dropped). Alpha is left alone.
///
/// # Example
///
/// ```
/// use pixel_reduce::{FloydSteinberg, Rgba};
///
/// let mut pixels = vec![Rgba::opaque(128, 128, 128); 4];
/// FloydSteinberg::new(100).apply(&mut pixels, 2, 2);
///
/// // Every channel ends up fully on or fully off
/// assert!(pixels.iter().all(|px| px.rgb().iter().all(|&c| c == 0 || c == 255)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FloydSteinberg {
    factor: f32,
}

impl FloydSteinberg {
    /// Create a ditherer with `strength` percent error propagation (0..=100).
    #[inline]
    pub fn new(strength: u32) -> Self {
        Self {
            factor: strength.min(100) as f32 / 100.0,
        }
    }

    /// Dither `pixels` (row-major, `width x height`) in place.
    pub fn apply(&self, pixels: &mut [Rgba], width: usize, height: usize) {
        diffuse_with_kernel(pixels, width, height, &FLOYD_STEINBERG, self.factor);
    }
}

/// Threshold one channel value to 0 or 255.
#[inline]
fn threshold(value: u8) -> u8 {
    if (value as f32) < MIDPOINT {
        0
    } else {
        255
    }
}

/// Generic in-place 1-bit error diffusion over the three color channels.
pub fn diffuse_with_kernel(
    pixels: &mut [Rgba],
    width: usize,
    height: usize,
    kernel: &Kernel,
    factor: f32,
) {
    debug_assert_eq!(pixels.len(), width * height);
    let divisor = kernel.divisor as f32;

    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;
            for ch in 0..3 {
                let old = pixels[idx].channel(ch);
                let new = threshold(old);
                *pixels[idx].channel_mut(ch) = new;
                let error = (old as f32 - new as f32) * factor;
                if error == 0.0 {
                    continue;
                }

                for &(dx, dy, weight) in kernel.entries {
                    let nx = x as i64 + dx as i64;
                    let ny = y as i64 + dy as i64;
                    if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
                        continue;
                    }
                    let nidx = ny as usize * width + nx as usize;
                    let target = pixels[nidx].channel_mut(ch);
                    *target = clamp_channel(*target as f32 + error * weight as f32 / divisor);
                }
            }
        }
    }
}
