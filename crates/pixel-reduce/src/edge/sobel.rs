//! Sobel gradient magnitude.

use crate::color::{clamp_channel, Rgba};

/// Horizontal Sobel kernel.
pub const SOBEL_X: [[i32; 3]; 3] = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];

/// Vertical Sobel kernel.
pub const SOBEL_Y: [[i32; 3]; 3] = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// Replace every interior pixel with its Sobel gradient magnitude.
///
/// Luminance is `(R + G + B) / 3` read from the unmodified input. The
/// magnitude `sqrt(gx² + gy²)`, capped at 255, becomes the gray value on
/// all three channels. The one-pixel border and all alpha values are
/// copied through unchanged. Images narrower or shorter than 3 pixels
/// have no interior and come back as-is.
///
/// # Example
///
/// ```
/// use pixel_reduce::{sobel, Rgba};
///
/// let flat = vec![Rgba::opaque(90, 90, 90); 9];
/// let edges = sobel(&flat, 3, 3);
///
/// // No gradient anywhere: the center goes black, the border is kept
/// assert_eq!(edges[4], Rgba::opaque(0, 0, 0));
/// assert_eq!(edges[0], Rgba::opaque(90, 90, 90));
/// ```
pub fn sobel(pixels: &[Rgba], width: usize, height: usize) -> Vec<Rgba> {
    debug_assert_eq!(pixels.len(), width * height);
    let mut output = pixels.to_vec();
    if width < 3 || height < 3 {
        return output;
    }

    let gray: Vec<f32> = pixels.iter().map(|px| px.luminance()).collect();

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let mut gx = 0.0f32;
            let mut gy = 0.0f32;
            for ky in 0..3 {
                for kx in 0..3 {
                    let g = gray[(y + ky - 1) * width + (x + kx - 1)];
                    gx += g * SOBEL_X[ky][kx] as f32;
                    gy += g * SOBEL_Y[ky][kx] as f32;
                }
            }

            let magnitude = (gx * gx + gy * gy).sqrt().min(255.0);
            let value = clamp_channel(magnitude);
            let idx = y * width + x;
            output[idx] = Rgba::new(value, value, value, pixels[idx].a);
        }
    }

    output
}
