//! Contrast adjustment around mid-gray.
//!
//! Mirrors the CSS `contrast()` filter on 8-bit channels: each color
//! channel is scaled away from (or toward) 128 by `percent / 100` and
//! clamped back into range. Alpha is never touched.

use crate::color::{clamp_channel, Rgba, MIDPOINT};

/// Adjust a single channel value.
///
/// - `percent == 100` returns the input unchanged
/// - `percent < 100` pulls the value toward 128
/// - `percent > 100` pushes it away from 128
#[inline]
pub fn adjust_channel(value: u8, percent: u32) -> u8 {
    if percent == 100 {
        return value;
    }
    let factor = percent as f32 / 100.0;
    clamp_channel((value as f32 - MIDPOINT) * factor + MIDPOINT)
}

/// Adjust the three color channels of a pixel.
#[inline]
pub fn adjust_pixel(pixel: Rgba, percent: u32) -> Rgba {
    Rgba::new(
        adjust_channel(pixel.r, percent),
        adjust_channel(pixel.g, percent),
        adjust_channel(pixel.b, percent),
        pixel.a,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_at_100() {
        for v in 0..=255u8 {
            assert_eq!(adjust_channel(v, 100), v);
        }
    }

    #[test]
    fn test_midpoint_is_fixed() {
        assert_eq!(adjust_channel(128, 50), 128);
        assert_eq!(adjust_channel(128, 200), 128);
    }

    #[test]
    fn test_reduce_pulls_toward_midpoint() {
        assert_eq!(adjust_channel(0, 50), 64);
        assert_eq!(adjust_channel(255, 50), 192);
    }

    #[test]
    fn test_increase_pushes_and_clamps() {
        assert_eq!(adjust_channel(100, 200), 72);
        assert_eq!(adjust_channel(10, 200), 0);
        assert_eq!(adjust_channel(250, 200), 255);
    }

    #[test]
    fn test_alpha_untouched() {
        let px = adjust_pixel(Rgba::new(0, 255, 128, 77), 50);
        assert_eq!(px, Rgba::new(64, 192, 128, 77));
    }
}
