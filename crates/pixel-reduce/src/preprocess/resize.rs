//! Area-average resampling to a square target.
//!
//! Each target pixel averages the block of source pixels it covers. When
//! upscaling, the block degenerates to the single nearest source pixel.
//! Averaging is alpha-weighted so fully transparent source pixels do not
//! darken the edges of opaque regions.

use crate::bitmap::Bitmap;
use crate::color::Rgba;

/// Source index range `[start, end)` covered by target index `t`.
#[inline]
fn footprint(t: usize, target: usize, source: usize) -> (usize, usize) {
    let start = t * source / target;
    let end = ((t + 1) * source)
        .div_ceil(target)
        .max(start + 1)
        .min(source);
    (start, end)
}

#[inline]
fn div_round(n: u64, d: u64) -> u8 {
    ((n + d / 2) / d).min(255) as u8
}

/// Resample `src` to a `size x size` pixel buffer (row-major).
pub fn resample_area(src: &Bitmap, size: usize) -> Vec<Rgba> {
    let width = src.width();
    let height = src.height();
    let pixels = src.pixels();
    let mut out = Vec::with_capacity(size * size);

    for ty in 0..size {
        let (y0, y1) = footprint(ty, size, height);
        for tx in 0..size {
            let (x0, x1) = footprint(tx, size, width);

            let mut sum = [0u64; 3];
            let mut alpha = 0u64;
            let mut count = 0u64;
            for y in y0..y1 {
                for px in &pixels[y * width + x0..y * width + x1] {
                    let a = px.a as u64;
                    sum[0] += px.r as u64 * a;
                    sum[1] += px.g as u64 * a;
                    sum[2] += px.b as u64 * a;
                    alpha += a;
                    count += 1;
                }
            }

            if alpha == 0 {
                out.push(Rgba::TRANSPARENT);
                continue;
            }
            out.push(Rgba::new(
                div_round(sum[0], alpha),
                div_round(sum[1], alpha),
                div_round(sum[2], alpha),
                div_round(alpha, count),
            ));
        }
    }

    out
}
