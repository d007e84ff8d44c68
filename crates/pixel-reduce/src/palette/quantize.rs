//! Map pixels onto a palette.

use std::collections::HashMap;

use crate::color::Rgba;

use super::palette::Palette;

/// Quantize every pixel: transparent pixels become `None`, opaque pixels
/// become their nearest palette color.
///
/// Lookups are memoized per distinct input color; the result is
/// identical to calling [`Palette::nearest_color`] per pixel.
pub fn quantize(pixels: &[Rgba], palette: &Palette) -> Vec<Option<[u8; 3]>> {
    let mut cache: HashMap<[u8; 3], [u8; 3]> = HashMap::new();
    pixels
        .iter()
        .map(|px| {
            if !px.is_opaque() {
                return None;
            }
            let rgb = px.rgb();
            Some(
                *cache
                    .entry(rgb)
                    .or_insert_with(|| palette.nearest_color(rgb)),
            )
        })
        .collect()
}
