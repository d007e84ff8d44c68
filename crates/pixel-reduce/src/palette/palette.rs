//! Stride-sampled palette and nearest-color lookup.

use crate::color::{distance_sq, Rgba};

use super::error::PaletteError;

/// A bounded list of representative colors.
///
/// Built by [`Palette::stride_sample`]: every k-th opaque pixel in scan
/// order, where `k = floor(opaque_count / max_colors)`. This is a cheap,
/// deterministic sample, not a clustering algorithm; the same input always
/// yields the same palette in the same order. Entries may repeat when the
/// image has fewer distinct colors than samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<[u8; 3]>,
}

impl Palette {
    /// Build a palette from explicit colors.
    ///
    /// # Errors
    ///
    /// [`PaletteError::NoOpaquePixels`] if `colors` is empty.
    pub fn new(colors: Vec<[u8; 3]>) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::NoOpaquePixels);
        }
        Ok(Self { colors })
    }

    /// Sample up to `max_colors` colors from the opaque pixels of `pixels`.
    ///
    /// When there are fewer opaque pixels than `max_colors` the stride
    /// would be zero; it is raised to one so each opaque pixel is sampled
    /// once instead of sampling the first pixel repeatedly.
    ///
    /// # Example
    ///
    /// ```
    /// use pixel_reduce::{Palette, Rgba};
    ///
    /// let pixels: Vec<Rgba> = (0..8).map(|i| Rgba::opaque(i * 10, 0, 0)).collect();
    /// let palette = Palette::stride_sample(&pixels, 4).unwrap();
    ///
    /// // stride = 8 / 4 = 2 -> pixels 0, 2, 4, 6
    /// assert_eq!(palette.colors(), &[[0, 0, 0], [20, 0, 0], [40, 0, 0], [60, 0, 0]]);
    /// ```
    pub fn stride_sample(pixels: &[Rgba], max_colors: usize) -> Result<Self, PaletteError> {
        let opaque: Vec<[u8; 3]> = pixels
            .iter()
            .filter(|px| px.is_opaque())
            .map(|px| px.rgb())
            .collect();
        if opaque.is_empty() || max_colors == 0 {
            return Err(PaletteError::NoOpaquePixels);
        }

        // A zero stride repeats the first opaque pixel for every entry
        let stride = opaque.len() / max_colors;
        let colors = (0..max_colors)
            .map(|i| i * stride)
            .take_while(|&idx| idx < opaque.len())
            .map(|idx| opaque[idx])
            .collect();
        Self::new(colors)
    }

    /// Number of entries (duplicates included).
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false for a constructed palette.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Palette entries in sampling order.
    #[inline]
    pub fn colors(&self) -> &[[u8; 3]] {
        &self.colors
    }

    /// Number of distinct colors among the entries.
    pub fn distinct_len(&self) -> usize {
        let mut seen: Vec<[u8; 3]> = Vec::with_capacity(self.colors.len());
        for c in &self.colors {
            if !seen.contains(c) {
                seen.push(*c);
            }
        }
        seen.len()
    }

    /// Index of the entry nearest to `rgb` by Euclidean distance.
    ///
    /// Ties go to the first entry in palette order.
    pub fn find_nearest(&self, rgb: [u8; 3]) -> usize {
        let mut best = 0;
        let mut best_dist = u32::MAX;
        for (i, &c) in self.colors.iter().enumerate() {
            let d = distance_sq(rgb, c);
            if d < best_dist {
                best = i;
                best_dist = d;
                if d == 0 {
                    break;
                }
            }
        }
        best
    }

    /// Color of the entry nearest to `rgb`.
    #[inline]
    pub fn nearest_color(&self, rgb: [u8; 3]) -> [u8; 3] {
        self.colors[self.find_nearest(rgb)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rejected() {
        assert_eq!(Palette::new(Vec::new()), Err(PaletteError::NoOpaquePixels));
        let transparent = vec![Rgba::new(1, 1, 1, 128); 10];
        assert_eq!(
            Palette::stride_sample(&transparent, 4),
            Err(PaletteError::NoOpaquePixels)
        );
    }

    #[test]
    fn test_stride_skips_transparent() {
        let pixels = vec![
            Rgba::TRANSPARENT,
            Rgba::opaque(1, 0, 0),
            Rgba::TRANSPARENT,
            Rgba::opaque(2, 0, 0),
            Rgba::opaque(3, 0, 0),
            Rgba::opaque(4, 0, 0),
        ];
        // 4 opaque, max 2 -> stride 2 -> opaque[0], opaque[2]
        let palette = Palette::stride_sample(&pixels, 2).unwrap();
        assert_eq!(palette.colors(), &[[1, 0, 0], [3, 0, 0]]);
    }

    #[test]
    fn test_stride_remainder_is_ignored() {
        // 10 opaque, max 4 -> stride 2 -> indices 0, 2, 4, 6 (not 8)
        let pixels: Vec<Rgba> = (0..10).map(|i| Rgba::opaque(i, i, i)).collect();
        let palette = Palette::stride_sample(&pixels, 4).unwrap();
        assert_eq!(palette.len(), 4);
        assert_eq!(palette.colors()[3], [6, 6, 6]);
    }

    #[test]
    fn test_fewer_pixels_than_colors() {
        // 2 opaque, max 16 -> stride 0 -> opaque[0] sixteen times
        let pixels = vec![Rgba::opaque(5, 5, 5), Rgba::opaque(9, 9, 9)];
        let palette = Palette::stride_sample(&pixels, 16).unwrap();
        assert_eq!(palette.len(), 16);
        assert_eq!(palette.distinct_len(), 1);
        assert_eq!(palette.nearest_color([9, 9, 9]), [5, 5, 5]);
    }

    #[test]
    fn test_duplicates_counted_once_in_distinct_len() {
        let pixels = vec![Rgba::opaque(7, 7, 7); 32];
        let palette = Palette::stride_sample(&pixels, 8).unwrap();
        assert_eq!(palette.len(), 8);
        assert_eq!(palette.distinct_len(), 1);
    }

    #[test]
    fn test_find_nearest() {
        let palette = Palette::new(vec![[0, 0, 0], [255, 255, 255], [255, 0, 0]]).unwrap();
        assert_eq!(palette.find_nearest([10, 10, 10]), 0);
        assert_eq!(palette.find_nearest([240, 250, 245]), 1);
        assert_eq!(palette.find_nearest([200, 30, 20]), 2);
    }

    #[test]
    fn test_find_nearest_tie_goes_to_first() {
        let palette = Palette::new(vec![[0, 0, 0], [20, 0, 0]]).unwrap();
        assert_eq!(palette.find_nearest([10, 0, 0]), 0);
        let reversed = Palette::new(vec![[20, 0, 0], [0, 0, 0]]).unwrap();
        assert_eq!(reversed.find_nearest([10, 0, 0]), 0);
    }
}
