//! Domain-critical regression tests for pixel-reduce.
//!
//! Each test names the class of bug it guards against.

#[cfg(test)]
mod domain_tests {
    use crate::api::{reduce, ConversionMode, ReductionParameters};
    use crate::bitmap::Bitmap;
    use crate::color::Rgba;

    /// 16x16 bitmap where row `r` is the red level `r * 16`.
    fn row_bands() -> Bitmap {
        let pixels = (0..256)
            .map(|i| Rgba::opaque((i / 16 * 16) as u8, 0, 0))
            .collect();
        Bitmap::new(16, 16, pixels).unwrap()
    }

    // ========================================================================
    // Stride sampling is the palette algorithm, not clustering
    // ========================================================================

    /// If this breaks, someone replaced the stride sampler with a smarter
    /// quantizer (k-means, median cut, ...). Saved projects and golden
    /// outputs depend on the exact stride behavior.
    ///
    /// 256 opaque pixels, palette 4 -> stride 64 -> rows 0, 4, 8, 12.
    #[test]
    fn test_palette_is_exact_stride_sample() {
        let params = ReductionParameters::new().target_size(16).palette_size(4);
        let image = reduce(&row_bands(), &params).unwrap();

        let mut colors: Vec<[u8; 3]> = image.cells().iter().flatten().copied().collect();
        colors.sort();
        colors.dedup();
        assert_eq!(
            colors,
            vec![[0, 0, 0], [64, 0, 0], [128, 0, 0], [192, 0, 0]],
            "palette must be rows 0/4/8/12, not cluster centroids"
        );
    }

    /// If this breaks, nearest-color ties stopped going to the earliest
    /// palette entry. Row 2 (red 32) is exactly between palette entries
    /// 0 and 64; it must resolve to 0.
    #[test]
    fn test_nearest_tie_goes_to_first_entry() {
        let params = ReductionParameters::new().target_size(16).palette_size(4);
        let image = reduce(&row_bands(), &params).unwrap();

        assert_eq!(image.get(2, 0), Some(Some([0, 0, 0])));
        assert_eq!(image.get(3, 0), Some(Some([64, 0, 0])));
        assert_eq!(image.get(15, 0), Some(Some([192, 0, 0])));
    }

    // ========================================================================
    // Determinism
    // ========================================================================

    /// If this breaks, some stage picked up hidden state (randomness,
    /// iteration over a hash map, uninitialized buffers).
    #[test]
    fn test_all_modes_deterministic() {
        let pixels = (0..50 * 30)
            .map(|i| {
                let x = (i % 50) as u8;
                let y = (i / 50) as u8;
                Rgba::new(x * 5, y * 8, x.wrapping_mul(y), 255 - x)
            })
            .collect();
        let source = Bitmap::new(50, 30, pixels).unwrap();

        for mode in [
            ConversionMode::Standard,
            ConversionMode::Dithered,
            ConversionMode::EdgeDetect,
        ] {
            let params = ReductionParameters::new()
                .target_size(24)
                .palette_size(12)
                .contrast(140)
                .dither_strength(80)
                .mode(mode);
            let a = reduce(&source, &params);
            let b = reduce(&source, &params);
            assert_eq!(a, b, "{mode} must be deterministic");
        }
    }

    // ========================================================================
    // Transparency threshold
    // ========================================================================

    /// If this breaks, the alpha comparison flipped from `> 128` to
    /// `>= 128`, and half-transparent pixels start showing up as solid.
    #[test]
    fn test_alpha_128_is_transparent() {
        let pixels = (0..256)
            .map(|i| {
                if i % 2 == 0 {
                    Rgba::new(10, 20, 30, 128)
                } else {
                    Rgba::new(10, 20, 30, 129)
                }
            })
            .collect();
        let source = Bitmap::new(16, 16, pixels).unwrap();
        let image = reduce(&source, &ReductionParameters::new().target_size(16)).unwrap();

        assert_eq!(image.get(0, 0), Some(None));
        assert_eq!(image.get(0, 1), Some(Some([10, 20, 30])));
    }

    // ========================================================================
    // Mode branches
    // ========================================================================

    /// If this breaks, dithering with zero strength started leaking error
    /// (damping factor ignored) or stopped thresholding.
    #[test]
    fn test_zero_strength_dither_is_threshold() {
        let params = ReductionParameters::new()
            .target_size(16)
            .palette_size(32)
            .dither_strength(0)
            .mode(ConversionMode::Dithered);
        let image = reduce(&row_bands(), &params).unwrap();

        for row in 0..16 {
            let expected = if row * 16 < 128 { [0, 0, 0] } else { [255, 0, 0] };
            for col in 0..16 {
                assert_eq!(image.get(row, col), Some(Some(expected)), "({row},{col})");
            }
        }
    }

    /// If this breaks, the sampler stopped using a zero stride when there
    /// are fewer opaque pixels than palette entries.
    ///
    /// 3 opaque pixels, palette 16 -> stride 0 -> every entry is the first
    /// opaque pixel in scan order, so all three cells collapse onto it.
    #[test]
    fn test_sparse_image_collapses_to_first_pixel() {
        let mut pixels = vec![Rgba::TRANSPARENT; 256];
        pixels[5] = Rgba::opaque(200, 0, 0);
        pixels[100] = Rgba::opaque(0, 200, 0);
        pixels[250] = Rgba::opaque(0, 0, 200);
        let source = Bitmap::new(16, 16, pixels).unwrap();
        let params = ReductionParameters::new().target_size(16).palette_size(16);
        let image = reduce(&source, &params).unwrap();

        assert_eq!(image.distinct_colors(), 1);
        assert_eq!(image.get(0, 5), Some(Some([200, 0, 0])));
        assert_eq!(image.get(6, 4), Some(Some([200, 0, 0])));
        assert_eq!(image.get(15, 10), Some(Some([200, 0, 0])));
        assert_eq!(image.get(0, 0), Some(None));
    }

    /// If this breaks, edge detection started writing the border or
    /// reading already-overwritten neighbors.
    ///
    /// A flat image has zero gradient everywhere: interior goes black,
    /// the one-pixel border keeps the original color. Palette 32 gives
    /// stride 8, which samples both border and interior pixels.
    #[test]
    fn test_edge_mode_keeps_border() {
        let color = Rgba::opaque(90, 160, 220);
        let source = Bitmap::filled(16, 16, color);
        let params = ReductionParameters::new()
            .target_size(16)
            .palette_size(32)
            .mode(ConversionMode::EdgeDetect);
        let image = reduce(&source, &params).unwrap();

        for row in 0..16 {
            for col in 0..16 {
                let border = row == 0 || col == 0 || row == 15 || col == 15;
                let expected = if border { color.rgb() } else { [0, 0, 0] };
                assert_eq!(image.get(row, col), Some(Some(expected)), "({row},{col})");
            }
        }
    }

    /// If this breaks, contrast is being applied before resampling with a
    /// different rounding path, or to the alpha channel.
    #[test]
    fn test_contrast_keeps_transparency() {
        let source = Bitmap::filled(20, 20, Rgba::new(10, 10, 10, 60));
        let params = ReductionParameters::new().target_size(16).contrast(200);
        assert!(reduce(&source, &params).is_err(), "still fully transparent");
    }
}
