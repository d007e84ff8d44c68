//! 8-bit RGBA pixel type
//!
//! Every stage of the reduction pipeline works on plain 8-bit channels.
//! Intermediate arithmetic is done in `f32` and written back with
//! rounding and clamping, the same way a canvas `Uint8ClampedArray` stores
//! values.

/// Alpha values at or below this threshold count as transparent.
pub const ALPHA_THRESHOLD: u8 = 128;

/// Mid-gray pivot used by contrast scaling and the 1-bit dither threshold.
pub const MIDPOINT: f32 = 128.0;

/// A straight (non-premultiplied) 8-bit RGBA pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
    /// Alpha channel (0 = fully transparent, 255 = fully opaque)
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    /// Create a pixel from its four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque pixel.
    ///
    /// # Example
    /// ```
    /// use pixel_reduce::Rgba;
    /// let red = Rgba::opaque(255, 0, 0);
    /// assert!(red.is_opaque());
    /// ```
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a pixel from a byte array `[R, G, B, A]`.
    #[inline]
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Whether this pixel survives quantization as an opaque cell.
    ///
    /// Alpha must be strictly greater than [`ALPHA_THRESHOLD`].
    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a > ALPHA_THRESHOLD
    }

    /// The color channels without alpha.
    #[inline]
    pub fn rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Channel `i` (0 = red, 1 = green, 2 = blue, 3 = alpha).
    #[inline]
    pub fn channel(self, i: usize) -> u8 {
        match i {
            0 => self.r,
            1 => self.g,
            2 => self.b,
            _ => self.a,
        }
    }

    /// Mutable access to channel `i` (same indexing as [`channel`](Self::channel)).
    #[inline]
    pub fn channel_mut(&mut self, i: usize) -> &mut u8 {
        match i {
            0 => &mut self.r,
            1 => &mut self.g,
            2 => &mut self.b,
            _ => &mut self.a,
        }
    }

    /// Unweighted luminance `(R + G + B) / 3`.
    #[inline]
    pub fn luminance(self) -> f32 {
        (self.r as f32 + self.g as f32 + self.b as f32) / 3.0
    }
}

/// Squared Euclidean distance between two RGB triples.
///
/// Ordering by squared distance is identical to ordering by distance, so
/// the square root is never taken.
#[inline]
pub fn distance_sq(a: [u8; 3], b: [u8; 3]) -> u32 {
    let dr = a[0] as i32 - b[0] as i32;
    let dg = a[1] as i32 - b[1] as i32;
    let db = a[2] as i32 - b[2] as i32;
    (dr * dr + dg * dg + db * db) as u32
}

/// Store a float channel value the way an 8-bit clamped buffer does:
/// round half to even, then clamp to `0..=255`.
#[inline]
pub fn clamp_channel(value: f32) -> u8 {
    value.round_ties_even().clamp(0.0, 255.0) as u8
}
