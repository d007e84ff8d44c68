//! Pixel color types
//!
//! The pipeline only needs one pixel representation: straight 8-bit RGBA
//! as produced by an image decoder. Helpers for channel arithmetic live
//! next to the type.

mod rgba;

pub use rgba::{clamp_channel, distance_sq, Rgba, ALPHA_THRESHOLD, MIDPOINT};
