//! Palette sampling and quantization
//!
//! The quantizer builds its palette with a deterministic stride sample
//! over the opaque pixels and maps each pixel to the nearest entry.

mod error;
mod palette;
mod quantize;

pub use error::PaletteError;
pub use palette::Palette;
pub use quantize::quantize;
