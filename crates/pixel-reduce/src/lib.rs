#![allow(clippy::module_inception, clippy::needless_range_loop)]

//! pixel-reduce: turn a photograph into a pixel-art grid
//!
//! This library converts an arbitrary RGBA bitmap into a small square grid
//! of palette colors. It has no dependencies and performs no I/O; decoding
//! image files is the caller's job.
//!
//! # Quick Start
//!
//! ```
//! use pixel_reduce::{reduce, Bitmap, ReductionParameters, Rgba};
//!
//! let source = Bitmap::filled(120, 90, Rgba::opaque(30, 144, 255));
//! let params = ReductionParameters::new().target_size(32).palette_size(8);
//!
//! let image = reduce(&source, &params).unwrap();
//! assert_eq!(image.size(), 32);
//! assert!(image.distinct_colors() <= 8);
//! ```
//!
//! # Pipeline Overview
//!
//! ```text
//! RGBA bitmap (any size)
//!     |
//!     v
//! [Resample]              area average to target_size x target_size
//!     |
//!     v
//! [Contrast]              per channel around 128
//!     |
//!     +-- Standard ------> (unchanged)
//!     +-- Dithered ------> Floyd-Steinberg, 1 bit per channel,
//!     |                    error scaled by dither_strength / 100
//!     +-- EdgeDetect ----> Sobel magnitude on (R+G+B)/3, border kept
//!     |
//!     v
//! [Quantize]              alpha <= 128 -> transparent
//!                         palette = every k-th opaque pixel,
//!                         k = floor(opaque / palette_size)
//!                         nearest entry by RGB Euclidean distance
//!     |
//!     v
//! ReducedImage
//! ```
//!
//! ## Determinism
//!
//! Every stage is a pure function of its input. The palette is a stride
//! sample rather than a clustering result, so identical inputs produce
//! byte-identical grids. Nearest-color ties resolve to the earliest
//! palette entry.
//!
//! ## Ordering
//!
//! Error diffusion reads values written by earlier pixels in raster
//! order, so the dither stage is strictly sequential. Quantization only
//! reads the palette and could be split per pixel without changing the
//! result.

pub mod api;
pub mod bitmap;
pub mod color;
pub mod dither;
pub mod edge;
pub mod output;
pub mod palette;
pub mod preprocess;

#[cfg(test)]
mod domain_tests;

pub use api::{
    reduce, ConversionMode, ParameterError, PixelReducer, ReduceError, ReductionParameters,
};
pub use bitmap::Bitmap;
pub use color::Rgba;
pub use dither::FloydSteinberg;
pub use edge::sobel;
pub use output::ReducedImage;
pub use palette::{Palette, PaletteError};
pub use preprocess::Preprocessor;
