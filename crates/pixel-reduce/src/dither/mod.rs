//! Error diffusion dithering.
//!
//! The Dithered conversion mode runs a per-channel 1-bit Floyd-Steinberg
//! pass between preprocessing and quantization. The diffusion kernel is
//! kept as data ([`Kernel`]) so the loop in [`diffuse_with_kernel`] is not
//! tied to one weight table.

mod floyd_steinberg;
mod kernel;

pub use floyd_steinberg::{diffuse_with_kernel, FloydSteinberg};
pub use kernel::{Kernel, FLOYD_STEINBERG};
