//! Edge detection for the EdgeDetect conversion mode.

mod sobel;

pub use sobel::{sobel, SOBEL_X, SOBEL_Y};
