//! Output types for the reduction pipeline.

mod reduced_image;

pub use reduced_image::ReducedImage;
