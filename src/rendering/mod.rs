pub mod export;

pub use export::{export_png, PngExporter, SCALE_RANGE};
