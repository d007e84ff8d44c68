pub mod color;
pub mod config;
pub mod grid;
pub mod project;
pub mod swatches;
pub mod tool;

pub use color::{Color, ColorParseError, TRANSPARENT_LITERAL};
pub use config::{AppConfig, ReductionConfig};
pub use grid::PixelGrid;
pub use project::ProjectFile;
pub use swatches::{CustomColors, RecentColors};
pub use tool::{BrushSize, Tool, ToolState};
