pub mod brush;
pub mod editor;
pub mod flood_fill;
pub mod history;
pub mod project_codec;
pub mod reduction;

pub use brush::stamp;
pub use editor::EditSession;
pub use flood_fill::flood_fill;
pub use history::HistoryStack;
pub use project_codec::{load_project, save_project};
pub use reduction::{convert_image, decode_bitmap, reduce_to_grid, BitmapDecoder, PngDecoder};
