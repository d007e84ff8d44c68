use serde::{Deserialize, Serialize};

use super::color::Color;
use super::grid::PixelGrid;

/// On-disk project record.
///
/// ```json
/// { "gridSize": 2, "pixels": [["#000000", "transparent"], ...], "timestamp": 1700000000000 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFile {
    pub grid_size: usize,
    pub pixels: Vec<Vec<Color>>,
    /// Save time in Unix milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl ProjectFile {
    pub fn from_grid(grid: &PixelGrid, timestamp: Option<i64>) -> Self {
        Self {
            grid_size: grid.size(),
            pixels: grid.to_rows(),
            timestamp,
        }
    }
}
