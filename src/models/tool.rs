use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::color::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    #[default]
    Pencil,
    Eraser,
    Fill,
    Eyedropper,
}

impl Tool {
    pub fn as_str(self) -> &'static str {
        match self {
            Tool::Pencil => "pencil",
            Tool::Eraser => "eraser",
            Tool::Fill => "fill",
            Tool::Eyedropper => "eyedropper",
        }
    }

    /// Whether the tool paints through the brush stamp.
    pub fn is_brush(self) -> bool {
        matches!(self, Tool::Pencil | Tool::Eraser)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pencil" => Ok(Tool::Pencil),
            "eraser" => Ok(Tool::Eraser),
            "fill" | "bucket" => Ok(Tool::Fill),
            "eyedropper" | "picker" => Ok(Tool::Eyedropper),
            other => Err(format!("unknown tool: {other}")),
        }
    }
}

/// Side length of the square brush, at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct BrushSize(usize);

impl BrushSize {
    pub const SMALL: BrushSize = BrushSize(1);
    pub const MEDIUM: BrushSize = BrushSize(2);
    pub const LARGE: BrushSize = BrushSize(3);

    pub fn new(n: usize) -> Option<Self> {
        (n >= 1).then_some(Self(n))
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Distance from the center cell to the stamp's top-left corner.
    pub fn offset(self) -> usize {
        self.0 / 2
    }
}

impl Default for BrushSize {
    fn default() -> Self {
        Self::SMALL
    }
}

impl TryFrom<usize> for BrushSize {
    type Error = String;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        Self::new(n).ok_or_else(|| "brush size must be at least 1".to_string())
    }
}

impl From<BrushSize> for usize {
    fn from(size: BrushSize) -> Self {
        size.0
    }
}

/// Current tool selection. Cosmetic settings such as the overlay grid
/// live here and never reach the pixel grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolState {
    pub tool: Tool,
    pub color: Color,
    pub brush_size: BrushSize,
    pub show_grid: bool,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            tool: Tool::Pencil,
            color: Color::BLACK,
            brush_size: BrushSize::SMALL,
            show_grid: true,
        }
    }
}
