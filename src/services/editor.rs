use crate::error::{EditorError, GridError};
use crate::models::{AppConfig, BrushSize, Color, PixelGrid, RecentColors, Tool, ToolState};

use super::brush::stamp;
use super::flood_fill::flood_fill;
use super::history::HistoryStack;

/// One editing session: the live grid, its history and the tool state.
///
/// This is the only owner of the history. Brush strokes commit once on
/// [`release`](Self::release); fills and clears commit immediately.
#[derive(Debug, Clone)]
pub struct EditSession {
    grid: PixelGrid,
    history: HistoryStack,
    tools: ToolState,
    recent: RecentColors,
    stroke_active: bool,
}

impl EditSession {
    pub fn new(size: usize) -> Result<Self, EditorError> {
        Self::build(size, None)
    }

    pub fn with_config(config: &AppConfig) -> Result<Self, EditorError> {
        Self::build(config.grid_size, config.history_depth)
    }

    fn build(size: usize, max_depth: Option<usize>) -> Result<Self, EditorError> {
        let grid = PixelGrid::new(size)?;
        let mut history = match max_depth {
            Some(depth) => HistoryStack::with_max_depth(depth),
            None => HistoryStack::new(),
        };
        history.initialize(&grid);
        Ok(Self {
            grid,
            history,
            tools: ToolState::default(),
            recent: RecentColors::new(),
            stroke_active: false,
        })
    }

    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn recent_colors(&self) -> &[Color] {
        self.recent.colors()
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tools.tool = tool;
    }

    pub fn set_color(&mut self, color: Color) {
        self.tools.color = color;
        if color.is_opaque() {
            self.recent.select(color);
        }
    }

    pub fn set_brush_size(&mut self, size: BrushSize) {
        self.tools.brush_size = size;
    }

    pub fn toggle_grid_overlay(&mut self) -> bool {
        self.tools.show_grid = !self.tools.show_grid;
        self.tools.show_grid
    }

    pub fn is_stroke_active(&self) -> bool {
        self.stroke_active
    }

    /// Pointer down on `(row, col)` with the current tool.
    pub fn press(&mut self, row: usize, col: usize) -> Result<(), EditorError> {
        let picked = self.grid.get(row, col)?;

        match self.tools.tool {
            Tool::Pencil | Tool::Eraser => {
                self.stroke_active = true;
                self.paint(row, col);
            }
            Tool::Fill => {
                let filled = flood_fill(&mut self.grid, row, col, self.tools.color)?;
                if filled > 0 {
                    self.history.commit(&self.grid);
                }
            }
            Tool::Eyedropper => {
                if picked.is_opaque() {
                    self.set_color(picked);
                }
                self.tools.tool = Tool::Pencil;
            }
        }
        Ok(())
    }

    /// Pointer moved onto `(row, col)`; paints only during a stroke.
    pub fn drag(&mut self, row: usize, col: usize) -> Result<(), EditorError> {
        self.check_bounds(row, col)?;
        if self.stroke_active {
            self.paint(row, col);
        }
        Ok(())
    }

    /// Pointer up: commit the stroke, if any, as one history entry.
    pub fn release(&mut self) {
        if self.stroke_active {
            self.stroke_active = false;
            self.history.commit(&self.grid);
        }
    }

    pub fn undo(&mut self) -> Result<(), EditorError> {
        self.stroke_active = false;
        self.grid = self.history.undo()?;
        Ok(())
    }

    pub fn redo(&mut self) -> Result<(), EditorError> {
        self.stroke_active = false;
        self.grid = self.history.redo()?;
        Ok(())
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Blank the grid (same size) as an undoable step.
    pub fn clear(&mut self) -> Result<(), EditorError> {
        self.stroke_active = false;
        self.grid = PixelGrid::new(self.grid.size())?;
        self.history.commit(&self.grid);
        Ok(())
    }

    /// Start over with a blank grid of a new size; history restarts.
    pub fn resize(&mut self, size: usize) -> Result<(), EditorError> {
        let grid = PixelGrid::new(size)?;
        self.stroke_active = false;
        self.grid = grid;
        self.history.initialize(&self.grid);
        tracing::debug!(size, max_depth = ?self.history.max_depth(), "Resized grid");
        Ok(())
    }

    /// Replace the live grid (loaded project or converted image) as an
    /// undoable step. The size may differ from the current one.
    pub fn load_grid(&mut self, grid: PixelGrid) {
        self.stroke_active = false;
        self.grid = grid;
        self.history.commit(&self.grid);
    }

    fn paint(&mut self, row: usize, col: usize) {
        stamp(
            &mut self.grid,
            row,
            col,
            self.tools.brush_size,
            self.tools.tool,
            self.tools.color,
        );
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), GridError> {
        self.grid.get(row, col).map(|_| ())
    }
}
