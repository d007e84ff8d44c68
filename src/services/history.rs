use std::collections::VecDeque;

use crate::error::HistoryError;
use crate::models::PixelGrid;

/// Linear undo/redo log of grid snapshots.
///
/// The stack owns every snapshot it holds; grids go in and come out as
/// copies. Committing while undone discards the redo branch.
#[derive(Debug, Clone, Default)]
pub struct HistoryStack {
    entries: VecDeque<PixelGrid>,
    /// `None` until the first snapshot is recorded.
    cursor: Option<usize>,
    max_depth: Option<usize>,
}

impl HistoryStack {
    /// Unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// History that drops its oldest entry once more than `depth` are held.
    pub fn with_max_depth(depth: usize) -> Self {
        Self {
            max_depth: Some(depth.max(1)),
            ..Self::default()
        }
    }

    /// Reset to a single entry.
    pub fn initialize(&mut self, grid: &PixelGrid) {
        self.entries.clear();
        self.entries.push_back(grid.clone());
        self.cursor = Some(0);
    }

    /// Record `grid` after the cursor, discarding any redo entries.
    pub fn commit(&mut self, grid: &PixelGrid) {
        let keep = self.cursor.map_or(0, |c| c + 1);
        self.entries.truncate(keep);
        self.entries.push_back(grid.clone());

        if let Some(max) = self.max_depth {
            while self.entries.len() > max {
                self.entries.pop_front();
            }
        }
        self.cursor = Some(self.entries.len() - 1);
        tracing::debug!(
            entries = self.entries.len(),
            cursor = self.entries.len() - 1,
            "History commit"
        );
    }

    pub fn undo(&mut self) -> Result<PixelGrid, HistoryError> {
        match self.cursor {
            Some(c) if c > 0 => {
                self.cursor = Some(c - 1);
                Ok(self.entries[c - 1].clone())
            }
            _ => Err(HistoryError::NoOlderState),
        }
    }

    pub fn redo(&mut self) -> Result<PixelGrid, HistoryError> {
        match self.cursor {
            Some(c) if c + 1 < self.entries.len() => {
                self.cursor = Some(c + 1);
                Ok(self.entries[c + 1].clone())
            }
            _ => Err(HistoryError::NoNewerState),
        }
    }

    /// The snapshot under the cursor.
    pub fn current(&self) -> Result<&PixelGrid, HistoryError> {
        self.cursor
            .and_then(|c| self.entries.get(c))
            .ok_or(HistoryError::Uninitialized)
    }

    pub fn can_undo(&self) -> bool {
        matches!(self.cursor, Some(c) if c > 0)
    }

    pub fn can_redo(&self) -> bool {
        matches!(self.cursor, Some(c) if c + 1 < self.entries.len())
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Color;

    /// 1x1 grid holding a gray level, for telling snapshots apart.
    fn state(level: u8) -> PixelGrid {
        let mut grid = PixelGrid::new(1).unwrap();
        grid.set(0, 0, Color::Rgb(level, level, level)).unwrap();
        grid
    }

    #[test]
    fn test_uninitialized() {
        let mut history = HistoryStack::new();
        assert_eq!(history.current().unwrap_err(), HistoryError::Uninitialized);
        assert_eq!(history.undo().unwrap_err(), HistoryError::NoOlderState);
        assert_eq!(history.redo().unwrap_err(), HistoryError::NoNewerState);
        assert!(!history.can_undo());
    }

    #[test]
    fn test_initialize_resets() {
        let mut history = HistoryStack::new();
        history.initialize(&state(1));
        history.commit(&state(2));
        history.initialize(&state(9));
        assert_eq!(history.len(), 1);
        assert_eq!(history.cursor(), Some(0));
        assert_eq!(history.current().unwrap(), &state(9));
    }

    #[test]
    fn test_undo_at_start_fails() {
        let mut history = HistoryStack::new();
        history.initialize(&state(1));
        assert_eq!(history.undo().unwrap_err(), HistoryError::NoOlderState);
        assert_eq!(history.redo().unwrap_err(), HistoryError::NoNewerState);
    }

    #[test]
    fn test_commit_after_undo_discards_redo() {
        let mut history = HistoryStack::new();
        history.initialize(&state(1)); // A
        history.commit(&state(2)); // B
        history.commit(&state(3)); // C

        assert_eq!(history.undo().unwrap(), state(2));
        history.commit(&state(4)); // D

        assert_eq!(history.len(), 3);
        assert_eq!(history.redo().unwrap_err(), HistoryError::NoNewerState);
        assert_eq!(history.undo().unwrap(), state(2));
        assert_eq!(history.undo().unwrap(), state(1));
        assert_eq!(history.redo().unwrap(), state(2));
        assert_eq!(history.redo().unwrap(), state(4));
    }

    #[test]
    fn test_returned_grid_is_a_copy() {
        let mut history = HistoryStack::new();
        history.initialize(&state(1));
        history.commit(&state(2));

        let mut grid = history.undo().unwrap();
        grid.set(0, 0, Color::WHITE).unwrap();
        assert_eq!(history.current().unwrap(), &state(1));
    }

    #[test]
    fn test_max_depth_drops_oldest() {
        let mut history = HistoryStack::with_max_depth(3);
        history.initialize(&state(1));
        for level in 2..=5 {
            history.commit(&state(level));
        }

        assert_eq!(history.len(), 3);
        assert_eq!(history.cursor(), Some(2));
        assert_eq!(history.undo().unwrap(), state(4));
        assert_eq!(history.undo().unwrap(), state(3));
        assert_eq!(history.undo().unwrap_err(), HistoryError::NoOlderState);
    }

    #[test]
    fn test_max_depth_not_reached_keeps_all() {
        let mut history = HistoryStack::with_max_depth(10);
        history.initialize(&state(1));
        history.commit(&state(2));
        assert_eq!(history.len(), 2);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }
}
