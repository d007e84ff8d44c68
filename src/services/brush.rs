use std::ops::Range;

use crate::models::{BrushSize, Color, PixelGrid, Tool};

/// Paint an `n x n` block around `(row, col)`.
///
/// The block starts `brush.offset()` cells up and left of the center, so
/// even sizes extend toward the bottom-right. Cells falling outside the
/// grid are skipped. The eraser writes transparent whatever `color` is.
///
/// Returns the number of cells written.
pub fn stamp(
    grid: &mut PixelGrid,
    row: usize,
    col: usize,
    brush: BrushSize,
    tool: Tool,
    color: Color,
) -> usize {
    let paint = match tool {
        Tool::Eraser => Color::Transparent,
        _ => color,
    };
    let rows = clipped_span(row, brush, grid.size());
    let cols = clipped_span(col, brush, grid.size());

    let mut written = 0;
    for r in rows {
        for c in cols.clone() {
            if grid.set(r, c, paint).is_ok() {
                written += 1;
            }
        }
    }
    written
}

/// The brush footprint along one axis, clipped to `0..size`.
fn clipped_span(center: usize, brush: BrushSize, size: usize) -> Range<usize> {
    let start = center.saturating_sub(brush.offset()).min(size);
    let end = center
        .saturating_add(brush.get() - brush.offset())
        .min(size);
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn changed(a: &PixelGrid, b: &PixelGrid) -> usize {
        a.cells()
            .iter()
            .zip(b.cells())
            .filter(|(x, y)| x != y)
            .count()
    }

    #[test]
    fn test_size_one_changes_one_cell() {
        let before = PixelGrid::new(5).unwrap();
        let mut grid = before.clone();
        stamp(&mut grid, 2, 2, BrushSize::SMALL, Tool::Pencil, Color::BLACK);
        assert_eq!(changed(&before, &grid), 1);
        assert_eq!(grid.get(2, 2), Ok(Color::BLACK));
    }

    #[test]
    fn test_size_three_interior_changes_nine() {
        let before = PixelGrid::new(5).unwrap();
        let mut grid = before.clone();
        let written = stamp(&mut grid, 2, 2, BrushSize::LARGE, Tool::Pencil, Color::BLACK);
        assert_eq!(written, 9);
        assert_eq!(changed(&before, &grid), 9);
        assert_eq!(grid.get(1, 1), Ok(Color::BLACK));
        assert_eq!(grid.get(3, 3), Ok(Color::BLACK));
        assert_eq!(grid.get(0, 0), Ok(Color::Transparent));
    }

    #[test]
    fn test_size_three_corner_clips() {
        let before = PixelGrid::new(5).unwrap();
        let mut grid = before.clone();
        let written = stamp(&mut grid, 0, 0, BrushSize::LARGE, Tool::Pencil, Color::BLACK);
        assert_eq!(written, 4);
        assert_eq!(changed(&before, &grid), 4);
    }

    #[test]
    fn test_size_two_extends_down_right_from_offset() {
        let mut grid = PixelGrid::new(4).unwrap();
        stamp(&mut grid, 2, 2, BrushSize::MEDIUM, Tool::Pencil, Color::WHITE);
        assert_eq!(grid.get(1, 1), Ok(Color::WHITE));
        assert_eq!(grid.get(2, 2), Ok(Color::WHITE));
        assert_eq!(grid.get(3, 3), Ok(Color::Transparent));
        assert_eq!(grid.opaque_count(), 4);
    }

    #[test]
    fn test_eraser_ignores_color() {
        let mut grid = PixelGrid::new(3).unwrap();
        stamp(&mut grid, 1, 1, BrushSize::LARGE, Tool::Pencil, Color::BLACK);
        stamp(&mut grid, 1, 1, BrushSize::SMALL, Tool::Eraser, Color::WHITE);
        assert_eq!(grid.get(1, 1), Ok(Color::Transparent));
        assert_eq!(grid.opaque_count(), 8);
    }

    #[test]
    fn test_huge_brush_covers_grid_once() {
        let mut grid = PixelGrid::new(6).unwrap();
        let brush = BrushSize::new(1_000_000_000).unwrap();
        let written = stamp(&mut grid, 3, 3, brush, Tool::Pencil, Color::BLACK);
        assert_eq!(written, 36);
        assert_eq!(grid.opaque_count(), 36);
    }

    #[test]
    fn test_huge_brush_at_usize_edge() {
        let mut grid = PixelGrid::new(4).unwrap();
        let brush = BrushSize::new(usize::MAX).unwrap();
        assert_eq!(stamp(&mut grid, 0, 0, brush, Tool::Pencil, Color::WHITE), 16);
    }
}
