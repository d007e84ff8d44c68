use crate::error::GridError;
use crate::models::{Color, PixelGrid};

/// Recolor the 4-connected region containing `(row, col)`.
///
/// Uses an explicit stack, so large grids never recurse. Neighbors are
/// pushed unchecked and filtered when popped. Filling with the region's
/// own color is a no-op.
///
/// Returns the number of cells recolored.
pub fn flood_fill(
    grid: &mut PixelGrid,
    row: usize,
    col: usize,
    replacement: Color,
) -> Result<usize, GridError> {
    let target = grid.get(row, col)?;
    if target == replacement {
        return Ok(0);
    }

    let mut stack: Vec<(isize, isize)> = vec![(row as isize, col as isize)];
    let mut filled = 0;

    while let Some((r, c)) = stack.pop() {
        if !grid.contains(r, c) {
            continue;
        }
        let (ur, uc) = (r as usize, c as usize);
        if grid.get(ur, uc)? != target {
            continue;
        }
        grid.set(ur, uc, replacement)?;
        filled += 1;

        stack.push((r + 1, c));
        stack.push((r - 1, c));
        stack.push((r, c + 1));
        stack.push((r, c - 1));
    }

    tracing::debug!(row, col, %replacement, filled, "Flood fill");
    Ok(filled)
}
