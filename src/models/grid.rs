use std::collections::HashSet;

use pixel_reduce::ReducedImage;

use super::color::Color;
use crate::error::GridError;

/// Square matrix of cell colors.
///
/// Stored row-major in one buffer. `Clone` is a deep copy, so a cloned
/// grid never shares storage with its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    size: usize,
    cells: Vec<Color>,
}

impl PixelGrid {
    /// All-transparent grid of `size x size` cells.
    pub fn new(size: usize) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::ZeroSize);
        }
        Ok(Self {
            size,
            cells: vec![Color::Transparent; size * size],
        })
    }

    /// Build a grid from rows; the row count sets the size and every row
    /// must have exactly that many cells.
    pub fn from_rows(rows: Vec<Vec<Color>>) -> Result<Self, GridError> {
        let size = rows.len();
        if size == 0 {
            return Err(GridError::ZeroSize);
        }
        let mut cells = Vec::with_capacity(size * size);
        for (row, data) in rows.into_iter().enumerate() {
            if data.len() != size {
                return Err(GridError::NotSquare {
                    row,
                    len: data.len(),
                    size,
                });
            }
            cells.extend(data);
        }
        Ok(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major cell slice.
    pub fn cells(&self) -> &[Color] {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Color, GridError> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx])
    }

    pub fn set(&mut self, row: usize, col: usize, color: Color) -> Result<(), GridError> {
        let idx = self.index(row, col)?;
        self.cells[idx] = color;
        Ok(())
    }

    /// Whether a signed coordinate lies inside the grid.
    pub fn contains(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.size && (col as usize) < self.size
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.cells.chunks_exact(self.size)
    }

    pub fn to_rows(&self) -> Vec<Vec<Color>> {
        self.rows().map(<[Color]>::to_vec).collect()
    }

    pub fn opaque_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_opaque()).count()
    }

    /// Number of distinct opaque colors.
    pub fn distinct_colors(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| c.is_opaque())
            .collect::<HashSet<_>>()
            .len()
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row >= self.size || col >= self.size {
            return Err(GridError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        Ok(row * self.size + col)
    }
}

impl TryFrom<ReducedImage> for PixelGrid {
    type Error = GridError;

    fn try_from(image: ReducedImage) -> Result<Self, Self::Error> {
        let size = image.size();
        if size == 0 {
            return Err(GridError::ZeroSize);
        }
        let cells: Vec<Color> = image.into_cells().into_iter().map(Color::from).collect();
        if size.checked_mul(size) != Some(cells.len()) {
            return Err(GridError::CellCount {
                len: cells.len(),
                size,
            });
        }
        Ok(Self { size, cells })
    }
}
