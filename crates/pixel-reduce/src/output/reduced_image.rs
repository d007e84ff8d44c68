//! ReducedImage: the quantized square grid produced by the pipeline.

/// The output of [`reduce`](crate::reduce).
///
/// A square, row-major grid of cells; `None` is a transparent cell and
/// `Some([r, g, b])` an opaque one whose color is a palette entry.
///
/// # Example
///
/// ```
/// use pixel_reduce::{reduce, Bitmap, ReductionParameters, Rgba};
///
/// let source = Bitmap::filled(64, 64, Rgba::opaque(200, 40, 40));
/// let image = reduce(&source, &ReductionParameters::default().target_size(16)).unwrap();
///
/// assert_eq!(image.size(), 16);
/// assert_eq!(image.get(0, 0), Some(Some([200, 40, 40])));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReducedImage {
    size: usize,
    cells: Vec<Option<[u8; 3]>>,
}

impl ReducedImage {
    /// Wrap quantized cells.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `cells.len() == size * size`.
    pub fn new(size: usize, cells: Vec<Option<[u8; 3]>>) -> Self {
        debug_assert_eq!(
            cells.len(),
            size * size,
            "cells length ({}) must match size² ({}x{})",
            cells.len(),
            size,
            size
        );
        Self { size, cells }
    }

    /// Side length of the grid.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Option<[u8; 3]>] {
        &self.cells
    }

    /// Consume the image, returning its cells.
    pub fn into_cells(self) -> Vec<Option<[u8; 3]>> {
        self.cells
    }

    /// Cell at `(row, col)`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Option<[u8; 3]>> {
        if row < self.size && col < self.size {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<[u8; 3]>]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Number of opaque cells.
    pub fn opaque_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Number of distinct opaque colors.
    pub fn distinct_colors(&self) -> usize {
        let mut seen: Vec<[u8; 3]> = Vec::new();
        for c in self.cells.iter().flatten() {
            if !seen.contains(c) {
                seen.push(*c);
            }
        }
        seen.len()
    }
}
