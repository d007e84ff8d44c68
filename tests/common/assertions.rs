//! Assertion helpers for tests.

use pixcel::models::{Color, PixelGrid};
use pretty_assertions::assert_eq;

/// Assert every cell of `grid` equals `color`
pub fn assert_uniform(grid: &PixelGrid, color: Color) {
    for (i, cell) in grid.cells().iter().enumerate() {
        assert_eq!(
            *cell,
            color,
            "cell ({}, {}) differs",
            i / grid.size(),
            i % grid.size()
        );
    }
}

/// Assert `bytes` start with the PNG signature
pub fn assert_png(bytes: &[u8]) {
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}

/// Number of cells that differ between two grids of equal size
pub fn diff_count(a: &PixelGrid, b: &PixelGrid) -> usize {
    assert_eq!(a.size(), b.size(), "grid sizes differ");
    a.cells()
        .iter()
        .zip(b.cells())
        .filter(|(x, y)| x != y)
        .count()
}
