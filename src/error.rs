use pixel_reduce::ReduceError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("Cell ({row}, {col}) out of bounds for {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("Grid size must be at least 1")]
    ZeroSize,

    #[error("Row {row} has {len} cells, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },

    #[error("Grid of size {size} needs {size}x{size} cells, got {len}")]
    CellCount { len: usize, size: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("Nothing to undo")]
    NoOlderState,

    #[error("Nothing to redo")]
    NoNewerState,

    #[error("History has not been initialized")]
    Uninitialized,
}

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("Malformed project: {0}")]
    MalformedProject(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Unsupported image: {0}")]
    Unsupported(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Invalid export scale {0} (expected 1..=64)")]
    InvalidScale(u32),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Anything an [`EditSession`](crate::services::EditSession) can report.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    History(#[from] HistoryError),

    #[error("Reduction error: {0}")]
    Reduce(#[from] ReduceError),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Project(#[from] ProjectError),
}
