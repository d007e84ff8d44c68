//! Error types for palette construction

use std::fmt;

/// Error type for palette construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// No opaque pixels to sample colors from
    NoOpaquePixels,
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::NoOpaquePixels => write!(f, "no opaque pixels to sample a palette from"),
        }
    }
}

impl std::error::Error for PaletteError {}
