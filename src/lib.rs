//! Pixcel - pixel-art grid editor engine
//!
//! Grid editing with undo/redo, flood fill and brush stamps, photo to
//! pixel-grid conversion (via the `pixel-reduce` crate), project files
//! and PNG export. This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
