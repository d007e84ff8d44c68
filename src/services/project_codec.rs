use std::path::{Path, PathBuf};

use crate::error::ProjectError;
use crate::models::{PixelGrid, ProjectFile};

/// Serialize `grid` as a project JSON document stamped with the current time.
pub fn encode(grid: &PixelGrid) -> Result<Vec<u8>, ProjectError> {
    let timestamp = chrono::Utc::now().timestamp_millis();
    encode_file(&ProjectFile::from_grid(grid, Some(timestamp)))
}

pub fn encode_file(project: &ProjectFile) -> Result<Vec<u8>, ProjectError> {
    serde_json::to_vec_pretty(project).map_err(|e| ProjectError::MalformedProject(e.to_string()))
}

/// Parse a project document.
///
/// Either the whole grid is returned or an error; nothing is built
/// from a partially valid document.
pub fn decode(bytes: &[u8]) -> Result<PixelGrid, ProjectError> {
    let project: ProjectFile =
        serde_json::from_slice(bytes).map_err(|e| ProjectError::MalformedProject(e.to_string()))?;
    decode_file(project)
}

pub fn decode_file(project: ProjectFile) -> Result<PixelGrid, ProjectError> {
    if project.pixels.len() != project.grid_size {
        return Err(ProjectError::MalformedProject(format!(
            "gridSize {} but {} rows",
            project.grid_size,
            project.pixels.len()
        )));
    }
    PixelGrid::from_rows(project.pixels).map_err(|e| ProjectError::MalformedProject(e.to_string()))
}

/// Write a project file atomically (temp file + rename).
///
/// The temp file is the target name plus `.tmp`, so `art.json` stages
/// through `art.json.tmp` and never touches a sibling `art.tmp`.
pub fn save_project(path: &Path, grid: &PixelGrid) -> Result<(), ProjectError> {
    let bytes = encode(grid)?;
    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp = PathBuf::from(tmp_name);
    std::fs::write(&tmp, &bytes)?;
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e.into());
    }
    tracing::info!(path = %path.display(), size = grid.size(), "Saved project");
    Ok(())
}

pub fn load_project(path: &Path) -> Result<PixelGrid, ProjectError> {
    let bytes = std::fs::read(path)?;
    let grid = decode(&bytes)?;
    tracing::info!(path = %path.display(), size = grid.size(), "Loaded project");
    Ok(grid)
}
