//! Project file round trips and error handling on disk.

mod common;

use common::fixtures::{self, colors};
use pixcel::error::ProjectError;
use pixcel::models::{Color, PixelGrid};
use pixcel::rendering::export_png;
use pixcel::services::{load_project, project_codec, save_project, EditSession};
use pretty_assertions::assert_eq;

#[test]
fn test_checkerboard_round_trip_structure() {
    let grid = fixtures::checkerboard();
    let bytes = project_codec::encode(&grid).unwrap();

    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        json["pixels"],
        serde_json::json!([["#000000", "#FFFFFF"], ["#FFFFFF", "#000000"]])
    );

    let decoded = project_codec::decode(&bytes).unwrap();
    assert_eq!(decoded, grid);
}

#[test]
fn test_round_trip_mixed_grid() {
    let mut grid = PixelGrid::new(16).unwrap();
    for i in 0..16 {
        grid.set(i, i, Color::Rgb(i as u8 * 16, 255 - i as u8, 7)).unwrap();
    }
    grid.set(0, 15, colors::GREEN).unwrap();

    let decoded = project_codec::decode(&project_codec::encode(&grid).unwrap()).unwrap();
    assert_eq!(decoded, grid);
}

#[test]
fn test_save_load_through_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("drawing.json");

    let mut session = EditSession::new(4).unwrap();
    session.set_color(colors::BLUE);
    session.press(1, 2).unwrap();
    session.release();
    save_project(&path, session.grid()).unwrap();

    let mut restored = EditSession::new(32).unwrap();
    restored.load_grid(load_project(&path).unwrap());
    assert_eq!(restored.grid(), session.grid());
    assert!(restored.can_undo());
}

#[test]
fn test_malformed_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, r##"{"gridSize":3,"pixels":[["#000000"]]}"##).unwrap();

    let err = load_project(&path).unwrap_err();
    assert!(matches!(err, ProjectError::MalformedProject(_)), "{err}");
}

#[test]
fn test_accepts_original_field_order() {
    let json = r##"{"pixels":[["transparent","#ff0000"],["#00FF00","transparent"]],"gridSize":2,"timestamp":1700000000000}"##;
    let grid = project_codec::decode(json.as_bytes()).unwrap();
    assert_eq!(grid.get(0, 1), Ok(colors::RED));
    assert_eq!(grid.get(1, 0), Ok(colors::GREEN));
}

#[test]
fn test_export_saved_project() {
    let bytes = export_png(&fixtures::checkerboard(), 20).unwrap();
    common::assert_png(&bytes);
}
