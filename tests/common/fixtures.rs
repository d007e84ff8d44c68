//! Test fixtures and constants.

use pixcel::models::{Color, PixelGrid};

/// Colors used across scenarios
pub mod colors {
    use pixcel::models::Color;

    pub const RED: Color = Color::Rgb(255, 0, 0);
    pub const GREEN: Color = Color::Rgb(0, 255, 0);
    pub const BLUE: Color = Color::Rgb(0, 0, 255);
}

/// 2x2 black/white checkerboard
pub fn checkerboard() -> PixelGrid {
    PixelGrid::from_rows(vec![
        vec![Color::BLACK, Color::WHITE],
        vec![Color::WHITE, Color::BLACK],
    ])
    .unwrap()
}

/// `size x size` grid with a one-cell `border` frame around a transparent center
pub fn framed(size: usize, border: Color) -> PixelGrid {
    let mut grid = PixelGrid::new(size).unwrap();
    for i in 0..size {
        for j in 0..size {
            if i == 0 || j == 0 || i == size - 1 || j == size - 1 {
                grid.set(i, j, border).unwrap();
            }
        }
    }
    grid
}

/// Encode RGBA8 pixels as a PNG
pub fn png_bytes(width: u32, height: u32, rgba: &[u8]) -> Vec<u8> {
    let mut buf = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(rgba).unwrap();
    }
    buf
}

/// Horizontal gradient photo: red ramps left to right, green top to bottom
pub fn gradient_png(width: u32, height: u32) -> Vec<u8> {
    let mut rgba = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            rgba.extend_from_slice(&[
                (x * 255 / (width - 1)) as u8,
                (y * 255 / (height - 1)) as u8,
                96,
                255,
            ]);
        }
    }
    png_bytes(width, height, &rgba)
}
