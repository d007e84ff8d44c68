use std::io::Cursor;
use std::ops::RangeInclusive;
use std::path::Path;

use crate::error::ExportError;
use crate::models::PixelGrid;

/// Allowed pixels-per-cell for export.
pub const SCALE_RANGE: RangeInclusive<u32> = 1..=64;

/// Renders a grid to an RGBA PNG, one solid `scale x scale` block per cell.
///
/// Transparent cells stay fully transparent. This is a one-way projection;
/// the PNG cannot be read back as a grid.
#[derive(Debug, Clone, Copy)]
pub struct PngExporter {
    scale: u32,
    optimize: bool,
}

impl PngExporter {
    pub fn new(scale: u32) -> Result<Self, ExportError> {
        if !SCALE_RANGE.contains(&scale) {
            return Err(ExportError::InvalidScale(scale));
        }
        Ok(Self {
            scale,
            optimize: false,
        })
    }

    /// Re-compress the output with oxipng.
    pub fn optimize(mut self, optimize: bool) -> Self {
        self.optimize = optimize;
        self
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn render(&self, grid: &PixelGrid) -> Result<Vec<u8>, ExportError> {
        let side = grid.size() as u32 * self.scale;
        let rgba = self.rasterize(grid);

        let png_bytes = encode_rgba(side, &rgba, self.optimize)?;
        if !self.optimize {
            return Ok(png_bytes);
        }

        // Re-compress with oxipng (zopfli + adaptive filter selection)
        let optimized = oxipng::optimize_from_memory(
            &png_bytes,
            &oxipng::Options {
                strip: oxipng::StripChunks::Safe,
                optimize_alpha: false,
                ..Default::default()
            },
        )
        .unwrap_or(png_bytes);
        Ok(optimized)
    }

    pub fn save(&self, grid: &PixelGrid, path: &Path) -> Result<(), ExportError> {
        let bytes = self.render(grid)?;
        std::fs::write(path, &bytes)?;
        tracing::info!(
            path = %path.display(),
            scale = self.scale,
            bytes = bytes.len(),
            "Exported PNG"
        );
        Ok(())
    }

    /// Expand cells into a row-major RGBA8 buffer.
    fn rasterize(&self, grid: &PixelGrid) -> Vec<u8> {
        let scale = self.scale as usize;
        let mut rgba = Vec::with_capacity(grid.cells().len() * scale * scale * 4);
        for row in grid.rows() {
            let mut line = Vec::with_capacity(row.len() * scale * 4);
            for cell in row {
                let px = cell.to_rgba8();
                for _ in 0..scale {
                    line.extend_from_slice(&px);
                }
            }
            for _ in 0..scale {
                rgba.extend_from_slice(&line);
            }
        }
        rgba
    }
}

/// Render `grid` at `scale` pixels per cell.
pub fn export_png(grid: &PixelGrid, scale: u32) -> Result<Vec<u8>, ExportError> {
    PngExporter::new(scale)?.render(grid)
}

/// Encode a square RGBA8 image.
fn encode_rgba(side: u32, rgba: &[u8], fast: bool) -> Result<Vec<u8>, ExportError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, side, side);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        if fast {
            // oxipng will re-compress optimally
            encoder.set_compression(png::Compression::Fast);
        }
        let mut writer = encoder
            .write_header()
            .map_err(|e| ExportError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(rgba)
            .map_err(|e| ExportError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}
