use std::io::Cursor;

use pixel_reduce::{Bitmap, PixelReducer, ReduceError, ReductionParameters};

use crate::error::{DecodeError, EditorError};
use crate::models::PixelGrid;

/// Turns encoded image bytes into an RGBA bitmap.
pub trait BitmapDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<Bitmap, DecodeError>;
}

/// PNG decoder; every color type is normalized to 8-bit RGBA.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngDecoder;

impl BitmapDecoder for PngDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<Bitmap, DecodeError> {
        let mut decoder = png::Decoder::new(Cursor::new(bytes));
        decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
        let mut reader = decoder
            .read_info()
            .map_err(|e| DecodeError::Unsupported(e.to_string()))?;

        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader
            .next_frame(&mut buf)
            .map_err(|e| DecodeError::Unsupported(e.to_string()))?;
        buf.truncate(info.buffer_size());

        if info.bit_depth != png::BitDepth::Eight {
            return Err(DecodeError::Unsupported(format!(
                "bit depth {:?} after expansion",
                info.bit_depth
            )));
        }

        let rgba = match info.color_type {
            png::ColorType::Rgba => buf,
            png::ColorType::Rgb => buf
                .chunks_exact(3)
                .flat_map(|px| [px[0], px[1], px[2], 255])
                .collect(),
            png::ColorType::GrayscaleAlpha => buf
                .chunks_exact(2)
                .flat_map(|px| [px[0], px[0], px[0], px[1]])
                .collect(),
            png::ColorType::Grayscale => buf.iter().flat_map(|&v| [v, v, v, 255]).collect(),
            png::ColorType::Indexed => {
                return Err(DecodeError::Unsupported(
                    "indexed color was not expanded".to_string(),
                ))
            }
        };

        Bitmap::from_rgba8(info.width as usize, info.height as usize, &rgba)
            .map_err(|e| DecodeError::Unsupported(e.to_string()))
    }
}

/// Decode PNG bytes into a bitmap.
pub fn decode_bitmap(bytes: &[u8]) -> Result<Bitmap, DecodeError> {
    PngDecoder.decode(bytes)
}

/// Run the reduction pipeline and wrap the result as a grid.
pub fn reduce_to_grid(
    bitmap: &Bitmap,
    params: &ReductionParameters,
) -> Result<PixelGrid, EditorError> {
    let reducer = PixelReducer::new(params.clone())?;
    let image = reducer.reduce(bitmap)?;
    tracing::info!(
        source_width = bitmap.width(),
        source_height = bitmap.height(),
        size = image.size(),
        mode = %params.mode,
        colors = image.distinct_colors(),
        "Reduced image"
    );
    Ok(PixelGrid::try_from(image)?)
}

/// Decode `bytes` with `decoder` and reduce the result.
pub fn convert_image(
    decoder: &dyn BitmapDecoder,
    bytes: &[u8],
    params: &ReductionParameters,
) -> Result<PixelGrid, EditorError> {
    // Reject bad parameters before spending time on decoding
    params.validate().map_err(ReduceError::from)?;
    let bitmap = decoder.decode(bytes)?;
    reduce_to_grid(&bitmap, params)
}
