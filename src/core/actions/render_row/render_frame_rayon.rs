use rayon::prelude::*;

use crate::core::actions::render_row::ports::colour_map::ColourMap;
use crate::core::actions::render_row::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::render_row::render_row::render_row;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};

/// Renders a whole frame on the global rayon pool and returns it in one piece.
///
/// This is the blocking counterpart of the progressive session render and
/// produces identical pixels.
pub fn render_frame_rayon<Alg, CMap>(
    algorithm: &Alg,
    colour_map: &CMap,
) -> Result<PixelBuffer, PixelBufferError>
where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap<Alg::Success> + Sync,
{
    let size = algorithm.display_size();

    let rows: Vec<Vec<Colour>> = (0..size)
        .into_par_iter()
        .map(|row| render_row(row, algorithm, colour_map))
        .collect();

    let mut buffer = PixelBuffer::new(size, size);
    for (row, colours) in (0..size).zip(&rows) {
        buffer.write_row(row, colours)?;
    }

    Ok(buffer)
}
