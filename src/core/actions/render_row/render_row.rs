use crate::core::actions::render_row::ports::colour_map::ColourMap;
use crate::core::actions::render_row::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::colour::Colour;
use crate::core::data::point::Point;

/// Computes the colours of one full row, left to right.
pub fn render_row<Alg, CMap>(row: u32, algorithm: &Alg, colour_map: &CMap) -> Vec<Colour>
where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Success>,
{
    let y = row as i32;

    (0..algorithm.display_size() as i32)
        .map(|x| colour_map.map(algorithm.compute(Point { x, y })))
        .collect()
}
