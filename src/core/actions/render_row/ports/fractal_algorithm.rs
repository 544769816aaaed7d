use crate::core::data::point::Point;

/// Per-pixel computation over a square viewport of `display_size` pixels.
pub trait FractalAlgorithm {
    type Success;

    fn compute(&self, pixel: Point) -> Self::Success;

    fn display_size(&self) -> u32;
}
