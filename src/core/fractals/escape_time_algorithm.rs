use thiserror::Error;

use crate::core::actions::render_row::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::point::Point;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::util::map_coord::pixel_to_complex_coords;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EscapeTimeAlgorithmError {
    #[error("display size must be greater than zero")]
    ZeroDisplaySize,
}

/// Iteration counts for one variant over one view of a square display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeTimeAlgorithm {
    kind: FractalKind,
    complex_rect: ComplexRect,
    display_size: u32,
}

impl EscapeTimeAlgorithm {
    pub fn new(
        kind: FractalKind,
        complex_rect: ComplexRect,
        display_size: u32,
    ) -> Result<Self, EscapeTimeAlgorithmError> {
        if display_size == 0 {
            return Err(EscapeTimeAlgorithmError::ZeroDisplaySize);
        }

        Ok(Self {
            kind,
            complex_rect,
            display_size,
        })
    }
}

impl FractalAlgorithm for EscapeTimeAlgorithm {
    type Success = u32;

    fn compute(&self, pixel: Point) -> Self::Success {
        let c = pixel_to_complex_coords(pixel, self.display_size, self.complex_rect);

        self.kind.iterate(c.real, c.imag)
    }

    fn display_size(&self) -> u32 {
        self.display_size
    }
}
