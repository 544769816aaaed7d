use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use crate::core::fractals::{burning_ship, mandelbrot, tricorn};
use crate::core::util::map_coord;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown fractal '{0}', expected one of: mandelbrot, tricorn, burning-ship")]
pub struct UnknownFractalKind(pub String);

/// The escape-time variants the viewer can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FractalKind {
    #[default]
    Mandelbrot,
    Tricorn,
    BurningShip,
}

impl FractalKind {
    /// Selector order.
    pub const ALL: &'static [Self] = &[Self::Mandelbrot, Self::Tricorn, Self::BurningShip];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => mandelbrot::DISPLAY_NAME,
            Self::Tricorn => tricorn::DISPLAY_NAME,
            Self::BurningShip => burning_ship::DISPLAY_NAME,
        }
    }

    /// The view shown after selecting the variant or resetting.
    pub fn initial_range(self) -> Result<ComplexRect, ComplexRectError> {
        match self {
            Self::Mandelbrot => mandelbrot::initial_range(),
            Self::Tricorn => tricorn::initial_range(),
            Self::BurningShip => burning_ship::initial_range(),
        }
    }

    /// Escape iteration count for `real + imag·i`, capped at
    /// [`MAX_ITERATIONS`](crate::core::fractals::escape_time::MAX_ITERATIONS).
    #[must_use]
    pub fn iterate(self, real: f64, imag: f64) -> u32 {
        let c = Complex { real, imag };

        match self {
            Self::Mandelbrot => mandelbrot::iterate(c),
            Self::Tricorn => tricorn::iterate(c),
            Self::BurningShip => burning_ship::iterate(c),
        }
    }

    #[must_use]
    pub fn map_coord(self, axis_min: f64, axis_max: f64, pixel_extent: u32, pixel_index: i32) -> f64 {
        map_coord::map_coord(axis_min, axis_max, pixel_extent, pixel_index)
    }

    /// Centres the view on the target and scales its extents by `scale`.
    pub fn recenter_and_zoom(
        self,
        rect: ComplexRect,
        target_real: f64,
        target_imag: f64,
        scale: f64,
    ) -> Result<ComplexRect, ComplexRectError> {
        rect.recenter_and_zoom(
            Complex {
                real: target_real,
                imag: target_imag,
            },
            scale,
        )
    }
}

impl fmt::Display for FractalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for FractalKind {
    type Err = UnknownFractalKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised: String = s
            .chars()
            .filter(|c| !matches!(*c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        match normalised.as_str() {
            "mandelbrot" => Ok(Self::Mandelbrot),
            "tricorn" => Ok(Self::Tricorn),
            "burningship" => Ok(Self::BurningShip),
            _ => Err(UnknownFractalKind(s.to_string())),
        }
    }
}
