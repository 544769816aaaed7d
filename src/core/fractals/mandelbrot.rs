//! The Mandelbrot set: z' = z² + c.

use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use crate::core::fractals::escape_time::escape_time;

pub const DISPLAY_NAME: &str = "Mandelbrot";

pub fn initial_range() -> Result<ComplexRect, ComplexRectError> {
    ComplexRect::new(-2.0, -1.5, 3.0, 3.0)
}

#[inline]
pub fn step(z: Complex, c: Complex) -> Complex {
    z * z + c
}

#[must_use]
pub fn iterate(c: Complex) -> u32 {
    escape_time(c, step)
}
