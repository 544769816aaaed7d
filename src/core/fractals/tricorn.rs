//! The Tricorn (Mandelbar): z' = conj(z)² + c.

use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use crate::core::fractals::escape_time::escape_time;

pub const DISPLAY_NAME: &str = "Tricorn";

pub fn initial_range() -> Result<ComplexRect, ComplexRectError> {
    ComplexRect::new(-2.0, -2.0, 4.0, 4.0)
}

#[inline]
pub fn step(z: Complex, c: Complex) -> Complex {
    let conjugate = z.conjugate();
    conjugate * conjugate + c
}

#[must_use]
pub fn iterate(c: Complex) -> u32 {
    escape_time(c, step)
}
