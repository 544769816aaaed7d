//! The Burning Ship: z' = (|Re z| + i|Im z|)² + c.

use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use crate::core::fractals::escape_time::escape_time;

pub const DISPLAY_NAME: &str = "Burning Ship";

/// The customary window with the ship's hull in view (imaginary axis grows
/// downwards on screen).
pub fn initial_range() -> Result<ComplexRect, ComplexRectError> {
    ComplexRect::new(-2.0, -2.5, 4.0, 4.0)
}

#[inline]
pub fn step(z: Complex, c: Complex) -> Complex {
    let folded = z.abs_parts();
    folded * folded + c
}

#[must_use]
pub fn iterate(c: Complex) -> u32 {
    escape_time(c, step)
}
