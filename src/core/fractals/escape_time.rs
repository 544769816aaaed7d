use crate::core::data::complex::Complex;
use std::ops::ControlFlow;

/// Iteration cap shared by every escape-time variant.
pub const MAX_ITERATIONS: u32 = 2000;

/// |z|² above this means the orbit has escaped (|z| > 2).
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Counts how many applications of `step` it takes for the orbit of `c`,
/// starting at z = 0, to leave the escape radius.
///
/// Returns [`MAX_ITERATIONS`] when the orbit stays bounded for the whole budget.
#[inline]
pub fn escape_time<F>(c: Complex, step: F) -> u32
where
    F: Fn(Complex, Complex) -> Complex,
{
    let outcome = (0..MAX_ITERATIONS).try_fold(Complex::ZERO, |z, iteration| {
        if z.magnitude_squared() <= ESCAPE_RADIUS_SQUARED {
            ControlFlow::Continue(step(z, c))
        } else {
            ControlFlow::Break(iteration)
        }
    });

    match outcome {
        ControlFlow::Break(iteration) => iteration,
        ControlFlow::Continue(_) => MAX_ITERATIONS,
    }
}
