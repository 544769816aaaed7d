use crate::core::data::complex::Complex;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ComplexRectError {
    #[error("complex rect size must be positive and finite: {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
    #[error("complex rect origin must be finite: ({x}, {y})")]
    InvalidOrigin { x: f64, y: f64 },
}

/// A view rectangle on the complex plane.
///
/// `x` and `y` are the real and imaginary coordinates of the corner that maps
/// to pixel (0, 0); `width` and `height` extend along the positive axes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl ComplexRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<Self, ComplexRectError> {
        // NaN fails both comparisons, so it is rejected here too
        if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        if !x.is_finite() || !y.is_finite() {
            return Err(ComplexRectError::InvalidOrigin { x, y });
        }

        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn top_left(&self) -> Complex {
        Complex {
            real: self.x,
            imag: self.y,
        }
    }

    #[must_use]
    pub fn bottom_right(&self) -> Complex {
        Complex {
            real: self.x + self.width,
            imag: self.y + self.height,
        }
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex {
            real: self.x + self.width / 2.0,
            imag: self.y + self.height / 2.0,
        }
    }

    /// Scales the extents by `scale` and centres the result on `target`.
    pub fn recenter_and_zoom(&self, target: Complex, scale: f64) -> Result<Self, ComplexRectError> {
        let width = self.width * scale;
        let height = self.height * scale;

        Self::new(
            target.real - width / 2.0,
            target.imag - height / 2.0,
            width,
            height,
        )
    }
}
