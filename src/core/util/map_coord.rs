use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::point::Point;

/// Linearly maps `pixel_index` in `[0, pixel_extent)` onto `[axis_min, axis_max)`.
///
/// Indices outside that range extrapolate along the same line.
#[must_use]
pub fn map_coord(axis_min: f64, axis_max: f64, pixel_extent: u32, pixel_index: i32) -> f64 {
    axis_min + (f64::from(pixel_index) / f64::from(pixel_extent)) * (axis_max - axis_min)
}

/// Maps a pixel of a square `display_size` viewport onto `complex_rect`.
#[must_use]
pub fn pixel_to_complex_coords(pixel: Point, display_size: u32, complex_rect: ComplexRect) -> Complex {
    let top_left = complex_rect.top_left();
    let bottom_right = complex_rect.bottom_right();

    Complex {
        real: map_coord(top_left.real, bottom_right.real, display_size, pixel.x),
        imag: map_coord(top_left.imag, bottom_right.imag, display_size, pixel.y),
    }
}
