pub mod burning_ship;
pub mod escape_time;
pub mod escape_time_algorithm;
pub mod fractal_kinds;
pub mod mandelbrot;
pub mod tricorn;
