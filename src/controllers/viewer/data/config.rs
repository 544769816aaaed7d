use crate::core::fractals::fractal_kinds::FractalKind;

pub const DEFAULT_DISPLAY_SIZE: u32 = 600;
pub const DEFAULT_ZOOM_SCALE: f64 = 0.5;

/// Fixed per-session settings supplied by the UI shell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerConfig {
    /// Width and height of the square display, in pixels.
    pub display_size: u32,
    /// Factor applied to the view extents on every click.
    pub zoom_scale: f64,
    /// Variant shown at startup.
    pub initial_kind: FractalKind,
    /// Row workers; `None` lets rayon pick one per core.
    pub worker_threads: Option<usize>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            display_size: DEFAULT_DISPLAY_SIZE,
            zoom_scale: DEFAULT_ZOOM_SCALE,
            initial_kind: FractalKind::default(),
            worker_threads: None,
        }
    }
}
