mod controllers;
mod core;
mod presenters;
mod storage;

pub use controllers::viewer::{
    DEFAULT_DISPLAY_SIZE, DEFAULT_ZOOM_SCALE, FrameReport, ImageFilePresenterPort, RenderEvent,
    RenderSession, ViewerCommand, ViewerConfig, ViewerError, ViewerPort,
};
pub use crate::core::actions::render_row::ports::colour_map::ColourMap;
pub use crate::core::actions::render_row::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::render_row::render_frame_rayon::render_frame_rayon;
pub use crate::core::actions::render_row::render_row::render_row;
pub use crate::core::colour_maps::hue_cycle_gradient::HueCycleGradient;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::fractals::escape_time::MAX_ITERATIONS;
pub use crate::core::fractals::escape_time_algorithm::{
    EscapeTimeAlgorithm, EscapeTimeAlgorithmError,
};
pub use crate::core::fractals::fractal_kinds::{FractalKind, UnknownFractalKind};
pub use crate::core::util::hsb_to_rgb::hsb_to_rgb;
pub use crate::core::util::map_coord::{map_coord, pixel_to_complex_coords};
pub use presenters::file::png::PngFilePresenter;
pub use presenters::logging::logging_viewer_port::LoggingViewerPort;
