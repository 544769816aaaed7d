//! Viewer session for progressive, row-parallel fractal rendering.
//!
//! The session owns the current variant and view rectangle, schedules one
//! task per pixel row on a worker pool and reports progress back to the UI
//! shell as rows land in the shared pixel buffer.
//!
//! # Architecture
//!
//! The session follows the ports & adapters pattern:
//! - **Input**: `ViewerCommand` values or direct calls from the UI shell
//! - **Output**: `ViewerPort` for repaints and control state, `ImageFilePresenterPort` for exports
//! - **Core**: Uses the escape-time algorithms and colour maps from `core/`

mod commands;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;
mod session;

pub use commands::ViewerCommand;
pub use data::config::{DEFAULT_DISPLAY_SIZE, DEFAULT_ZOOM_SCALE, ViewerConfig};
pub use data::frame_report::FrameReport;
pub use errors::viewer::ViewerError;
pub use events::render::RenderEvent;
pub use ports::image_file_presenter::ImageFilePresenterPort;
pub use ports::viewer_port::ViewerPort;
pub use session::RenderSession;
