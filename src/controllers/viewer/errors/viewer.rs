use thiserror::Error;

use crate::core::data::complex_rect::ComplexRectError;
use crate::core::fractals::escape_time_algorithm::EscapeTimeAlgorithmError;

#[derive(Debug, Error)]
pub enum ViewerError {
    /// The view rectangle collapsed or left the finite range.
    #[error("invalid view geometry: {0}")]
    InvalidGeometry(#[from] ComplexRectError),

    #[error("invalid display: {0}")]
    InvalidDisplay(#[from] EscapeTimeAlgorithmError),

    #[error("zoom scale must be positive and finite, got {0}")]
    InvalidZoomScale(f64),

    /// A command arrived while rows of the previous render were outstanding.
    #[error("a render is already in progress")]
    RenderInProgress,

    #[error("failed to export image: {0}")]
    Export(#[from] image::ImageError),

    #[error("failed to start render workers: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    #[error("timed out waiting for render {generation} to finish")]
    FrameTimeout { generation: u64 },
}
