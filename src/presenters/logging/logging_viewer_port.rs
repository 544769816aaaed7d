use std::sync::atomic::{AtomicU32, Ordering};

use log::{debug, error, info};

use crate::controllers::viewer::errors::viewer::ViewerError;
use crate::controllers::viewer::ports::viewer_port::ViewerPort;

/// Headless stand-in for a window: logs what a UI would display.
#[derive(Debug, Default)]
pub struct LoggingViewerPort {
    rows_repainted: AtomicU32,
}

impl LoggingViewerPort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows repainted since the controls were last disabled.
    pub fn rows_repainted(&self) -> u32 {
        self.rows_repainted.load(Ordering::Relaxed)
    }
}

impl ViewerPort for LoggingViewerPort {
    fn set_controls_enabled(&self, enabled: bool) {
        if enabled {
            info!("controls enabled after {} rows", self.rows_repainted());
        } else {
            self.rows_repainted.store(0, Ordering::Relaxed);
            info!("controls disabled");
        }
    }

    fn repaint_row(&self, row: u32) {
        self.rows_repainted.fetch_add(1, Ordering::Relaxed);
        debug!("repaint row {row}");
    }

    fn report_error(&self, error: &ViewerError) {
        error!("{error}");
    }
}
