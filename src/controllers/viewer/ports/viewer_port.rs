use crate::controllers::viewer::errors::viewer::ViewerError;

/// Callbacks into the UI shell. Called from worker threads.
pub trait ViewerPort: Send + Sync {
    /// Enables or disables the interactive controls (selector, reset, save, clicks).
    fn set_controls_enabled(&self, enabled: bool);

    /// The given row of the pixel buffer changed and should be redrawn.
    fn repaint_row(&self, row: u32);

    /// A non-fatal problem the user should hear about.
    fn report_error(&self, error: &ViewerError);
}
