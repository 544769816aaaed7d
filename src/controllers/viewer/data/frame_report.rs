use std::time::Duration;

/// Summary of a finished full render, as observed by the control thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    pub generation: u64,
    pub rows_completed: u32,
    pub render_duration: Duration,
}
