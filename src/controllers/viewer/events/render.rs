use std::time::Duration;

/// Progress notifications sent from row workers to the control thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderEvent {
    /// One row has been written into the pixel buffer.
    RowCompleted { generation: u64, row: u32 },
    /// The last outstanding row of the render has been written.
    FrameCompleted {
        generation: u64,
        render_duration: Duration,
    },
}

