use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender, unbounded};
use image::RgbImage;
use log::{debug, error, info, warn};
use parking_lot::{RwLock, RwLockReadGuard};
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::controllers::viewer::commands::ViewerCommand;
use crate::controllers::viewer::data::config::ViewerConfig;
use crate::controllers::viewer::data::frame_report::FrameReport;
use crate::controllers::viewer::errors::viewer::ViewerError;
use crate::controllers::viewer::events::render::RenderEvent;
use crate::controllers::viewer::ports::image_file_presenter::ImageFilePresenterPort;
use crate::controllers::viewer::ports::viewer_port::ViewerPort;
use crate::core::actions::render_row::render_row::render_row;
use crate::core::colour_maps::hue_cycle_gradient::HueCycleGradient;
use crate::core::data::colour::Colour;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use crate::core::fractals::escape_time::MAX_ITERATIONS;
use crate::core::fractals::escape_time_algorithm::{EscapeTimeAlgorithm, EscapeTimeAlgorithmError};
use crate::core::fractals::fractal_kinds::FractalKind;

/// State touched by row workers.
struct SharedState {
    pixel_buffer: RwLock<PixelBuffer>,
    rows_remaining: AtomicU32,
    // stays set until the finishing row has re-enabled the controls
    busy: AtomicBool,
    viewer_port: Arc<dyn ViewerPort>,
    events: Sender<RenderEvent>,
}

impl SharedState {
    fn complete_row(&self, generation: u64, row: u32, colours: &[Colour], started: Instant) {
        let written = self.pixel_buffer.write().write_row(row, colours);

        match written {
            Ok(()) => self.viewer_port.repaint_row(row),
            Err(err) => error!("render {generation}: dropping row {row}: {err}"),
        }

        let _ = self.events.send(RenderEvent::RowCompleted { generation, row });

        let previous = self
            .rows_remaining
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |remaining| {
                remaining.checked_sub(1)
            });

        match previous {
            Ok(1) => self.finish_frame(generation, started),
            Ok(_) => {}
            Err(_) => warn!("render {generation}: row {row} finished with no rows outstanding"),
        }
    }

    fn finish_frame(&self, generation: u64, started: Instant) {
        let render_duration = started.elapsed();
        info!("render {generation} finished in {render_duration:?}");

        self.viewer_port.set_controls_enabled(true);
        self.busy.store(false, Ordering::Release);

        let _ = self.events.send(RenderEvent::FrameCompleted {
            generation,
            render_duration,
        });
    }
}

/// One viewer: the current variant and view, the pixel buffer and the row
/// workers that fill it.
///
/// Every mutating operation is refused with [`ViewerError::RenderInProgress`]
/// while rows of the previous render are outstanding. [`RenderSession::dispatch`]
/// turns that refusal into a silent no-op.
pub struct RenderSession {
    config: ViewerConfig,
    kind: FractalKind,
    rect: ComplexRect,
    generation: u64,
    shared: Arc<SharedState>,
    events: Receiver<RenderEvent>,
    pool: ThreadPool,
    image_presenter: Arc<dyn ImageFilePresenterPort>,
}

impl RenderSession {
    pub fn new(
        config: ViewerConfig,
        viewer_port: Arc<dyn ViewerPort>,
        image_presenter: Arc<dyn ImageFilePresenterPort>,
    ) -> Result<Self, ViewerError> {
        if config.display_size == 0 {
            return Err(EscapeTimeAlgorithmError::ZeroDisplaySize.into());
        }

        if !(config.zoom_scale > 0.0 && config.zoom_scale.is_finite()) {
            return Err(ViewerError::InvalidZoomScale(config.zoom_scale));
        }

        let rect = config.initial_kind.initial_range()?;

        let mut builder =
            ThreadPoolBuilder::new().thread_name(|index| format!("row-worker-{index}"));
        if let Some(threads) = config.worker_threads {
            builder = builder.num_threads(threads);
        }
        let pool = builder.build()?;

        let (sender, events) = unbounded();

        let shared = Arc::new(SharedState {
            pixel_buffer: RwLock::new(PixelBuffer::new(config.display_size, config.display_size)),
            rows_remaining: AtomicU32::new(0),
            busy: AtomicBool::new(false),
            viewer_port,
            events: sender,
        });

        debug!(
            "session ready: {} at {}px, {} workers",
            config.initial_kind,
            config.display_size,
            pool.current_num_threads()
        );

        Ok(Self {
            config,
            kind: config.initial_kind,
            rect,
            generation: 0,
            shared,
            events,
            pool,
            image_presenter,
        })
    }

    #[must_use]
    pub fn config(&self) -> ViewerConfig {
        self.config
    }

    #[must_use]
    pub fn kind(&self) -> FractalKind {
        self.kind
    }

    #[must_use]
    pub fn rect(&self) -> ComplexRect {
        self.rect
    }

    /// Id of the most recently started render, 0 before the first one.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn rows_remaining(&self) -> u32 {
        self.shared.rows_remaining.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn is_rendering(&self) -> bool {
        self.shared.busy.load(Ordering::Acquire)
    }

    /// Read access for the paint path. Rows may still be landing.
    pub fn pixel_buffer(&self) -> RwLockReadGuard<'_, PixelBuffer> {
        self.shared.pixel_buffer.read()
    }

    /// Row and frame completions, in the order workers reported them.
    ///
    /// Events nobody has read are dropped when the next render starts.
    #[must_use]
    pub fn events(&self) -> &Receiver<RenderEvent> {
        &self.events
    }

    pub fn dispatch(&mut self, command: ViewerCommand) -> Result<(), ViewerError> {
        let result = match &command {
            ViewerCommand::SelectVariant(kind) => self.set_variant(*kind).map(|_| ()),
            ViewerCommand::Reset => self.reset_view().map(|_| ()),
            ViewerCommand::Click(pixel) => self.on_click(*pixel).map(|_| ()),
            ViewerCommand::Save(path) => self.save_image(path),
        };

        match result {
            Err(ViewerError::RenderInProgress) => {
                debug!("ignoring {command:?}: render {} still running", self.generation);
                Ok(())
            }
            other => other,
        }
    }

    /// Switches variant, restores its initial view and redraws from black.
    pub fn set_variant(&mut self, kind: FractalKind) -> Result<u64, ViewerError> {
        self.ensure_idle()?;

        let rect = kind.initial_range().map_err(|err| self.report(err.into()))?;

        info!("switching to {kind}");
        self.kind = kind;
        self.rect = rect;
        self.shared.pixel_buffer.write().clear();

        self.render_full()
    }

    pub fn reset_view(&mut self) -> Result<u64, ViewerError> {
        self.ensure_idle()?;

        self.rect = self
            .kind
            .initial_range()
            .map_err(|err| self.report(err.into()))?;

        self.render_full()
    }

    /// Recentres the view on `pixel`, zooms by the configured scale and redraws.
    pub fn on_click(&mut self, pixel: Point) -> Result<u64, ViewerError> {
        self.ensure_idle()?;

        let size = self.config.display_size;
        let rect = self.rect;
        let target_real = self
            .kind
            .map_coord(rect.x(), rect.x() + rect.width(), size, pixel.x);
        let target_imag = self
            .kind
            .map_coord(rect.y(), rect.y() + rect.height(), size, pixel.y);

        let zoomed = self
            .kind
            .recenter_and_zoom(rect, target_real, target_imag, self.config.zoom_scale)
            .map_err(|err| self.report(err.into()))?;

        debug!(
            "click at ({}, {}) -> centre {target_real} {target_imag}i, width {}",
            pixel.x,
            pixel.y,
            zoomed.width()
        );
        self.rect = zoomed;

        self.render_full()
    }

    /// Starts a progressive render of the current view and returns its
    /// generation id without waiting for any row.
    pub fn render_full(&mut self) -> Result<u64, ViewerError> {
        self.ensure_idle()?;

        let algorithm = EscapeTimeAlgorithm::new(self.kind, self.rect, self.config.display_size)
            .map_err(|err| self.report(err.into()))?;
        let colour_map = HueCycleGradient::new(MAX_ITERATIONS);
        let rows = self.config.display_size;

        let stale = self.discard_stale_events();
        if stale > 0 {
            debug!("discarded {stale} unread events from earlier renders");
        }

        self.generation += 1;
        let generation = self.generation;

        self.shared.busy.store(true, Ordering::Release);
        self.shared.viewer_port.set_controls_enabled(false);
        self.shared.rows_remaining.store(rows, Ordering::Release);

        info!(
            "render {generation}: {} over {:?}, {rows} rows",
            self.kind, self.rect
        );
        let started = Instant::now();

        for row in 0..rows {
            let shared = Arc::clone(&self.shared);

            self.pool.spawn(move || {
                let colours = render_row(row, &algorithm, &colour_map);
                shared.complete_row(generation, row, &colours, started);
            });
        }

        Ok(generation)
    }

    /// Copies the pixel buffer as it is right now.
    #[must_use]
    pub fn export_image(&self) -> RgbImage {
        self.shared.pixel_buffer.read().snapshot()
    }

    /// Writes the current image through the image presenter. Failures are
    /// reported to the UI and leave the view untouched.
    pub fn save_image(&self, filepath: &Path) -> Result<(), ViewerError> {
        self.ensure_idle()?;

        let image = self.export_image();
        self.image_presenter
            .present(&image, filepath)
            .map_err(|err| self.report(err.into()))?;

        info!("saved {}", filepath.display());
        Ok(())
    }

    /// Blocks until the latest render reports completion, draining the event
    /// channel on the way.
    pub fn wait_for_frame(&self, timeout: Duration) -> Result<FrameReport, ViewerError> {
        let deadline = Instant::now() + timeout;
        let mut rows_completed = 0;

        loop {
            match self.events.recv_deadline(deadline) {
                Ok(RenderEvent::RowCompleted { generation, .. }) if generation == self.generation => {
                    rows_completed += 1;
                }
                Ok(RenderEvent::FrameCompleted {
                    generation,
                    render_duration,
                }) if generation == self.generation => {
                    return Ok(FrameReport {
                        generation,
                        rows_completed,
                        render_duration,
                    });
                }
                Ok(_) => {}
                Err(_) => {
                    return Err(ViewerError::FrameTimeout {
                        generation: self.generation,
                    });
                }
            }
        }
    }

    // Shells driven only through the port never read the channel.
    fn discard_stale_events(&self) -> usize {
        self.events.try_iter().count()
    }

    fn ensure_idle(&self) -> Result<(), ViewerError> {
        if self.is_rendering() {
            return Err(ViewerError::RenderInProgress);
        }

        Ok(())
    }

    fn report(&self, error: ViewerError) -> ViewerError {
        error!("{error}");
        self.shared.viewer_port.report_error(&error);
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::render_row::render_frame_rayon::render_frame_rayon;
    use crossbeam_channel::bounded;
    use image::ImageError;
    use parking_lot::Mutex;
    use std::path::PathBuf;

    const TIMEOUT: Duration = Duration::from_secs(30);

    #[derive(Default)]
    struct MockViewerPort {
        controls: Mutex<Vec<bool>>,
        repainted_rows: Mutex<Vec<u32>>,
        errors: Mutex<Vec<String>>,
        // when set, every repaint blocks until the sender side is dropped
        gate: Option<Receiver<()>>,
    }

    impl MockViewerPort {
        fn gated(gate: Receiver<()>) -> Self {
            Self {
                gate: Some(gate),
                ..Self::default()
            }
        }
    }

    impl ViewerPort for MockViewerPort {
        fn set_controls_enabled(&self, enabled: bool) {
            self.controls.lock().push(enabled);
        }

        fn repaint_row(&self, row: u32) {
            if let Some(gate) = &self.gate {
                let _ = gate.recv();
            }
            self.repainted_rows.lock().push(row);
        }

        fn report_error(&self, error: &ViewerError) {
            self.errors.lock().push(error.to_string());
        }
    }

    #[derive(Default)]
    struct MockImagePresenter {
        fail: bool,
        saved: Mutex<Vec<PathBuf>>,
    }

    impl ImageFilePresenterPort for MockImagePresenter {
        fn present(&self, _: &RgbImage, filepath: &Path) -> Result<(), ImageError> {
            if self.fail {
                return Err(ImageError::IoError(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "read-only",
                )));
            }

            self.saved.lock().push(filepath.to_path_buf());
            Ok(())
        }
    }

    fn small_config(display_size: u32) -> ViewerConfig {
        ViewerConfig {
            display_size,
            worker_threads: Some(2),
            ..ViewerConfig::default()
        }
    }

    fn create_session(
        config: ViewerConfig,
        port: &Arc<MockViewerPort>,
        presenter: &Arc<MockImagePresenter>,
    ) -> RenderSession {
        RenderSession::new(
            config,
            Arc::clone(port) as Arc<dyn ViewerPort>,
            Arc::clone(presenter) as Arc<dyn ImageFilePresenterPort>,
        )
        .unwrap()
    }

    #[test]
    fn test_new_session_is_idle_on_initial_view() {
        let port = Arc::new(MockViewerPort::default());
        let presenter = Arc::new(MockImagePresenter::default());
        let session = create_session(small_config(8), &port, &presenter);

        assert_eq!(session.kind(), FractalKind::Mandelbrot);
        assert_eq!(session.rect(), FractalKind::Mandelbrot.initial_range().unwrap());
        assert_eq!(session.generation(), 0);
        assert_eq!(session.rows_remaining(), 0);
        assert!(!session.is_rendering());
        assert!(session.pixel_buffer().buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let port: Arc<dyn ViewerPort> = Arc::new(MockViewerPort::default());
        let presenter: Arc<dyn ImageFilePresenterPort> = Arc::new(MockImagePresenter::default());

        let zero_size = RenderSession::new(small_config(0), Arc::clone(&port), Arc::clone(&presenter));
        assert!(matches!(zero_size, Err(ViewerError::InvalidDisplay(_))));

        for zoom_scale in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            let config = ViewerConfig {
                zoom_scale,
                ..small_config(8)
            };
            let result = RenderSession::new(config, Arc::clone(&port), Arc::clone(&presenter));
            assert!(matches!(result, Err(ViewerError::InvalidZoomScale(_))));
        }
    }

    #[test]
    fn test_render_full_completes_every_row_once() {
        let port = Arc::new(MockViewerPort::default());
        let presenter = Arc::new(MockImagePresenter::default());
        let mut session = create_session(small_config(32), &port, &presenter);

        let generation = session.render_full().unwrap();
        let report = session.wait_for_frame(TIMEOUT).unwrap();

        assert_eq!(report.generation, generation);
        assert_eq!(report.rows_completed, 32);
        assert_eq!(session.rows_remaining(), 0);
        assert!(!session.is_rendering());

        let mut rows = port.repainted_rows.lock().clone();
        rows.sort_unstable();
        assert_eq!(rows, (0..32).collect::<Vec<u32>>());
        assert_eq!(*port.controls.lock(), vec![false, true]);
    }

    #[test]
    fn test_progressive_render_matches_blocking_render() {
        let port = Arc::new(MockViewerPort::default());
        let presenter = Arc::new(MockImagePresenter::default());
        let mut session = create_session(small_config(24), &port, &presenter);

        session.render_full().unwrap();
        session.wait_for_frame(TIMEOUT).unwrap();

        let algorithm = EscapeTimeAlgorithm::new(session.kind(), session.rect(), 24).unwrap();
        let expected =
            render_frame_rayon(&algorithm, &HueCycleGradient::new(MAX_ITERATIONS)).unwrap();

        assert_eq!(*session.pixel_buffer(), expected);
        assert_eq!(session.export_image().into_raw(), *expected.buffer());
    }

    #[test]
    fn test_generations_increase_per_render() {
        let port = Arc::new(MockViewerPort::default());
        let presenter = Arc::new(MockImagePresenter::default());
        let mut session = create_session(small_config(4), &port, &presenter);

        let first = session.render_full().unwrap();
        session.wait_for_frame(TIMEOUT).unwrap();
        let second = session.render_full().unwrap();
        session.wait_for_frame(TIMEOUT).unwrap();

        assert_eq!((first, second), (1, 2));
    }

    #[test]
    fn test_commands_are_ignored_while_rendering() {
        let (release, gate) = bounded::<()>(0);
        let port = Arc::new(MockViewerPort::gated(gate));
        let presenter = Arc::new(MockImagePresenter::default());
        let config = ViewerConfig {
            worker_threads: Some(1),
            ..small_config(6)
        };
        let mut session = create_session(config, &port, &presenter);

        let generation = session.render_full().unwrap();
        let rect = session.rect();

        assert!(session.is_rendering());
        assert!(session.rows_remaining() > 0);
        assert!(matches!(
            session.on_click(Point { x: 1, y: 1 }),
            Err(ViewerError::RenderInProgress)
        ));
        assert!(matches!(session.render_full(), Err(ViewerError::RenderInProgress)));

        session.dispatch(ViewerCommand::Click(Point { x: 0, y: 0 })).unwrap();
        session.dispatch(ViewerCommand::SelectVariant(FractalKind::Tricorn)).unwrap();
        session.dispatch(ViewerCommand::Reset).unwrap();
        session.dispatch(ViewerCommand::Save(PathBuf::from("ignored.png"))).unwrap();

        assert_eq!(session.rect(), rect);
        assert_eq!(session.kind(), FractalKind::Mandelbrot);
        assert_eq!(session.generation(), generation);
        assert!(presenter.saved.lock().is_empty());
        assert!(port.errors.lock().is_empty());

        drop(release);
        let report = session.wait_for_frame(TIMEOUT).unwrap();

        assert_eq!(report.rows_completed, 6);
        assert!(!session.is_rendering());
    }

    #[test]
    fn test_click_recentres_and_zooms() {
        let port = Arc::new(MockViewerPort::default());
        let presenter = Arc::new(MockImagePresenter::default());
        let mut session = create_session(small_config(8), &port, &presenter);

        // pixel (6, 2) of 8 maps to -2 + 0.75 * 3 = 0.25 and -1.5 + 0.25 * 3 = -0.75
        session.on_click(Point { x: 6, y: 2 }).unwrap();
        session.wait_for_frame(TIMEOUT).unwrap();

        let rect = session.rect();
        assert_eq!(rect.width(), 1.5);
        assert_eq!(rect.height(), 1.5);
        assert_eq!(rect.x(), 0.25 - 0.75);
        assert_eq!(rect.y(), -0.75 - 0.75);
    }

    #[test]
    fn test_collapsed_view_is_reported_and_not_rendered() {
        let port = Arc::new(MockViewerPort::default());
        let presenter = Arc::new(MockImagePresenter::default());
        let config = ViewerConfig {
            zoom_scale: f64::MIN_POSITIVE,
            ..small_config(4)
        };
        let mut session = create_session(config, &port, &presenter);

        session.on_click(Point { x: 2, y: 2 }).unwrap();
        session.wait_for_frame(TIMEOUT).unwrap();
        let rect = session.rect();
        let generation = session.generation();
        let image = session.export_image();

        let result = session.on_click(Point { x: 2, y: 2 });

        assert!(matches!(result, Err(ViewerError::InvalidGeometry(_))));
        assert_eq!(session.rect(), rect);
        assert_eq!(session.generation(), generation);
        assert!(!session.is_rendering());
        assert_eq!(session.export_image(), image);
        assert_eq!(port.errors.lock().len(), 1);
    }

    #[test]
    fn test_reset_view_is_idempotent() {
        let port = Arc::new(MockViewerPort::default());
        let presenter = Arc::new(MockImagePresenter::default());
        let mut session = create_session(small_config(8), &port, &presenter);

        session.on_click(Point { x: 1, y: 7 }).unwrap();
        session.wait_for_frame(TIMEOUT).unwrap();

        session.reset_view().unwrap();
        session.wait_for_frame(TIMEOUT).unwrap();
        let once = session.rect();

        session.reset_view().unwrap();
        session.wait_for_frame(TIMEOUT).unwrap();

        assert_eq!(session.rect(), once);
        assert_eq!(once, FractalKind::Mandelbrot.initial_range().unwrap());
    }

    #[test]
    fn test_select_variant_switches_view() {
        let port = Arc::new(MockViewerPort::default());
        let presenter = Arc::new(MockImagePresenter::default());
        let mut session = create_session(small_config(16), &port, &presenter);

        session
            .dispatch(ViewerCommand::SelectVariant(FractalKind::BurningShip))
            .unwrap();
        session.wait_for_frame(TIMEOUT).unwrap();

        assert_eq!(session.kind(), FractalKind::BurningShip);
        assert_eq!(session.rect(), FractalKind::BurningShip.initial_range().unwrap());

        let algorithm = EscapeTimeAlgorithm::new(FractalKind::BurningShip, session.rect(), 16).unwrap();
        let expected =
            render_frame_rayon(&algorithm, &HueCycleGradient::new(MAX_ITERATIONS)).unwrap();
        assert_eq!(*session.pixel_buffer(), expected);
    }

    #[test]
    fn test_save_image_passes_snapshot_to_presenter() {
        let port = Arc::new(MockViewerPort::default());
        let presenter = Arc::new(MockImagePresenter::default());
        let mut session = create_session(small_config(4), &port, &presenter);

        session
            .dispatch(ViewerCommand::Save(PathBuf::from("out/frame.png")))
            .unwrap();

        assert_eq!(*presenter.saved.lock(), vec![PathBuf::from("out/frame.png")]);
    }

    #[test]
    fn test_export_failure_is_reported_and_state_kept() {
        let port = Arc::new(MockViewerPort::default());
        let presenter = Arc::new(MockImagePresenter {
            fail: true,
            ..MockImagePresenter::default()
        });
        let mut session = create_session(small_config(4), &port, &presenter);
        let rect = session.rect();

        let result = session.dispatch(ViewerCommand::Save(PathBuf::from("/read-only/frame.png")));

        assert!(matches!(result, Err(ViewerError::Export(_))));
        assert_eq!(port.errors.lock().len(), 1);
        assert_eq!(session.rect(), rect);
        assert!(!session.is_rendering());

        // still usable afterwards
        session.render_full().unwrap();
        session.wait_for_frame(TIMEOUT).unwrap();
    }

    #[test]
    fn test_unread_events_do_not_pile_up_across_renders() {
        let port = Arc::new(MockViewerPort::default());
        let presenter = Arc::new(MockImagePresenter::default());
        let mut session = create_session(small_config(16), &port, &presenter);

        for _ in 0..10 {
            session.dispatch(ViewerCommand::Reset).unwrap();
            while session.is_rendering() {
                std::thread::yield_now();
            }
        }

        // the last frame's rows and completion, plus at most one late completion
        assert!(session.events().len() <= 16 + 2, "{} queued", session.events().len());

        let report = session.wait_for_frame(TIMEOUT).unwrap();
        assert_eq!(report.generation, 10);
    }

    #[test]
    fn test_wait_for_frame_times_out_without_render() {
        let port = Arc::new(MockViewerPort::default());
        let presenter = Arc::new(MockImagePresenter::default());
        let session = create_session(small_config(4), &port, &presenter);

        let result = session.wait_for_frame(Duration::from_millis(20));

        assert!(matches!(result, Err(ViewerError::FrameTimeout { generation: 0 })));
    }
}
