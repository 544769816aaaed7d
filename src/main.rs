use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use env_logger::Env;
use log::info;

use fractal_viewer::{
    DEFAULT_DISPLAY_SIZE, DEFAULT_ZOOM_SCALE, FractalKind, LoggingViewerPort, PngFilePresenter,
    Point, RenderSession, ViewerConfig,
};

const FRAME_TIMEOUT: Duration = Duration::from_secs(600);

fn parse_click(value: &str) -> Result<Point, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{value}'"))?;

    let coordinate = |part: &str| {
        part.trim()
            .parse::<i32>()
            .map_err(|err| format!("invalid coordinate '{part}': {err}"))
    };

    Ok(Point {
        x: coordinate(x)?,
        y: coordinate(y)?,
    })
}

#[derive(Parser, Debug)]
#[command(name = "fractal_viewer")]
#[command(about = "Render and zoom escape-time fractals, saving the result as PNG", long_about = None)]
struct Cli {
    /// Variant to draw: mandelbrot, tricorn or burning-ship
    #[arg(short, long, default_value_t = FractalKind::Mandelbrot)]
    fractal: FractalKind,

    /// Width and height of the square image in pixels
    #[arg(short, long, default_value_t = DEFAULT_DISPLAY_SIZE)]
    size: u32,

    /// Extent multiplier applied on every click
    #[arg(short, long, default_value_t = DEFAULT_ZOOM_SCALE)]
    zoom_scale: f64,

    /// Row workers, defaults to one per core
    #[arg(short, long)]
    threads: Option<usize>,

    /// Pixel to recentre on and zoom into, may be repeated
    #[arg(short, long = "click", value_name = "X,Y", value_parser = parse_click)]
    clicks: Vec<Point>,

    /// Where to write the final image
    #[arg(short, long, default_value = "output/fractal.png")]
    output: PathBuf,
}

impl Cli {
    fn viewer_config(&self) -> ViewerConfig {
        ViewerConfig {
            display_size: self.size,
            zoom_scale: self.zoom_scale,
            initial_kind: self.fractal,
            worker_threads: self.threads,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let cli = Cli::parse();

    if let Some(parent) = cli.output.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut session = RenderSession::new(
        cli.viewer_config(),
        Arc::new(LoggingViewerPort::new()),
        Arc::new(PngFilePresenter::new()),
    )?;

    session.render_full()?;
    session.wait_for_frame(FRAME_TIMEOUT)?;

    for &click in &cli.clicks {
        session.on_click(click)?;
        let report = session.wait_for_frame(FRAME_TIMEOUT)?;

        info!(
            "zoomed to {:?} in {:?}",
            session.rect(),
            report.render_duration
        );
    }

    session.save_image(&cli.output)?;

    Ok(())
}
