//! # Blockworld Headless
//!
//! Runs the render loop without a display and reports frame timing.
//!
//! ```bash
//! # Defaults, 3 seconds
//! blockworld_headless
//!
//! # Custom config, 10 seconds, dump the last frame
//! blockworld_headless world.toml 10 last_frame.ppm
//!
//! # More detail
//! RUST_LOG=blockworld=debug blockworld_headless
//! ```

use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use blockworld::render::FrameBuffer;
use blockworld::{BlockworldApp, BlockworldConfig, RenderLoop, RenderLoopConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_SECONDS: u64 = 3;

/// Command-line arguments, all positional and optional.
struct Args {
    config: Option<PathBuf>,
    seconds: u64,
    output: Option<PathBuf>,
}

impl Args {
    fn parse() -> Result<Self, Box<dyn Error>> {
        let mut args = std::env::args().skip(1);
        let config = args.next().filter(|arg| arg != "-").map(PathBuf::from);
        let seconds = match args.next() {
            Some(text) => text
                .parse()
                .map_err(|_| format!("seconds must be a whole number, got {text:?}"))?,
            None => DEFAULT_SECONDS,
        };
        let output = args.next().map(PathBuf::from);
        Ok(Self {
            config,
            seconds,
            output,
        })
    }
}

/// Writes a frame as binary PPM (P6).
fn write_ppm(path: &Path, frame: &FrameBuffer) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write!(out, "P6\n{} {}\n255\n", frame.width(), frame.height())?;
    out.write_all(frame.as_bytes())?;
    out.flush()
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .init();

    let args = Args::parse()?;
    let config = match &args.config {
        Some(path) => BlockworldConfig::load(path)?,
        None => BlockworldConfig::default(),
    };

    let app = Arc::new(BlockworldApp::new(&config)?);
    let render_loop = RenderLoop::spawn(Arc::clone(&app), RenderLoopConfig::for_app(&app))?;

    info!(seconds = args.seconds, "running headless");
    thread::sleep(Duration::from_secs(args.seconds));

    let frame = render_loop.latest_frame();
    let stats = render_loop
        .stop()
        .map_err(|_| "render thread panicked")?;

    info!(
        frames = stats.frames,
        late_frames = stats.late_frames,
        avg_frame_us = stats.avg_frame_us(),
        worst_frame_us = stats.worst_frame_us,
        "headless run complete"
    );

    if let Some(path) = &args.output {
        write_ppm(path, &frame)?;
        info!(path = %path.display(), width = frame.width(), height = frame.height(), "frame written");
    }

    Ok(())
}
