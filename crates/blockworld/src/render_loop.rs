//! # Render Loop
//!
//! Composites the world on a dedicated thread at a fixed frame rate.
//!
//! ```text
//! render thread                         callers
//! ─────────────                         ───────
//! render into private FrameBuffer
//! copy into shared slot  ─────────────→ latest_frame()
//! wait until next tick or shutdown ←─── stop()
//! ```
//!
//! The thread only holds the shared slot while copying a finished frame, so
//! readers never see a half-drawn frame and never block a render.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use blockworld_render::FrameBuffer;
use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender};
use parking_lot::Mutex;

use crate::app::BlockworldApp;

/// Configuration for the render loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderLoopConfig {
    /// Target frames per second (at least 1 is used).
    pub target_fps: u32,
}

impl RenderLoopConfig {
    /// Paces the loop at the app's configured frame rate.
    #[must_use]
    pub const fn for_app(app: &BlockworldApp) -> Self {
        Self {
            target_fps: app.framerate(),
        }
    }

    /// Time budget for one frame.
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.target_fps.max(1)
    }
}

impl Default for RenderLoopConfig {
    fn default() -> Self {
        Self { target_fps: 15 }
    }
}

/// Statistics for the render loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderLoopStats {
    /// Total frames rendered.
    pub frames: u64,
    /// Frames that took longer than the frame interval.
    pub late_frames: u64,
    /// Worst frame time (microseconds).
    pub worst_frame_us: u64,
    /// Sum of all frame times (microseconds).
    pub total_frame_us: u64,
}

impl RenderLoopStats {
    /// Average frame time (microseconds).
    #[must_use]
    pub const fn avg_frame_us(&self) -> u64 {
        if self.frames == 0 {
            0
        } else {
            self.total_frame_us / self.frames
        }
    }

    fn record(&mut self, elapsed: Duration, budget: Duration) {
        let us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
        self.frames += 1;
        self.total_frame_us = self.total_frame_us.saturating_add(us);
        self.worst_frame_us = self.worst_frame_us.max(us);
        if elapsed > budget {
            self.late_frames += 1;
            tracing::warn!(frame = self.frames, frame_us = us, "frame over budget");
        }
    }
}

/// Handle to a running render thread.
///
/// Dropping the handle without calling [`RenderLoop::stop`] also ends the
/// thread (the shutdown channel disconnects) but discards its statistics.
pub struct RenderLoop {
    shutdown: Sender<()>,
    handle: JoinHandle<RenderLoopStats>,
    latest: Arc<Mutex<FrameBuffer>>,
    frames: Arc<AtomicU64>,
}

impl RenderLoop {
    /// Starts rendering `app` on a new thread.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS refuses to spawn the thread.
    pub fn spawn(app: Arc<BlockworldApp>, config: RenderLoopConfig) -> std::io::Result<Self> {
        let (width, height) = app.surface_size();
        let latest = Arc::new(Mutex::new(FrameBuffer::new(width, height)));
        let frames = Arc::new(AtomicU64::new(0));
        let (shutdown, signal) = bounded(1);

        let handle = {
            let latest = Arc::clone(&latest);
            let frames = Arc::clone(&frames);
            thread::Builder::new()
                .name("blockworld-render".to_owned())
                .spawn(move || run(&app, config, &signal, &latest, &frames))?
        };

        tracing::info!(fps = config.target_fps, width, height, "render loop started");
        Ok(Self {
            shutdown,
            handle,
            latest,
            frames,
        })
    }

    /// Copy of the most recent finished frame.
    #[must_use]
    pub fn latest_frame(&self) -> FrameBuffer {
        self.latest.lock().clone()
    }

    /// Frames finished so far.
    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames.load(Ordering::Acquire)
    }

    /// Signals the thread to stop and waits for it.
    ///
    /// # Errors
    ///
    /// Returns the panic payload if the render thread panicked.
    pub fn stop(self) -> thread::Result<RenderLoopStats> {
        // A full channel or a finished thread both mean shutdown is under way.
        let _ = self.shutdown.try_send(());
        let stats = self.handle.join()?;
        tracing::info!(
            frames = stats.frames,
            late = stats.late_frames,
            avg_us = stats.avg_frame_us(),
            worst_us = stats.worst_frame_us,
            "render loop stopped"
        );
        Ok(stats)
    }
}

fn run(
    app: &BlockworldApp,
    config: RenderLoopConfig,
    signal: &Receiver<()>,
    latest: &Mutex<FrameBuffer>,
    frames: &AtomicU64,
) -> RenderLoopStats {
    let interval = config.frame_interval();
    let mut stats = RenderLoopStats::default();
    let (width, height) = app.surface_size();
    let mut scratch = FrameBuffer::new(width, height);
    let mut next_frame = Instant::now();

    loop {
        let started = Instant::now();

        let (width, height) = app.surface_size();
        if (width, height) != (scratch.width(), scratch.height()) {
            scratch = FrameBuffer::new(width, height);
        }
        app.render(&mut scratch);

        {
            let mut slot = latest.lock();
            if !slot.copy_from(&scratch) {
                *slot = scratch.clone();
            }
        }
        frames.fetch_add(1, Ordering::Release);
        stats.record(started.elapsed(), interval);

        next_frame += interval;
        let now = Instant::now();
        let wait = next_frame.saturating_duration_since(now);
        if wait.is_zero() {
            // Behind schedule: restart pacing instead of bursting to catch up.
            next_frame = now;
        }

        match signal.recv_timeout(wait) {
            Err(RecvTimeoutError::Timeout) => {}
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    stats
}
