//! # Compositor
//!
//! Projects a [`WorldState`] onto a [`Canvas`].
//!
//! ## Frame Order
//!
//! ```text
//! [optional background fill]
//!        ↓
//! Base pass     every cell, row-major   (grid read lock held)
//!        ↓
//! Overlay pass  every player, id order  (player lock per player)
//! ```
//!
//! Pixel x is the grid column, pixel y is the grid row. Overlays overwrite
//! the base pass and each other with no blending, so the last player in
//! [`WorldState::player_ids`] order wins a shared cell.
//!
//! A frame is not atomic. The grid lock is released before the overlay pass,
//! and players that leave mid-frame are skipped.

use blockworld_core::{Rgb, WorldState};

use crate::canvas::Canvas;
use crate::stats::FrameStats;

/// Stateless world → pixels renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Compositor {
    background: Option<Rgb>,
}

impl Compositor {
    /// Creates a compositor with no background fill.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { background: None }
    }

    /// Fills the canvas with `color` before each frame.
    #[inline]
    #[must_use]
    pub const fn with_background(mut self, color: Rgb) -> Self {
        self.background = Some(color);
        self
    }

    /// Canvas size needed for the current grid, as `(width, height)`.
    #[must_use]
    pub fn surface_size(world: &WorldState) -> (usize, usize) {
        let shape = world.grid_shape();
        (shape.cols(), shape.rows())
    }

    /// Renders one frame.
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C, world: &WorldState) -> FrameStats {
        let _span = tracing::trace_span!("composite_frame").entered();
        let profile = world.color_profile();
        let mut stats = FrameStats::default();

        if let Some(color) = self.background {
            canvas.fill(color);
        }

        world.with_grid(|grid| {
            for (row, col, kind) in grid.iter() {
                canvas.set_pixel(col, row, profile.color(kind));
            }
            stats.cells_drawn = grid.cells().len();
        });

        for id in world.player_ids() {
            match world.with_player(id.as_str(), |player| (player.cursor(), player.selected_block())) {
                Ok((cursor, kind)) => {
                    canvas.set_pixel(cursor.col, cursor.row, profile.color(kind));
                    stats.cursors_drawn += 1;
                }
                Err(_) => stats.cursors_skipped += 1,
            }
        }

        tracing::trace!(
            cells = stats.cells_drawn,
            cursors = stats.cursors_drawn,
            skipped = stats.cursors_skipped,
            "frame composited"
        );
        stats
    }
}
