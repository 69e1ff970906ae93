//! Compositing statistics.

/// Statistics from one composited frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Grid cells written in the base pass.
    pub cells_drawn: usize,
    /// Player cursors written in the overlay pass.
    pub cursors_drawn: usize,
    /// Players that left between the id snapshot and their overlay.
    pub cursors_skipped: usize,
}

impl FrameStats {
    /// Total pixel writes, background fill excluded.
    #[must_use]
    pub const fn pixel_writes(&self) -> usize {
        self.cells_drawn + self.cursors_drawn
    }
}
