//! # Grid Generator
//!
//! Populates a whole [`Grid`] from a [`WorldSeed`].
//!
//! ## Determinism
//!
//! The detail stream is a `ChaCha8Rng` seeded from the world seed, and exactly
//! one value is drawn per cell in row-major order. Identical
//! `(seed, rows, cols)` therefore always give a cell-for-cell identical grid.

use std::time::Instant;

use blockworld_core::{Grid, GridShape};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::noise::WorldSeed;
use crate::terrain::TerrainClassifier;

/// Seed purpose for the detail stream (1 and 2 are the noise channels).
const DETAIL_STREAM: u64 = 3;

/// Generates grids of one fixed shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridGenerator {
    shape: GridShape,
}

impl GridGenerator {
    /// Creates a generator for grids of `shape`.
    #[inline]
    #[must_use]
    pub const fn new(shape: GridShape) -> Self {
        Self { shape }
    }

    /// Target row count.
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.shape.rows()
    }

    /// Target column count.
    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.shape.cols()
    }

    /// Generates a fully populated grid.
    #[must_use]
    pub fn generate(&self, seed: WorldSeed) -> Grid {
        let start = Instant::now();
        let classifier = TerrainClassifier::new(seed);
        let mut rng = ChaCha8Rng::seed_from_u64(seed.derive(DETAIL_STREAM).value());

        let grid = Grid::from_fn(self.shape, |row, col| {
            let roll = rng.gen_range(0..TerrainClassifier::ROLL_RANGE);
            classifier.classify(row, col, roll)
        });

        tracing::debug!(
            seed = seed.value(),
            rows = self.rows(),
            cols = self.cols(),
            elapsed_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX),
            "grid generated"
        );
        grid
    }
}
