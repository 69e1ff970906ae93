//! # Terrain Classification
//!
//! Turns two noise channels and one random roll into a block kind.
//!
//! Uses a simple climate model:
//! - Elevation picks the band (water, shore, land, rock, peaks)
//! - Moisture picks the land cover (forest, grass, dry sand)
//! - The per-cell roll scatters detail inside a band

use blockworld_core::BlockKind;

use crate::noise::{SimplexNoise, WorldSeed};

/// Broad terrain band for one cell, before detail is scattered in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Band {
    /// Open water.
    Water,
    /// Sand along the waterline.
    Shore,
    /// Dry, sandy lowland.
    Desert,
    /// Grass with the odd dirt patch.
    Plains,
    /// Trees and undergrowth.
    Forest,
    /// Bare rock, with rare lava.
    Rock,
    /// Snow-capped peaks.
    Peaks,
}

impl Band {
    /// Picks the block for this band given a roll in `0..ROLL_RANGE`.
    #[must_use]
    pub const fn block(self, roll: u32) -> BlockKind {
        match self {
            Self::Water => BlockKind::Water,
            Self::Shore | Self::Desert => BlockKind::Sand,
            Self::Plains => {
                if roll < 80 {
                    BlockKind::Dirt
                } else {
                    BlockKind::Grass
                }
            }
            Self::Forest => {
                if roll < 150 {
                    BlockKind::Wood
                } else if roll < 600 {
                    BlockKind::Leaves
                } else {
                    BlockKind::Grass
                }
            }
            Self::Rock => {
                if roll < 15 {
                    BlockKind::Lava
                } else {
                    BlockKind::Stone
                }
            }
            Self::Peaks => BlockKind::Snow,
        }
    }
}

/// Classifies grid cells into terrain from a world seed.
pub struct TerrainClassifier {
    /// Elevation channel.
    elevation_noise: SimplexNoise,
    /// Moisture channel.
    moisture_noise: SimplexNoise,
}

impl TerrainClassifier {
    /// Exclusive upper bound of the per-cell detail roll.
    pub const ROLL_RANGE: u32 = 1000;

    /// Noise frequency per grid cell (larger = smaller features).
    const ELEVATION_SCALE: f64 = 0.06;
    /// Moisture varies more slowly than elevation.
    const MOISTURE_SCALE: f64 = 0.045;

    const WATER_LEVEL: f64 = -0.35;
    const SHORE_LEVEL: f64 = -0.25;
    const ROCK_LEVEL: f64 = 0.35;
    const PEAK_LEVEL: f64 = 0.55;
    const FOREST_MOISTURE: f64 = 0.3;
    const DESERT_MOISTURE: f64 = -0.4;

    /// Creates a classifier from a world seed.
    #[must_use]
    pub fn new(seed: WorldSeed) -> Self {
        Self {
            elevation_noise: SimplexNoise::new(seed.derive(1)),
            moisture_noise: SimplexNoise::new(seed.derive(2)),
        }
    }

    /// Elevation at a cell, in `[-1, 1]`.
    #[must_use]
    pub fn elevation(&self, row: usize, col: usize) -> f64 {
        let (x, y) = Self::coords(row, col);
        self.elevation_noise.octaved(
            x * Self::ELEVATION_SCALE,
            y * Self::ELEVATION_SCALE,
            4,
            0.5,
            2.0,
        )
    }

    /// Moisture at a cell, in `[-1, 1]`.
    #[must_use]
    pub fn moisture(&self, row: usize, col: usize) -> f64 {
        let (x, y) = Self::coords(row, col);
        self.moisture_noise.octaved(
            x * Self::MOISTURE_SCALE,
            y * Self::MOISTURE_SCALE,
            2,
            0.5,
            2.0,
        )
    }

    /// Classifies the band at a cell.
    #[must_use]
    pub fn band(&self, row: usize, col: usize) -> Band {
        Self::band_from_climate(self.elevation(row, col), self.moisture(row, col))
    }

    /// Classifies a cell into a block, using `roll` for detail.
    #[must_use]
    pub fn classify(&self, row: usize, col: usize, roll: u32) -> BlockKind {
        self.band(row, col).block(roll)
    }

    /// Band from raw climate values.
    #[must_use]
    pub fn band_from_climate(elevation: f64, moisture: f64) -> Band {
        if elevation < Self::WATER_LEVEL {
            Band::Water
        } else if elevation < Self::SHORE_LEVEL {
            Band::Shore
        } else if elevation > Self::PEAK_LEVEL {
            Band::Peaks
        } else if elevation > Self::ROCK_LEVEL {
            Band::Rock
        } else if moisture > Self::FOREST_MOISTURE {
            Band::Forest
        } else if moisture < Self::DESERT_MOISTURE {
            Band::Desert
        } else {
            Band::Plains
        }
    }

    // Grid column is x, grid row is y, matching the pixel mapping.
    #[allow(clippy::cast_precision_loss)]
    fn coords(row: usize, col: usize) -> (f64, f64) {
        (col as f64, row as f64)
    }
}
