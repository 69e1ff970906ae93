//! # Blockworld Procedural Generation
//!
//! Deterministic world generation: a seed and a shape in, a full grid out.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Same seed and shape always produce the same grid
//! 2. **Total**: Every cell receives a block from the catalog
//! 3. **Text seeds**: Any string can name a world via [`WorldSeed::from_text`]
//!
//! ## Core Components
//!
//! - `SimplexNoise`: 2D noise fields
//! - `TerrainClassifier`: Elevation and moisture to block kinds
//! - `GridGenerator`: Produces whole grids
//!
//! ## Example
//!
//! ```rust
//! use blockworld_core::GridShape;
//! use blockworld_procedural::{GridGenerator, WorldSeed};
//!
//! let generator = GridGenerator::new(GridShape::new(16, 32)?);
//! let a = generator.generate(WorldSeed::from_text("my world"));
//! let b = generator.generate(WorldSeed::from_text("my world"));
//! assert_eq!(a, b);
//! # Ok::<(), blockworld_core::WorldError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod generator;
pub mod noise;
pub mod terrain;

pub use generator::GridGenerator;
pub use noise::{SimplexNoise, WorldSeed};
pub use terrain::{Band, TerrainClassifier};
