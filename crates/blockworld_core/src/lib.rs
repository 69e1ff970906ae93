//! # Blockworld Core
//!
//! The shared world-state engine behind a small multiplayer block world:
//! a 2-D grid of blocks, a registry of players with bounded cursors, and the
//! colour profile used to turn blocks into pixels.
//!
//! ## Design Principles
//!
//! 1. **One owner**: [`WorldState`] owns the grid, the profile and every player
//! 2. **Closures, not references**: player state is only reachable inside
//!    [`WorldState::with_player`] / [`WorldState::with_player_mut`]
//! 3. **Parse at the edge**: block and direction strings go through
//!    [`BlockKind::from_str`](std::str::FromStr) and
//!    [`Direction::from_str`](std::str::FromStr) before touching the engine
//! 4. **Failures have no effect**: every error leaves the world as it was
//!
//! ## Example
//!
//! ```rust
//! use blockworld_core::{BlockKind, ColorProfile, Direction, Grid, WorldState};
//!
//! let grid = Grid::new(16, 32, BlockKind::Grass)?;
//! let world = WorldState::new(grid, ColorProfile::classic());
//!
//! world.add_player("alice")?;
//! world.move_player("alice", "right".parse::<Direction>()?)?;
//! world.select_block("alice", "stone".parse::<BlockKind>()?)?;
//! world.place_block("alice")?;
//!
//! assert_eq!(world.block_at(0, 1)?, BlockKind::Stone);
//! # Ok::<(), blockworld_core::WorldError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod block;
pub mod color;
pub mod error;
pub mod grid;
pub mod player;
pub mod world;

pub use block::BlockKind;
pub use color::{ColorProfile, Rgb};
pub use error::{WorldError, WorldResult};
pub use grid::{Grid, GridShape};
pub use player::{CursorPos, Direction, PlayerId, PlayerState};
pub use world::{SpawnRules, WorldState};
