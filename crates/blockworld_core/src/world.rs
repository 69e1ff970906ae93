//! # World Registry
//!
//! The single owner of the grid, the colour profile and every player.
//!
//! ## Locking
//!
//! ```text
//!   ┌──────────────────────── WorldState ────────────────────────┐
//!   │  profile: ColorProfile            (immutable, no lock)     │
//!   │  grid:    RwLock<Grid>            (cell writes, swaps)     │
//!   │  players: Mutex<BTreeMap<PlayerId, PlayerState>>           │
//!   └────────────────────────────────────────────────────────────┘
//! ```
//!
//! - All player access goes through [`WorldState::with_player`] and
//!   [`WorldState::with_player_mut`], which run a closure while the player
//!   mutex is held. One mutex for the whole map: no two player operations
//!   run in parallel, and the map never changes under an iterating caller.
//! - The grid has its own lock. Engine code never holds both locks at once,
//!   so there is no lock-ordering deadlock. A frame rendered while the grid is
//!   swapped may mix old and new data; each individual read is consistent.
//! - Closures run under a lock. They must be short and must not call back
//!   into the same `WorldState`.

use std::collections::BTreeMap;

use parking_lot::{Mutex, RwLock};

use crate::block::BlockKind;
use crate::color::ColorProfile;
use crate::error::{WorldError, WorldResult};
use crate::grid::{Grid, GridShape};
use crate::player::{CursorPos, Direction, PlayerId, PlayerState};

/// Where new players start and what they hold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpawnRules {
    /// Start cursor (clamped into the grid at join time).
    pub cursor: CursorPos,
    /// Initially selected block.
    pub block: BlockKind,
}

/// Shared, synchronized world state.
///
/// Share it between threads as `Arc<WorldState>`.
pub struct WorldState {
    grid: RwLock<Grid>,
    profile: ColorProfile,
    players: Mutex<BTreeMap<PlayerId, PlayerState>>,
    spawn: SpawnRules,
}

impl WorldState {
    /// Creates a world with no players.
    #[must_use]
    pub fn new(grid: Grid, profile: ColorProfile) -> Self {
        Self {
            grid: RwLock::new(grid),
            profile,
            players: Mutex::new(BTreeMap::new()),
            spawn: SpawnRules::default(),
        }
    }

    /// Sets the spawn rules for players joining from now on.
    #[must_use]
    pub fn with_spawn(mut self, spawn: SpawnRules) -> Self {
        self.spawn = spawn;
        self
    }

    /// The colour profile fixed at construction.
    #[inline]
    #[must_use]
    pub const fn color_profile(&self) -> &ColorProfile {
        &self.profile
    }

    // =========================================================================
    // Players
    // =========================================================================

    /// Adds a player at the spawn cursor, bounded by the current grid shape.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::ParticipantExists`] if the id is taken. The
    /// existing player's state is not touched.
    pub fn add_player(&self, id: impl Into<PlayerId>) -> WorldResult<()> {
        let id = id.into();
        let bounds = self.grid_shape();
        let mut players = self.players.lock();
        if players.contains_key(&id) {
            tracing::warn!(player = %id, "join rejected: id already present");
            return Err(WorldError::ParticipantExists(id.to_string()));
        }
        let state = PlayerState::new(self.spawn.cursor, bounds, self.spawn.block);
        tracing::info!(
            player = %id,
            row = state.cursor().row,
            col = state.cursor().col,
            "player joined"
        );
        players.insert(id, state);
        Ok(())
    }

    /// Removes a player. Returns whether the player existed.
    pub fn remove_player(&self, id: &str) -> bool {
        let removed = self.players.lock().remove(id).is_some();
        if removed {
            tracing::info!(player = id, "player left");
        }
        removed
    }

    /// Runs `body` with shared access to one player's state.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::UnknownParticipant`] if the id is absent; `body`
    /// is not called.
    pub fn with_player<R>(&self, id: &str, body: impl FnOnce(&PlayerState) -> R) -> WorldResult<R> {
        let players = self.players.lock();
        let state = players
            .get(id)
            .ok_or_else(|| WorldError::UnknownParticipant(id.to_owned()))?;
        Ok(body(state))
    }

    /// Runs `body` with exclusive access to one player's state.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::UnknownParticipant`] if the id is absent; `body`
    /// is not called.
    pub fn with_player_mut<R>(
        &self,
        id: &str,
        body: impl FnOnce(&mut PlayerState) -> R,
    ) -> WorldResult<R> {
        let mut players = self.players.lock();
        let state = players
            .get_mut(id)
            .ok_or_else(|| WorldError::UnknownParticipant(id.to_owned()))?;
        Ok(body(state))
    }

    /// Snapshot of player ids in lexical order.
    ///
    /// Stale as soon as it is returned.
    #[must_use]
    pub fn player_ids(&self) -> Vec<PlayerId> {
        self.players.lock().keys().cloned().collect()
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.lock().len()
    }

    /// Player ids, one per line.
    #[must_use]
    pub fn players_listing(&self) -> String {
        let players = self.players.lock();
        let mut out = String::new();
        for id in players.keys() {
            out.push_str(id.as_str());
            out.push('\n');
        }
        out
    }

    /// Moves a player's cursor one step. Returns the new cursor.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::UnknownParticipant`] if the id is absent.
    pub fn move_player(&self, id: &str, direction: Direction) -> WorldResult<CursorPos> {
        let cursor = self.with_player_mut(id, |player| {
            player.move_cursor(direction);
            player.cursor()
        })?;
        tracing::debug!(player = id, %direction, row = cursor.row, col = cursor.col, "cursor moved");
        Ok(cursor)
    }

    /// Replaces a player's selected block.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::UnknownParticipant`] if the id is absent.
    pub fn select_block(&self, id: &str, kind: BlockKind) -> WorldResult<()> {
        self.with_player_mut(id, |player| player.set_selected_block(kind))?;
        tracing::debug!(player = id, block = %kind, "block selected");
        Ok(())
    }

    /// Writes the player's selected block at the player's cursor.
    ///
    /// The player is read under the player lock, which is released before
    /// the grid is written. Returns the cell that was written.
    ///
    /// # Errors
    ///
    /// - [`WorldError::UnknownParticipant`] if the id is absent
    /// - [`WorldError::IndexOutOfRange`] if a smaller grid has been swapped
    ///   in since the player joined; nothing is written
    pub fn place_block(&self, id: &str) -> WorldResult<CursorPos> {
        let (cursor, kind) = self.with_player(id, |player| (player.cursor(), player.selected_block()))?;
        self.set_block(cursor.row, cursor.col, kind)?;
        tracing::debug!(player = id, block = %kind, row = cursor.row, col = cursor.col, "block placed");
        Ok(cursor)
    }

    // =========================================================================
    // Grid
    // =========================================================================

    /// Runs `body` with shared access to the grid.
    pub fn with_grid<R>(&self, body: impl FnOnce(&Grid) -> R) -> R {
        body(&*self.grid.read())
    }

    /// Runs `body` with exclusive access to the grid.
    pub fn with_grid_mut<R>(&self, body: impl FnOnce(&mut Grid) -> R) -> R {
        body(&mut *self.grid.write())
    }

    /// Current grid dimensions.
    #[must_use]
    pub fn grid_shape(&self) -> GridShape {
        self.grid.read().shape()
    }

    /// Reads one cell.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::IndexOutOfRange`] if outside the grid.
    pub fn block_at(&self, row: usize, col: usize) -> WorldResult<BlockKind> {
        self.grid.read().get(row, col)
    }

    /// Writes one cell.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::IndexOutOfRange`] if outside the grid.
    pub fn set_block(&self, row: usize, col: usize, kind: BlockKind) -> WorldResult<()> {
        self.grid.write().set(row, col, kind)
    }

    /// Swaps in a whole new grid and returns the previous one.
    ///
    /// Existing players keep the bounds they joined with.
    pub fn replace_grid(&self, grid: Grid) -> Grid {
        let shape = grid.shape();
        let old = std::mem::replace(&mut *self.grid.write(), grid);
        tracing::info!(rows = shape.rows(), cols = shape.cols(), "world grid replaced");
        old
    }
}
