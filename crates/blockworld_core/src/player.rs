//! # Player Cursor State
//!
//! Per-player cursor position and selected block.
//!
//! The cursor is bounded by the grid shape captured when the player joined.
//! Movement steps one cell and clamps each axis independently, so pushing
//! against an edge is a silent no-op rather than a wrap or an error.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use crate::block::BlockKind;
use crate::error::WorldError;
use crate::grid::GridShape;

/// Opaque player identifier.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerId(String);

impl PlayerId {
    /// Wraps an identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PlayerId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Cursor movement direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column 0.
    Left,
    /// Towards the last column.
    Right,
}

impl Direction {
    /// Every direction.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = WorldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(WorldError::InvalidDirection(other.to_owned())),
        }
    }
}

/// A grid cell addressed by row and column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CursorPos {
    /// Row (pixel y).
    pub row: usize,
    /// Column (pixel x).
    pub col: usize,
}

impl CursorPos {
    /// Creates a position.
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Cursor and selection of one player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerState {
    cursor: CursorPos,
    /// Exclusive upper bounds captured at join time.
    bounds: GridShape,
    selected: BlockKind,
}

impl PlayerState {
    /// Creates a player at `start` (clamped into `bounds`) holding `selected`.
    #[must_use]
    pub fn new(start: CursorPos, bounds: GridShape, selected: BlockKind) -> Self {
        let mut state = Self {
            cursor: start,
            bounds,
            selected,
        };
        state.clamp_cursor();
        state
    }

    /// Current cursor position.
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> CursorPos {
        self.cursor
    }

    /// Bounds captured when the player joined.
    #[inline]
    #[must_use]
    pub const fn bounds(&self) -> GridShape {
        self.bounds
    }

    /// Currently selected block.
    #[inline]
    #[must_use]
    pub const fn selected_block(&self) -> BlockKind {
        self.selected
    }

    /// Replaces the selected block.
    #[inline]
    pub fn set_selected_block(&mut self, kind: BlockKind) {
        self.selected = kind;
    }

    /// Moves the cursor one cell towards `direction`, clamping at the edges.
    pub fn move_cursor(&mut self, direction: Direction) {
        let CursorPos { row, col } = self.cursor;
        self.cursor = match direction {
            Direction::Up => CursorPos::new(row.saturating_sub(1), col),
            Direction::Down => CursorPos::new(row.saturating_add(1), col),
            Direction::Left => CursorPos::new(row, col.saturating_sub(1)),
            Direction::Right => CursorPos::new(row, col.saturating_add(1)),
        };
        self.clamp_cursor();
    }

    fn clamp_cursor(&mut self) {
        self.cursor.row = self.cursor.row.min(self.bounds.rows() - 1);
        self.cursor.col = self.cursor.col.min(self.bounds.cols() - 1);
    }
}
