//! # World Error Types
//!
//! All errors that can occur in the world engine.
//!
//! Every variant is a local, recoverable condition. A failed operation never
//! leaves the grid or the player registry partially modified.

use thiserror::Error;

/// Errors that can occur in the world engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    /// Grid access with coordinates outside the grid.
    #[error("index out of range: ({row}, {col}) outside {rows}x{cols} grid")]
    IndexOutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Grid row count.
        rows: usize,
        /// Grid column count.
        cols: usize,
    },

    /// A player accessor was invoked with an identifier that is not present.
    #[error("unknown participant: {0}")]
    UnknownParticipant(String),

    /// A player with this identifier already exists.
    #[error("participant already exists: {0}")]
    ParticipantExists(String),

    /// Movement token is not one of the canonical direction names.
    #[error("invalid direction: {0:?}")]
    InvalidDirection(String),

    /// Block token is not one of the canonical block names.
    #[error("invalid cell kind: {0:?}")]
    InvalidCellKind(String),

    /// Grid dimensions must both be non-zero.
    #[error("invalid grid dimensions: {rows}x{cols}")]
    InvalidDimensions {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
}

/// Result type for world operations.
pub type WorldResult<T> = Result<T, WorldError>;
