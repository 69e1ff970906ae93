//! # Block Catalog
//!
//! The closed set of block kinds a grid cell can hold.
//!
//! Every kind has one canonical lowercase name. The name is the only form in
//! which a block crosses the engine boundary: request bodies, config keys and
//! listings all use it, and [`BlockKind::from_str`](std::str::FromStr) is the
//! single place where foreign strings are admitted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WorldError;

/// A block type in the world.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum BlockKind {
    /// Empty cell.
    #[default]
    Air = 0,
    /// Grass.
    Grass = 1,
    /// Dirt.
    Dirt = 2,
    /// Stone.
    Stone = 3,
    /// Sand.
    Sand = 4,
    /// Water.
    Water = 5,
    /// Wood/log.
    Wood = 6,
    /// Leaves.
    Leaves = 7,
    /// Snow.
    Snow = 8,
    /// Lava.
    Lava = 9,
    /// Brick (player-placed only).
    Brick = 10,
    /// Glass (player-placed only).
    Glass = 11,
}

impl BlockKind {
    /// Number of kinds in the catalog.
    pub const COUNT: usize = 12;

    /// Every kind, in declaration order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Air,
        Self::Grass,
        Self::Dirt,
        Self::Stone,
        Self::Sand,
        Self::Water,
        Self::Wood,
        Self::Leaves,
        Self::Snow,
        Self::Lava,
        Self::Brick,
        Self::Glass,
    ];

    /// Returns the canonical name of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Air => "air",
            Self::Grass => "grass",
            Self::Dirt => "dirt",
            Self::Stone => "stone",
            Self::Sand => "sand",
            Self::Water => "water",
            Self::Wood => "wood",
            Self::Leaves => "leaves",
            Self::Snow => "snow",
            Self::Lava => "lava",
            Self::Brick => "brick",
            Self::Glass => "glass",
        }
    }

    /// Returns the catalog index (the `repr(u8)` discriminant).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns true for the empty kind.
    #[inline]
    #[must_use]
    pub const fn is_air(self) -> bool {
        matches!(self, Self::Air)
    }

    /// Returns every canonical name, one per line, in catalog order.
    #[must_use]
    pub fn listing() -> String {
        let mut out = String::with_capacity(Self::COUNT * 8);
        for kind in Self::ALL {
            out.push_str(kind.name());
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlockKind {
    type Err = WorldError;

    /// Exact, case-sensitive match against the canonical names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| WorldError::InvalidCellKind(s.to_owned()))
    }
}
