//! # Block Colour Profile
//!
//! Maps every block kind to exactly one RGB colour.
//!
//! The profile is a lookup table indexed by [`BlockKind::index`], built once
//! and never mutated afterwards, so sharing it across threads needs no lock.

use std::fmt;

use bytemuck::{Pod, Zeroable};

use crate::block::BlockKind;

/// An 8-bit-per-channel RGB colour.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Creates a colour from its channels.
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` (the leading `#` is optional).
    ///
    /// Returns `None` for anything that is not exactly six hex digits.
    #[must_use]
    pub fn from_hex(text: &str) -> Option<Self> {
        let digits = text.strip_prefix('#').unwrap_or(text);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |at: usize| u8::from_str_radix(&digits[at..at + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Formats as lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Immutable block → colour table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorProfile {
    /// One entry per catalog kind.
    table: [Rgb; BlockKind::COUNT],
}

impl ColorProfile {
    /// The built-in palette.
    #[must_use]
    pub const fn classic() -> Self {
        Self {
            table: [
                Rgb::new(0, 0, 0),       // Air (display off)
                Rgb::new(95, 159, 53),   // Grass
                Rgb::new(134, 96, 67),   // Dirt
                Rgb::new(125, 125, 125), // Stone
                Rgb::new(219, 207, 163), // Sand
                Rgb::new(63, 118, 228),  // Water
                Rgb::new(102, 81, 51),   // Wood
                Rgb::new(58, 95, 11),    // Leaves
                Rgb::new(240, 251, 251), // Snow
                Rgb::new(207, 92, 15),   // Lava
                Rgb::new(150, 74, 58),   // Brick
                Rgb::new(175, 213, 219), // Glass
            ],
        }
    }

    /// Builds a profile from the classic palette with some kinds recoloured.
    ///
    /// Later entries win when a kind appears more than once.
    #[must_use]
    pub fn with_overrides<I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (BlockKind, Rgb)>,
    {
        let mut profile = Self::classic();
        for (kind, color) in overrides {
            profile.table[kind.index()] = color;
        }
        profile
    }

    /// Returns the colour of a block kind.
    #[inline]
    #[must_use]
    pub const fn color(&self, kind: BlockKind) -> Rgb {
        self.table[kind.index()]
    }
}

impl Default for ColorProfile {
    fn default() -> Self {
        Self::classic()
    }
}
