//! Tile colors.
//!
//! Five colors, order fixed: the enum discriminant doubles as the index
//! into per-color tables and keeps enumeration order stable everywhere
//! (move generation relies on this).

use serde::{Deserialize, Serialize};

/// Number of distinct tile colors.
pub const TILE_COLORS: usize = 5;

/// Tiles of each color in a fresh supply.
pub const TILES_PER_COLOR: usize = 20;

/// Total tiles in circulation (conserved for the whole game).
pub const TOTAL_TILES: usize = TILE_COLORS * TILES_PER_COLOR;

/// A tile color. No identity beyond the tag.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Blue = 0,
    Yellow = 1,
    Red = 2,
    Black = 3,
    White = 4,
}

/// All colors in fixed enumeration order.
pub const ALL_COLORS: [Color; TILE_COLORS] = [
    Color::Blue,
    Color::Yellow,
    Color::Red,
    Color::Black,
    Color::White,
];

impl Color {
    /// Index of this color into per-color tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Convert an index back into a color.
    #[must_use]
    pub fn from_index(idx: u8) -> Option<Color> {
        match idx {
            0 => Some(Color::Blue),
            1 => Some(Color::Yellow),
            2 => Some(Color::Red),
            3 => Some(Color::Black),
            4 => Some(Color::White),
            _ => None,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = match self {
            Color::Blue => 'B',
            Color::Yellow => 'Y',
            Color::Red => 'R',
            Color::Black => 'K',
            Color::White => 'W',
        };
        write!(f, "{letter}")
    }
}
