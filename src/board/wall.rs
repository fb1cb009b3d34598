//! Wall layout constants.
//!
//! The wall is a 5x5 Latin square: each color appears exactly once per row
//! and once per column. Row 0 runs B Y R K W and every following row is the
//! previous one rotated right by one cell.

use crate::tiles::Color;

/// Side length of the wall and number of staging rows.
pub const BOARD_SIZE: usize = 5;

/// Which color each wall cell accepts.
pub const WALL_TEMPLATE: [[Color; BOARD_SIZE]; BOARD_SIZE] = {
    use Color::{Black as K, Blue as B, Red as R, White as W, Yellow as Y};
    [
        [B, Y, R, K, W],
        [W, B, Y, R, K],
        [K, W, B, Y, R],
        [R, K, W, B, Y],
        [Y, R, K, W, B],
    ]
};

/// A wall grid: each cell empty or holding one placed color.
pub type WallGrid = [[Option<Color>; BOARD_SIZE]; BOARD_SIZE];

/// The column the template assigns to `color` in `row`.
#[must_use]
pub fn template_column(row: usize, color: Color) -> Option<usize> {
    WALL_TEMPLATE[row].iter().position(|&c| c == color)
}
