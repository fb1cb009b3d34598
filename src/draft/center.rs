//! The center of the table: display leftovers plus the first-player marker.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::tiles::{Color, ALL_COLORS};

/// The shared center pool.
///
/// Holds the marker until the first draft of the round touches the
/// center; the marker is consumed at most once per round.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CenterPool {
    tiles: Vec<Color>,
    marker: bool,
}

impl Default for CenterPool {
    fn default() -> Self {
        Self::new()
    }
}

impl CenterPool {
    /// A fresh center for a new round, marker available.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tiles: Vec::new(),
            marker: true,
        }
    }

    /// Add leftover tiles evicted from a display.
    pub fn add(&mut self, tiles: impl IntoIterator<Item = Color>) {
        self.tiles.extend(tiles);
    }

    /// Draft every tile of `color`.
    ///
    /// Returns the number taken and whether this draft claimed the
    /// first-player marker (true at most once per round).
    pub fn take(&mut self, color: Color) -> (usize, bool) {
        let before = self.tiles.len();
        self.tiles.retain(|&c| c != color);
        let taken = before - self.tiles.len();

        let took_marker = self.marker;
        self.marker = false;
        (taken, took_marker)
    }

    /// Distinct colors present, in fixed color order.
    #[must_use]
    pub fn available_colors(&self) -> SmallVec<[Color; 5]> {
        ALL_COLORS
            .iter()
            .copied()
            .filter(|&c| self.tiles.contains(&c))
            .collect()
    }

    /// Empty only when no tiles remain and the marker has been claimed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty() && !self.marker
    }

    #[must_use]
    pub fn has_marker(&self) -> bool {
        self.marker
    }

    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn count_of(&self, color: Color) -> usize {
        self.tiles.iter().filter(|&&c| c == color).count()
    }

    /// All tiles currently in the center.
    pub fn tiles(&self) -> &[Color] {
        &self.tiles
    }
}
