//! The floor line: overflow tiles and the first-player marker.
//!
//! Items keep arrival order; the penalty schedule applies to the first
//! seven slots only. Tiles past slot seven carry no penalty but still
//! return to the supply when the floor is cleared, so the global tile
//! count stays conserved.

use serde::{Deserialize, Serialize};

use crate::tiles::Color;

/// Penalty per floor slot, in arrival order.
pub const FLOOR_PENALTIES: [i32; 7] = [-1, -1, -2, -2, -2, -3, -3];

/// One occupant of a floor slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FloorItem {
    Tile(Color),
    /// The first-player marker: occupies a penalty slot, never discarded
    /// to the supply.
    Marker,
}

/// A player's floor line.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FloorLine {
    items: Vec<FloorItem>,
}

impl FloorLine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `count` tiles of one color.
    pub fn push_tiles(&mut self, color: Color, count: usize) {
        self.items
            .extend(std::iter::repeat(FloorItem::Tile(color)).take(count));
    }

    /// Append the first-player marker.
    pub fn push_marker(&mut self) {
        self.items.push(FloorItem::Marker);
    }

    /// Total items on the floor (marker included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of tiles (marker excluded).
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.items
            .iter()
            .filter(|i| matches!(i, FloorItem::Tile(_)))
            .count()
    }

    #[must_use]
    pub fn holds_marker(&self) -> bool {
        self.items.contains(&FloorItem::Marker)
    }

    /// Penalty for the current floor contents (always <= 0).
    #[must_use]
    pub fn penalty(&self) -> i32 {
        self.items
            .iter()
            .zip(FLOOR_PENALTIES.iter())
            .map(|(_, &p)| p)
            .sum()
    }

    /// Empty the floor, returning every tile for discard.
    ///
    /// The marker, if present, is simply dropped (it returns to the center
    /// at the next round setup).
    pub fn drain_tiles(&mut self) -> Vec<Color> {
        self.items
            .drain(..)
            .filter_map(|item| match item {
                FloorItem::Tile(color) => Some(color),
                FloorItem::Marker => None,
            })
            .collect()
    }

    /// Items in arrival order.
    pub fn items(&self) -> &[FloorItem] {
        &self.items
    }
}
