//! A factory display: four tiles, emptied entirely by any draft.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::tiles::{Color, ALL_COLORS};

/// Tiles dealt to a display each round (fewer when the supply runs short).
pub const DISPLAY_CAPACITY: usize = 4;

/// One factory display.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FactoryDisplay {
    tiles: SmallVec<[Color; DISPLAY_CAPACITY]>,
}

impl FactoryDisplay {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stock the display for a new round.
    pub fn fill(&mut self, tiles: impl IntoIterator<Item = Color>) {
        self.tiles = tiles.into_iter().collect();
        debug_assert!(self.tiles.len() <= DISPLAY_CAPACITY);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Tiles of `color` currently on the display.
    #[must_use]
    pub fn count_of(&self, color: Color) -> usize {
        self.tiles.iter().filter(|&&c| c == color).count()
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

    /// Draft every tile of `color`, emptying the display.
    ///
    /// Returns the number of matched tiles and the evicted remainder,
    /// which the caller must route to the center.
    pub fn take(&mut self, color: Color) -> (usize, SmallVec<[Color; DISPLAY_CAPACITY]>) {
        let taken = self.count_of(color);
        let remainder = self.tiles.iter().copied().filter(|&c| c != color).collect();
        self.tiles.clear();
        (taken, remainder)
    }

    /// All tiles currently on the display.
    pub fn tiles(&self) -> &[Color] {
        &self.tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_and_inspect() {
        let mut display = FactoryDisplay::new();
        display.fill([Color::Red, Color::Red, Color::Blue, Color::Black]);

        assert!(!display.is_empty());
        assert_eq!(display.count_of(Color::Red), 2);
        assert_eq!(
            display.available_colors().as_slice(),
            &[Color::Blue, Color::Red, Color::Black]
        );
    }

    #[test]
    fn test_take_empties_display_and_returns_remainder() {
        let mut display = FactoryDisplay::new();
        display.fill([Color::Red, Color::Red, Color::Blue, Color::Black]);

        let (taken, remainder) = display.take(Color::Red);

        assert_eq!(taken, 2);
        assert_eq!(remainder.as_slice(), &[Color::Blue, Color::Black]);
        assert!(display.is_empty());
    }

    #[test]
    fn test_take_all_same_color_leaves_no_remainder() {
        let mut display = FactoryDisplay::new();
        display.fill([Color::Red; 4]);

        let (taken, remainder) = display.take(Color::Red);

        assert_eq!(taken, 4);
        assert!(remainder.is_empty());
    }

    #[test]
    fn test_short_fill_allowed() {
        let mut display = FactoryDisplay::new();
        display.fill([Color::White]);

        assert_eq!(display.len(), 1);
    }
}
