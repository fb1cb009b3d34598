//! The shared tile supply: a draw reserve plus a discard pile.
//!
//! Draws refill the reserve from a reshuffled discard when it runs dry.
//! When both are empty a draw comes back short; that is a normal return,
//! not an error, and callers must tolerate fewer tiles than requested.

use serde::{Deserialize, Serialize};

use super::color::{Color, ALL_COLORS, TILES_PER_COLOR};
use crate::core::GameRng;

/// The tile supply.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TileBag {
    reserve: Vec<Color>,
    discard: Vec<Color>,
}

impl TileBag {
    /// Create a full supply: 20 tiles of each color, shuffled.
    #[must_use]
    pub fn new(rng: &mut GameRng) -> Self {
        let mut reserve = Vec::with_capacity(ALL_COLORS.len() * TILES_PER_COLOR);
        for color in ALL_COLORS {
            reserve.extend(std::iter::repeat(color).take(TILES_PER_COLOR));
        }
        rng.shuffle(&mut reserve);

        Self {
            reserve,
            discard: Vec::new(),
        }
    }

    /// Draw up to `n` tiles from the reserve.
    ///
    /// When the reserve runs short the discard pile is reshuffled into it
    /// and the draw continues; if both are empty the result is short.
    pub fn draw(&mut self, n: usize, rng: &mut GameRng) -> Vec<Color> {
        let mut drawn = Vec::with_capacity(n);

        while drawn.len() < n {
            if self.reserve.is_empty() {
                if self.discard.is_empty() {
                    break;
                }
                self.reserve.append(&mut self.discard);
                rng.shuffle(&mut self.reserve);
            }

            let take = (n - drawn.len()).min(self.reserve.len());
            drawn.extend(self.reserve.drain(..take));
        }

        drawn
    }

    /// Return tiles to the discard pile.
    pub fn discard(&mut self, tiles: impl IntoIterator<Item = Color>) {
        self.discard.extend(tiles);
    }

    /// Tiles currently in the draw reserve.
    #[must_use]
    pub fn reserve_len(&self) -> usize {
        self.reserve.len()
    }

    /// Tiles currently in the discard pile.
    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.discard.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::TOTAL_TILES;

    #[test]
    fn test_new_bag_holds_full_supply() {
        let mut rng = GameRng::new(42);
        let bag = TileBag::new(&mut rng);

        assert_eq!(bag.reserve_len(), TOTAL_TILES);
        assert_eq!(bag.discard_len(), 0);
    }

    #[test]
    fn test_new_bag_has_twenty_of_each() {
        let mut rng = GameRng::new(42);
        let mut bag = TileBag::new(&mut rng);

        let all = bag.draw(TOTAL_TILES, &mut rng);
        for color in ALL_COLORS {
            assert_eq!(all.iter().filter(|&&c| c == color).count(), TILES_PER_COLOR);
        }
    }

    #[test]
    fn test_draw_removes_from_reserve() {
        let mut rng = GameRng::new(42);
        let mut bag = TileBag::new(&mut rng);

        let drawn = bag.draw(4, &mut rng);

        assert_eq!(drawn.len(), 4);
        assert_eq!(bag.reserve_len(), TOTAL_TILES - 4);
    }

    #[test]
    fn test_draw_refills_from_discard() {
        let mut rng = GameRng::new(42);
        let mut bag = TileBag::new(&mut rng);

        let all = bag.draw(TOTAL_TILES, &mut rng);
        bag.discard(all);
        assert_eq!(bag.reserve_len(), 0);

        let drawn = bag.draw(10, &mut rng);

        assert_eq!(drawn.len(), 10);
        assert_eq!(bag.reserve_len(), TOTAL_TILES - 10);
        assert_eq!(bag.discard_len(), 0);
    }

    #[test]
    fn test_draw_straddling_a_refill() {
        let mut rng = GameRng::new(42);
        let mut bag = TileBag::new(&mut rng);

        // Leave 3 tiles in the reserve, everything else in the discard.
        let drawn = bag.draw(TOTAL_TILES - 3, &mut rng);
        bag.discard(drawn);

        let drawn = bag.draw(10, &mut rng);

        assert_eq!(drawn.len(), 10);
        assert_eq!(bag.discard_len(), 0);
        assert_eq!(bag.reserve_len(), TOTAL_TILES - 10);
    }

    #[test]
    fn test_draw_exhausted_returns_short() {
        let mut rng = GameRng::new(42);
        let mut bag = TileBag::new(&mut rng);

        let all = bag.draw(TOTAL_TILES, &mut rng);
        assert_eq!(all.len(), TOTAL_TILES);

        let empty = bag.draw(4, &mut rng);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_conservation_through_cycles() {
        let mut rng = GameRng::new(7);
        let mut bag = TileBag::new(&mut rng);

        for _ in 0..50 {
            let drawn = bag.draw(16, &mut rng);
            bag.discard(drawn);
            assert_eq!(bag.reserve_len() + bag.discard_len(), TOTAL_TILES);
        }
    }
}
