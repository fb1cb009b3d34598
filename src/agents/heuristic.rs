//! A fast deterministic baseline: take the biggest pile, stage it where it
//! helps most. No search, no randomness; useful as a cheap opponent and as
//! the reference player in tests.

use super::Strategy;
use crate::game::{Destination, GameState, Move, MoveSource};
use crate::tiles::Color;

/// Quick one-look policy.
///
/// Picks the (source, color) pair with the most tiles on offer, then
/// prefers the fullest partially-filled legal row, then the smallest empty
/// legal row, and only then the floor.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicStrategy;

impl HeuristicStrategy {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn source_count(state: &GameState, mv: &Move) -> usize {
        match mv.source {
            MoveSource::Display(i) => state.displays()[i].count_of(mv.color),
            MoveSource::Center => state.center().count_of(mv.color),
        }
    }
}

impl Strategy for HeuristicStrategy {
    fn choose_move(&mut self, state: &mut GameState, legal: &[Move]) -> Option<Move> {
        let me = state.current_player();

        // Largest pile on offer; earliest enumeration wins ties.
        let mut best: Option<(MoveSource, Color, usize)> = None;
        for mv in legal {
            let count = Self::source_count(state, mv);
            if best.map_or(true, |(_, _, c)| count > c) {
                best = Some((mv.source, mv.color, count));
            }
        }
        let (source, color, _) = best?;

        // Destination preference within the chosen pile. Floor moves are
        // only ever generated when no row is legal, so this falls through
        // cleanly.
        let board = &state.seat(me).board;
        let mut fullest_partial: Option<(usize, Move)> = None;
        let mut first_empty: Option<Move> = None;
        let mut floor: Option<Move> = None;

        for mv in legal
            .iter()
            .filter(|m| m.source == source && m.color == color)
        {
            match mv.dest {
                Destination::Row(r) => {
                    let staged = board.row(r).count();
                    if staged > 0 {
                        if fullest_partial.map_or(true, |(s, _)| staged > s) {
                            fullest_partial = Some((staged, *mv));
                        }
                    } else if first_empty.is_none() {
                        first_empty = Some(*mv);
                    }
                }
                Destination::Floor => floor = Some(*mv),
            }
        }

        fullest_partial.map(|(_, m)| m).or(first_empty).or(floor)
    }
}
