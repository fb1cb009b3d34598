//! One-ply greedy agent: clone, apply, measure.

use serde::{Deserialize, Serialize};

use super::{resolved_score, Strategy};
use crate::board::PlayerBoard;
use crate::core::GameRng;
use crate::game::{Destination, GameState, Move};

/// Greedy agent parameters.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct GreedyConfig {
    /// Break ties uniformly at random among equal-best moves; when false,
    /// the first maximum in enumeration order wins.
    pub random_tie_break: bool,
    /// Seed for the tie-break RNG.
    pub seed: u64,
}

impl Default for GreedyConfig {
    fn default() -> Self {
        Self {
            random_tie_break: true,
            seed: 42,
        }
    }
}

/// Evaluates every legal move on an independent clone and keeps the best
/// immediate resolved-score delta, with a small bonus for moves that bring
/// a staging row closer to completion.
pub struct GreedyStrategy {
    config: GreedyConfig,
    rng: GameRng,
}

impl GreedyStrategy {
    #[must_use]
    pub fn new(config: GreedyConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self { config, rng }
    }

    /// Value of `mv` for the acting player: resolved-score delta plus the
    /// row-closeness bonus.
    fn evaluate(state: &mut GameState, mv: &Move) -> f64 {
        let me = state.current_player();
        let before = resolved_score(state, me);

        let mut sim = state.clone_state();
        sim.apply(mv).expect("legal move applies on a clone");
        let delta = f64::from(resolved_score(&sim, me) - before);

        delta + row_closeness_bonus(&state.seat(me).board, mv)
    }
}

/// Small positive bonus for filling a row toward its capacity: 0.1 scaled
/// by the fill fraction the move reaches. Floor moves get nothing.
fn row_closeness_bonus(board: &PlayerBoard, mv: &Move) -> f64 {
    match mv.dest {
        Destination::Row(r) => {
            let capacity = PlayerBoard::row_capacity(r);
            let after = (board.row(r).count() + 1).min(capacity);
            0.1 * after as f64 / capacity as f64
        }
        Destination::Floor => 0.0,
    }
}

impl Strategy for GreedyStrategy {
    fn choose_move(&mut self, state: &mut GameState, legal: &[Move]) -> Option<Move> {
        if legal.is_empty() {
            return None;
        }

        let mut best_value = f64::NEG_INFINITY;
        let mut best: Vec<Move> = Vec::new();

        for mv in legal {
            let value = Self::evaluate(state, mv);
            if value > best_value + f64::EPSILON {
                best_value = value;
                best.clear();
                best.push(*mv);
            } else if (value - best_value).abs() <= f64::EPSILON {
                best.push(*mv);
            }
        }

        if self.config.random_tie_break {
            self.rng.choose(&best).copied()
        } else {
            best.first().copied()
        }
    }
}
