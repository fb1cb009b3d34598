//! Depth-limited minimax with alpha-beta pruning.
//!
//! The searching seat maximizes; every other seat is collapsed into one
//! adversarial minimizer. For more than two players this is a deliberate
//! simplification rather than a true equilibrium search.

use serde::{Deserialize, Serialize};

use super::{mean_opponent_score, resolved_score, Strategy};
use crate::core::{GameRng, PlayerId};
use crate::game::{GameState, Move};

/// Minimax agent parameters.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct MinimaxConfig {
    /// Search depth in plies (each ply = one seat's draft).
    pub depth: u32,
    /// Break root ties uniformly at random among equal-best moves.
    pub random_tie_break: bool,
    /// Seed for the tie-break RNG.
    pub seed: u64,
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            random_tie_break: true,
            seed: 42,
        }
    }
}

impl MinimaxConfig {
    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Fixed-depth alpha-beta searcher over full state clones.
pub struct MinimaxStrategy {
    config: MinimaxConfig,
    rng: GameRng,
}

impl MinimaxStrategy {
    #[must_use]
    pub fn new(config: MinimaxConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self { config, rng }
    }

    /// Leaf evaluation for `me`: resolved-score lead over the average
    /// opponent, with a light reward for wall coverage.
    fn evaluate(state: &GameState, me: PlayerId) -> f64 {
        let lead = f64::from(resolved_score(state, me)) - mean_opponent_score(state, me);
        lead + 0.05 * state.seat(me).board.wall_tile_count() as f64
    }

    fn minimax(state: &mut GameState, depth: u32, me: PlayerId, mut alpha: f64, mut beta: f64) -> f64 {
        if depth == 0 || state.is_over() {
            return Self::evaluate(state, me);
        }

        let current = state.current_player();
        let moves = state.legal_moves(current);

        if moves.is_empty() {
            // Seat passes; the turn advances and depth still shrinks so a
            // dry spell can never loop forever.
            let mut next = state.clone_state();
            next.pass_turn();
            return Self::minimax(&mut next, depth - 1, me, alpha, beta);
        }

        if current == me {
            let mut value = f64::NEG_INFINITY;
            for mv in &moves {
                let mut child = state.clone_state();
                child.apply(mv).expect("legal move applies on a clone");
                value = value.max(Self::minimax(&mut child, depth - 1, me, alpha, beta));
                alpha = alpha.max(value);
                if alpha >= beta {
                    break;
                }
            }
            value
        } else {
            let mut value = f64::INFINITY;
            for mv in &moves {
                let mut child = state.clone_state();
                child.apply(mv).expect("legal move applies on a clone");
                value = value.min(Self::minimax(&mut child, depth - 1, me, alpha, beta));
                beta = beta.min(value);
                if alpha >= beta {
                    break;
                }
            }
            value
        }
    }
}

impl Strategy for MinimaxStrategy {
    fn choose_move(&mut self, state: &mut GameState, legal: &[Move]) -> Option<Move> {
        if legal.is_empty() {
            return None;
        }

        let me = state.current_player();
        let mut best_value = f64::NEG_INFINITY;
        let mut best: Vec<Move> = Vec::new();

        // Each root move gets a fresh window: threading alpha across root
        // children would let pruned branches return boundary values that
        // masquerade as ties.
        for mv in legal {
            let mut child = state.clone_state();
            child.apply(mv).expect("legal move applies on a clone");
            let value = Self::minimax(
                &mut child,
                self.config.depth.saturating_sub(1),
                me,
                f64::NEG_INFINITY,
                f64::INFINITY,
            );

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
