//! Decision agents: a quick heuristic, a one-ply greedy evaluator, a
//! depth-limited minimax searcher, and Monte Carlo Tree Search.
//!
//! All agents share one contract: given the state and its legal moves,
//! return a move, or `None` exactly when the legal set is empty. Every
//! hypothetical line is played on a `clone_state` copy; the live state is
//! never mutated during evaluation (the `&mut` receiver exists only so
//! cloning can fork the state RNG).

mod greedy;
mod heuristic;
mod mcts;
mod minimax;

pub use greedy::{GreedyConfig, GreedyStrategy};
pub use heuristic::HeuristicStrategy;
pub use mcts::{MctsConfig, MctsNode, MctsStrategy, MctsTree, NodeId, RolloutPolicy, SearchStats};
pub use minimax::{MinimaxConfig, MinimaxStrategy};

use crate::core::PlayerId;
use crate::game::{GameState, Move};

/// The "chooses a move" capability.
pub trait Strategy {
    /// Pick one of `legal` for the current player of `state`.
    ///
    /// Returns `None` only when `legal` is empty (the caller treats this
    /// as a pass). Implementations must leave the observable game state
    /// untouched.
    fn choose_move(&mut self, state: &mut GameState, legal: &[Move]) -> Option<Move>;
}

/// A seat's score as if its board resolved right now.
///
/// Mid-round scores barely move (placement points land at round end), so
/// one-ply evaluations preview the resolution on a copied board instead of
/// waiting for it. On a board with nothing pending this is just the score.
#[must_use]
pub fn resolved_score(state: &GameState, player: PlayerId) -> i32 {
    let seat = state.seat(player);
    let preview = seat.board.clone().resolve_round();
    seat.score + preview.points
}

/// Mean resolved score of every seat except `player`.
#[must_use]
pub(crate) fn mean_opponent_score(state: &GameState, player: PlayerId) -> f64 {
    let others: i32 = PlayerId::all(state.player_count())
        .filter(|&p| p != player)
        .map(|p| resolved_score(state, p))
        .sum();
    others as f64 / (state.player_count() - 1).max(1) as f64
}
