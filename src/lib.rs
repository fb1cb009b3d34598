//! # azul-engine
//!
//! A turn-based tile-drafting board game engine plus three search agents
//! that play it: a one-ply greedy evaluator, a depth-limited minimax
//! searcher with alpha-beta pruning, and Monte Carlo Tree Search with UCT
//! selection.
//!
//! ## Design Principles
//!
//! 1. **One mutation entrypoint**: the authoritative `GameState` changes
//!    only through `apply` (and `pass_turn`). Draft, placement, scoring,
//!    and round transitions all run inside it, so the state can never be
//!    observed mid-transition.
//!
//! 2. **Search over clones**: every hypothetical line is played on a
//!    `clone_state` copy: structurally independent, with a forked RNG so
//!    branches are reproducible and the live game is never corrupted.
//!
//! 3. **Seeded randomness everywhere**: bag shuffles, tie-breaks, and
//!    rollouts all draw from an injectable `GameRng`; a fixed seed replays
//!    a game or a search exactly.
//!
//! ## Modules
//!
//! - `core`: seat IDs, per-seat storage, deterministic RNG
//! - `tiles`: colors and the draw-bag/discard supply
//! - `board`: staging rows, wall grid, floor line, scoring
//! - `draft`: factory displays and the center pool
//! - `game`: moves, legality, the round state machine
//! - `agents`: heuristic, greedy, minimax, and MCTS strategies
//! - `sim`: library-level match runner
//!
//! ## Example
//!
//! ```
//! use azul_engine::{GameState, GreedyConfig, GreedyStrategy, Strategy};
//!
//! let mut state = GameState::new(&["alice", "bob"], 42);
//! let mut agent = GreedyStrategy::new(GreedyConfig::default());
//!
//! let legal = state.legal_moves_current();
//! let mv = agent.choose_move(&mut state, &legal).expect("fresh game has moves");
//! state.apply(&mv).unwrap();
//! ```

pub mod agents;
pub mod board;
pub mod core;
pub mod draft;
pub mod game;
pub mod sim;
pub mod tiles;

// Re-export commonly used types
pub use crate::agents::{
    GreedyConfig, GreedyStrategy, HeuristicStrategy, MctsConfig, MctsStrategy, MinimaxConfig,
    MinimaxStrategy, RolloutPolicy, Strategy,
};
pub use crate::board::{PlayerBoard, BOARD_SIZE, FLOOR_PENALTIES, WALL_TEMPLATE};
pub use crate::core::{GameRng, PlayerId, PlayerMap};
pub use crate::draft::{CenterPool, FactoryDisplay};
pub use crate::game::{Destination, GameState, Move, MoveError, MoveSource, Phase};
pub use crate::sim::{play_game, run_series, GameSummary, SeriesSummary};
pub use crate::tiles::{Color, TileBag, ALL_COLORS, TOTAL_TILES};
