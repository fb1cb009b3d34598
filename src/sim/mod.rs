//! Library-level match runner: drive whole games between strategies and
//! tally series results. No I/O, no argument parsing; callers own both.

use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::{debug, warn};

use crate::agents::Strategy;
use crate::game::GameState;

/// Rounds before a game is abandoned as stuck. Real games end in well
/// under a hundred rounds; this only guards degenerate strategy loops.
const MAX_ROUNDS: u32 = 500;

/// Result of one finished game.
#[derive(Clone, Debug, Serialize)]
pub struct GameSummary {
    /// Final score per seat, in seat order.
    pub scores: Vec<(String, i32)>,
    /// Seats by descending score; ties keep seat order.
    pub ranking: Vec<(String, i32)>,
    /// Rounds played.
    pub rounds: u32,
}

impl GameSummary {
    /// Name of the top-ranked seat.
    #[must_use]
    pub fn winner(&self) -> &str {
        &self.ranking[0].0
    }

    /// True when the two best seats finished level (no tiebreak exists).
    #[must_use]
    pub fn is_tie(&self) -> bool {
        self.ranking.len() > 1 && self.ranking[0].1 == self.ranking[1].1
    }
}

/// Aggregate of a series of games.
#[derive(Clone, Debug, Default, Serialize)]
pub struct SeriesSummary {
    /// Games played.
    pub games: u32,
    /// Outright wins per seat name.
    pub wins: FxHashMap<String, u32>,
    /// Games where the top score was shared.
    pub ties: u32,
}

/// Play one game to completion.
///
/// `strategies` pair with `names` by seat order. An agent returning no
/// move, or a move the engine rejects, forfeits that turn; the engine
/// never applies a corrected move on its own.
pub fn play_game(names: &[&str], strategies: &mut [Box<dyn Strategy>], seed: u64) -> GameSummary {
    assert_eq!(
        names.len(),
        strategies.len(),
        "one strategy per seat required"
    );

    let mut state = GameState::new(names, seed);

    while !state.is_over() && state.round() <= MAX_ROUNDS {
        let current = state.current_player();
        let legal = state.legal_moves(current);
        if legal.is_empty() {
            state.pass_turn();
            continue;
        }

        match strategies[current.index()].choose_move(&mut state, &legal) {
            Some(mv) => {
                if let Err(err) = state.apply(&mv) {
                    warn!(%current, %mv, %err, "agent move rejected, seat passes");
                    state.pass_turn();
                }
            }
            None => state.pass_turn(),
        }
    }

    let scores: Vec<(String, i32)> = state
        .seats()
        .map(|(_, seat)| (seat.name.clone(), seat.score))
        .collect();
    let ranking: Vec<(String, i32)> = state
        .ranking()
        .into_iter()
        .map(|(p, score)| (state.seat(p).name.clone(), score))
        .collect();
    let winner = ranking[0].0.as_str();
    debug!(rounds = state.round(), winner, "game finished");

    GameSummary {
        scores,
        ranking,
        rounds: state.round(),
    }
}

/// Play `games` games, reseeding each one as `base_seed + index`, and
/// tally outright wins and ties.
pub fn run_series(
    games: u32,
    names: &[&str],
    strategies: &mut [Box<dyn Strategy>],
    base_seed: u64,
) -> SeriesSummary {
    let mut summary = SeriesSummary {
        games,
        ..SeriesSummary::default()
    };

    for i in 0..games {
        let result = play_game(names, strategies, base_seed + u64::from(i));
        if result.is_tie() {
            summary.ties += 1;
        } else {
            *summary.wins.entry(result.winner().to_string()).or_insert(0) += 1;
        }
    }

    summary
}
