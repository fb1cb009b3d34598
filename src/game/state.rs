//! The authoritative game state and its single mutation entrypoint.
//!
//! `GameState` drives the round loop: setup deals tiles to the displays,
//! drafting applies one validated move at a time, and once every source is
//! exhausted the scoring phase runs for all seats, ending the game or
//! dealing the next round. Search agents explore by applying moves to
//! `clone_state` copies; the live state is only ever mutated through
//! `apply` and `pass_turn`.

use thiserror::Error;
use tracing::debug;

use super::moves::{Destination, Move, MoveSource};
use crate::board::{PlayerBoard, BOARD_SIZE};
use crate::core::{GameRng, PlayerId, PlayerMap};
use crate::draft::{CenterPool, FactoryDisplay, DISPLAY_CAPACITY};
use crate::tiles::TileBag;

/// Externally observable phase. Round setup and scoring run inside state
/// transitions and are never observable mid-flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Players are drafting from displays and the center.
    Drafting,
    /// Terminal: final bonuses applied, no further moves accepted.
    GameOver,
}

/// Rejection of a submitted move. The engine never silently corrects a
/// move; callers must re-request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("the game is over")]
    GameOver,
    #[error("move is not legal for the current player")]
    Illegal,
}

/// One seat at the table: identity, running score, and board.
#[derive(Clone, Debug)]
pub struct PlayerSeat {
    pub name: String,
    pub score: i32,
    pub board: PlayerBoard,
}

/// Complete game state.
#[derive(Clone, Debug)]
pub struct GameState {
    seats: PlayerMap<PlayerSeat>,
    bag: TileBag,
    displays: Vec<FactoryDisplay>,
    center: CenterPool,
    round: u32,
    current: PlayerId,
    next_starter: Option<PlayerId>,
    phase: Phase,
    rng: GameRng,
}

impl GameState {
    /// Start a fresh game and deal the first round.
    ///
    /// 2 players get 5 displays; 3-4 players get 7.
    #[must_use]
    pub fn new(names: &[&str], seed: u64) -> Self {
        assert!(
            (2..=4).contains(&names.len()),
            "2-4 players supported, got {}",
            names.len()
        );

        let mut rng = GameRng::new(seed);
        let bag = TileBag::new(&mut rng);
        let display_count = if names.len() == 2 { 5 } else { 7 };

        let mut state = Self {
            seats: PlayerMap::new(names.len(), |p| PlayerSeat {
                name: names[p.index()].to_string(),
                score: 0,
                board: PlayerBoard::new(),
            }),
            bag,
            displays: (0..display_count).map(|_| FactoryDisplay::new()).collect(),
            center: CenterPool::new(),
            round: 0,
            current: PlayerId::new(0),
            next_starter: None,
            phase: Phase::Drafting,
            rng,
        };
        state.setup_round();
        state
    }

    // === Accessors ===

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.player_count()
    }

    #[must_use]
    pub fn seat(&self, player: PlayerId) -> &PlayerSeat {
        &self.seats[player]
    }

    pub fn seats(&self) -> impl Iterator<Item = (PlayerId, &PlayerSeat)> {
        self.seats.iter()
    }

    #[must_use]
    pub fn displays(&self) -> &[FactoryDisplay] {
        &self.displays
    }

    #[must_use]
    pub fn center(&self) -> &CenterPool {
        &self.center
    }

    #[must_use]
    pub fn bag(&self) -> &TileBag {
        &self.bag
    }

    /// Round counter, starting at 1.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    // === Move generation ===

    /// Every legal move for `player`, in a stable order: displays by index
    /// then the center, colors in fixed color order, legal rows ascending.
    /// The floor destination appears only when no row can take the color.
    #[must_use]
    pub fn legal_moves(&self, player: PlayerId) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }

        let board = &self.seats[player].board;
        let mut moves = Vec::new();

        let mut push_source = |source: MoveSource, colors: &[crate::tiles::Color]| {
            for &color in colors {
                let mut any_row = false;
                for row in 0..BOARD_SIZE {
                    if board.can_place(row, color) {
                        moves.push(Move {
                            source,
                            color,
                            dest: Destination::Row(row),
                        });
                        any_row = true;
                    }
                }
                if !any_row {
                    moves.push(Move {
                        source,
                        color,
                        dest: Destination::Floor,
                    });
                }
            }
        };

        for (i, display) in self.displays.iter().enumerate() {
            if !display.is_empty() {
                push_source(MoveSource::Display(i), &display.available_colors());
            }
        }
        if !self.center.is_empty() {
            push_source(MoveSource::Center, &self.center.available_colors());
        }

        moves
    }

    /// Legal moves for whoever is to act.
    #[must_use]
    pub fn legal_moves_current(&self) -> Vec<Move> {
        self.legal_moves(self.current)
    }

    /// Re-validate an externally supplied move against the legal set.
    #[must_use]
    pub fn is_legal(&self, player: PlayerId, mv: &Move) -> bool {
        player == self.current && self.legal_moves(player).contains(mv)
    }

    // === Mutation ===

    /// Apply a move for the current player.
    ///
    /// Rejects anything outside the legal set. On success the turn
    /// advances; if the draft is exhausted the scoring phase runs for every
    /// seat and the game either ends or the next round is dealt.
    pub fn apply(&mut self, mv: &Move) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.legal_moves(self.current).contains(mv) {
            return Err(MoveError::Illegal);
        }

        let (taken, took_marker) = match mv.source {
            MoveSource::Display(i) => {
                let (taken, remainder) = self.displays[i].take(mv.color);
                self.center.add(remainder);
                (taken, false)
            }
            MoveSource::Center => self.center.take(mv.color),
        };

        let seat = &mut self.seats[self.current];
        match mv.dest {
            Destination::Row(row) => {
                seat.board.place(row, mv.color, taken, true);
            }
            Destination::Floor => seat.board.drop_to_floor(mv.color, taken),
        }
        if took_marker {
            seat.board.take_marker();
            if self.next_starter.is_none() {
                self.next_starter = Some(self.current);
            }
        }

        self.advance_turn();
        Ok(())
    }

    /// Skip a seat with no legal move. Also finishes the round if the
    /// draft is already exhausted, so callers polling an empty move list
    /// cannot spin forever.
    pub fn pass_turn(&mut self) {
        if self.is_over() {
            return;
        }
        self.advance_turn();
    }

    fn advance_turn(&mut self) {
        self.current = self.current.next(self.player_count());
        if self.draft_exhausted() {
            self.finish_round();
        }
    }

    /// The draft ends when no tiles remain to take. An unclaimed marker
    /// alone cannot be drafted and so does not keep the round alive.
    fn draft_exhausted(&self) -> bool {
        self.displays.iter().all(FactoryDisplay::is_empty) && self.center.tile_count() == 0
    }

    /// Scoring phase: resolve every board, return discards to the supply,
    /// then end the game or deal the next round.
    fn finish_round(&mut self) {
        for (_, seat) in self.seats.iter_mut() {
            let res = seat.board.resolve_round();
            seat.score += res.points;
            self.bag.discard(res.discarded);
        }
        debug!(round = self.round, "round scored");

        let game_over = self
            .seats
            .iter()
            .any(|(_, seat)| seat.board.has_complete_row());
        if game_over {
            self.finish_game();
        } else {
            self.setup_round();
        }
    }

    /// Deal a new round: refill displays, reset the center and marker,
    /// hand the first turn to the marker claimant.
    fn setup_round(&mut self) {
        self.round += 1;
        self.center = CenterPool::new();
        for display in &mut self.displays {
            let tiles = self.bag.draw(DISPLAY_CAPACITY, &mut self.rng);
            display.fill(tiles);
        }
        self.current = self.next_starter.take().unwrap_or(PlayerId::new(0));

        // Supply starved dry: nothing to draft this round or ever again.
        if self.draft_exhausted() {
            self.finish_game();
        }
    }

    fn finish_game(&mut self) {
        for (_, seat) in self.seats.iter_mut() {
            seat.score += seat.board.final_bonuses();
        }
        self.phase = Phase::GameOver;
        debug!(round = self.round, "game over");
    }

    // === Results ===

    /// Seats ordered by descending score. Stable on ties: equal scores
    /// keep input order (no secondary tiebreak is defined).
    #[must_use]
    pub fn ranking(&self) -> Vec<(PlayerId, i32)> {
        let mut ranked: Vec<(PlayerId, i32)> =
            self.seats.iter().map(|(p, s)| (p, s.score)).collect();
        ranked.sort_by_key(|&(_, score)| std::cmp::Reverse(score));
        ranked
    }

    // === Cloning for search ===

    /// A structurally independent copy for hypothetical play.
    ///
    /// Takes `&mut self` because the clone's RNG is a fork: the live
    /// state's fork counter advances, nothing else changes, and every
    /// branch draws its own deterministic random stream.
    #[must_use]
    pub fn clone_state(&mut self) -> Self {
        let rng = self.rng.fork();
        Self {
            rng,
            seats: self.seats.clone(),
            bag: self.bag.clone(),
            displays: self.displays.clone(),
            center: self.center.clone(),
            round: self.round,
            current: self.current,
            next_starter: self.next_starter,
            phase: self.phase,
        }
    }

    /// Total tiles across supply, draft pools, and every board region.
    /// Constant for the whole game; exposed for invariant checks.
    #[must_use]
    pub fn total_tiles(&self) -> usize {
        let on_boards: usize = self
            .seats
            .iter()
            .map(|(_, seat)| {
                seat.board.staged_tile_count()
                    + seat.board.wall_tile_count()
                    + seat.board.floor().tile_count()
            })
            .sum();
        let on_displays: usize = self.displays.iter().map(FactoryDisplay::len).sum();

        self.bag.reserve_len()
            + self.bag.discard_len()
            + on_displays
            + self.center.tile_count()
            + on_boards
    }
}
