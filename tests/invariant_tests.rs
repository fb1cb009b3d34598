//! Randomized invariant sweeps over seeded playthroughs.

use proptest::prelude::*;

use azul_engine::{GameRng, GameState, PlayerId, TOTAL_TILES};

/// Play up to `max_plies` random plies and hand the state to `check`
/// after each one.
fn random_plies(seed: u64, players: usize, max_plies: u32, mut check: impl FnMut(&GameState)) {
    let names: Vec<&str> = ["a", "b", "c", "d"][..players].to_vec();
    let mut state = GameState::new(&names, seed);
    let mut rng = GameRng::new(seed.wrapping_mul(31));

    for _ in 0..max_plies {
        if state.is_over() {
            break;
        }
        let legal = state.legal_moves_current();
        match rng.choose(&legal).copied() {
            Some(mv) => state.apply(&mv).expect("generated move is legal"),
            None => state.pass_turn(),
        }
        check(&state);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn conservation_under_random_play(seed in any::<u64>(), players in 2usize..=4) {
        random_plies(seed, players, 300, |state| {
            assert_eq!(state.total_tiles(), TOTAL_TILES);
        });
    }

    #[test]
    fn staging_rows_never_exceed_capacity(seed in any::<u64>(), players in 2usize..=4) {
        random_plies(seed, players, 300, |state| {
            for (_, seat) in state.seats() {
                for row in 0..azul_engine::BOARD_SIZE {
                    assert!(seat.board.row(row).count() <= row + 1);
                }
            }
        });
    }

    #[test]
    fn scores_only_change_at_round_boundaries(seed in any::<u64>()) {
        let mut last_round = 1;
        let mut last_scores = vec![0i32; 2];
        random_plies(seed, 2, 300, |state| {
            let scores: Vec<i32> = state.seats().map(|(_, s)| s.score).collect();
            if state.round() == last_round && !state.is_over() {
                assert_eq!(scores, last_scores, "scores are frozen mid-round");
            }
            last_round = state.round();
            last_scores = scores;
        });
    }

    #[test]
    fn current_player_always_valid(seed in any::<u64>(), players in 2usize..=4) {
        random_plies(seed, players, 200, |state| {
            assert!(PlayerId::all(players).any(|p| p == state.current_player()));
        });
    }
}
