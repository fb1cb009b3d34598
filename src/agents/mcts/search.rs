//! The search loop: select, expand, roll out, backpropagate.

use tracing::trace;

use super::config::{MctsConfig, RolloutPolicy};
use super::tree::{MctsNode, MctsTree, NodeId};
use crate::agents::{mean_opponent_score, resolved_score, Strategy};
use crate::core::{GameRng, PlayerId};
use crate::game::{GameState, Move};

/// Diagnostics from the last search.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchStats {
    /// Iterations actually run.
    pub iterations: u32,
    /// Rollouts performed (one per iteration).
    pub simulations: u32,
    /// Nodes in the tree at the end of the search.
    pub nodes: usize,
    /// Wall time of the search, in microseconds.
    pub time_us: u64,
}

/// UCT-based Monte Carlo Tree Search agent.
pub struct MctsStrategy {
    config: MctsConfig,
    rng: GameRng,
    stats: SearchStats,
    last_root_visits: Vec<(Move, u32)>,
}

impl MctsStrategy {
    #[must_use]
    pub fn new(config: MctsConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            config,
            rng,
            stats: SearchStats::default(),
            last_root_visits: Vec::new(),
        }
    }

    /// Diagnostics from the most recent `choose_move`.
    #[must_use]
    pub fn last_stats(&self) -> &SearchStats {
        &self.stats
    }

    /// (move, visits) for every root child of the most recent search.
    #[must_use]
    pub fn last_root_visits(&self) -> &[(Move, u32)] {
        &self.last_root_visits
    }

    /// Descend by UCT while the node is fully expanded, then expand one
    /// untried move. Returns the node to roll out from.
    fn select_and_expand(&mut self, tree: &mut MctsTree) -> NodeId {
        let mut current = tree.root();

        while tree.get(current).is_fully_expanded() {
            current = self.uct_child(tree, current);
        }

        let untried_count = tree.get(current).untried.len();
        if untried_count == 0 {
            // Terminal (or moveless) leaf; roll out from here as-is.
            return current;
        }

        let pick = self.rng.gen_range_usize(0..untried_count);
        let mv = tree.get_mut(current).untried.swap_remove(pick);

        let mut child_state = tree.get_mut(current).state.clone_state();
        child_state
            .apply(&mv)
            .expect("untried move comes from this node's legal set");

        tree.alloc(MctsNode::new(current, Some(mv), child_state))
    }

    /// Child with the best UCT score. Unvisited children rank infinitely
    /// high, so every child is tried once before any is revisited.
    fn uct_child(&self, tree: &MctsTree, node: NodeId) -> NodeId {
        let parent_visits = tree.get(node).visits.max(1);
        let ln_parent = f64::from(parent_visits).ln();
        let c = self.config.exploration_constant;

        let mut best = tree.get(node).children[0];
        let mut best_score = f64::NEG_INFINITY;
        for &child_id in &tree.get(node).children {
            let child = tree.get(child_id);
            let score = if child.visits == 0 {
                f64::INFINITY
            } else {
                child.mean_reward() + c * (ln_parent / f64::from(child.visits)).sqrt()
            };
            if score > best_score {
                best_score = score;
                best = child_id;
            }
        }
        best
    }

    /// Play a state forward to a terminal (or ply-capped) position and
    /// score it for the root seat.
    fn rollout(&mut self, mut sim: GameState, root_player: PlayerId) -> f64 {
        let mut plies = 0;

        while !sim.is_over() && plies < self.config.max_rollout_plies {
            let moves = sim.legal_moves_current();
            if moves.is_empty() {
                sim.pass_turn();
                plies += 1;
                continue;
            }

            let mv = match self.config.rollout {
                RolloutPolicy::Random => *self
                    .rng
                    .choose(&moves)
                    .expect("non-empty move list always yields a choice"),
                RolloutPolicy::Greedy => greedy_rollout_move(&sim, &moves),
            };
            sim.apply(&mv).expect("legal move applies during rollout");
            plies += 1;
        }

        reward(&sim, root_player)
    }

    fn backpropagate(tree: &mut MctsTree, mut node: NodeId, value: f64) {
        while !node.is_none() {
            let n = tree.get_mut(node);
            n.visits += 1;
            n.total_reward += value;
            node = n.parent;
        }
    }
}

/// Reward for the root seat: resolved-score lead over the mean opponent.
/// Resolved previews keep ply-capped rollouts that stop mid-round
/// meaningful; at a true terminal the preview adds nothing.
fn reward(state: &GameState, root_player: PlayerId) -> f64 {
    f64::from(resolved_score(state, root_player)) - mean_opponent_score(state, root_player)
}

/// One-ply greedy rollout move: best immediate resolved-score delta for
/// the seat about to act.
///
/// A draft only ever touches the mover's own board, so the preview runs
/// on a board copy instead of a full state clone.
fn greedy_rollout_move(state: &GameState, moves: &[Move]) -> Move {
    use crate::game::{Destination, MoveSource};

    let mover = state.current_player();
    let board = &state.seat(mover).board;
    let before = board.clone().resolve_round().points;

    let mut best = moves[0];
    let mut best_delta = i32::MIN;
    for mv in moves {
        let taken = match mv.source {
            MoveSource::Display(i) => state.displays()[i].count_of(mv.color),
            MoveSource::Center => state.center().count_of(mv.color),
        };
        let claims_marker =
            mv.source == MoveSource::Center && state.center().has_marker();

        let mut preview = board.clone();
        match mv.dest {
            Destination::Row(row) => {
                preview.place(row, mv.color, taken, true);
            }
            Destination::Floor => preview.drop_to_floor(mv.color, taken),
        }
        if claims_marker {
            preview.take_marker();
        }

        let delta = preview.resolve_round().points - before;
        if delta > best_delta {
            best_delta = delta;
            best = *mv;
        }
    }
    best
}

impl Strategy for MctsStrategy {
    fn choose_move(&mut self, state: &mut GameState, legal: &[Move]) -> Option<Move> {
        if legal.is_empty() {
            return None;
        }
        if legal.len() == 1 {
            return Some(legal[0]);
        }

        let start = std::time::Instant::now();
        let root_player = state.current_player();
        let mut tree = MctsTree::new(state.clone_state());
        self.stats = SearchStats::default();

        for _ in 0..self.config.iterations {
            let node = self.select_and_expand(&mut tree);
            let rollout_state = tree.get_mut(node).state.clone_state();
            let value = self.rollout(rollout_state, root_player);
            Self::backpropagate(&mut tree, node, value);

            self.stats.iterations += 1;
            self.stats.simulations += 1;
        }

        self.stats.nodes = tree.len();
        self.stats.time_us = start.elapsed().as_micros() as u64;
        self.last_root_visits = tree.root_visit_counts();
        trace!(
            iterations = self.stats.iterations,
            nodes = self.stats.nodes,
            time_us = self.stats.time_us,
            "search finished"
        );

        // Robust child: highest visit count, not highest mean reward.
        tree.most_visited_root_child()
            .and_then(|n| n.move_from_parent)
            .or_else(|| self.rng.choose(legal).copied())
    }
}
