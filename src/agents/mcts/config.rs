//! MCTS parameters.

use serde::{Deserialize, Serialize};

/// Policy used to play out positions below the tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RolloutPolicy {
    /// Uniform random legal moves.
    #[default]
    Random,
    /// One-ply greedy by immediate resolved-score delta for the mover.
    Greedy,
}

/// MCTS agent parameters.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct MctsConfig {
    /// Search iterations per decision.
    pub iterations: u32,

    /// UCT exploration constant `c`. Higher favors exploration.
    pub exploration_constant: f64,

    /// How rollouts pick moves.
    pub rollout: RolloutPolicy,

    /// Hard cap on rollout length, so even a malformed state terminates.
    pub max_rollout_plies: u32,

    /// Seed for the search RNG.
    pub seed: u64,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            iterations: 800,
            exploration_constant: 1.4,
            rollout: RolloutPolicy::Random,
            max_rollout_plies: 200,
            seed: 42,
        }
    }
}

impl MctsConfig {
    #[must_use]
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    #[must_use]
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    #[must_use]
    pub fn with_rollout(mut self, rollout: RolloutPolicy) -> Self {
        self.rollout = rollout;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
