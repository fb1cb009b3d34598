//! Seat identity and deterministic randomness.
//!
//! Infrastructure the rest of the engine leans on: `PlayerId`/`PlayerMap`
//! for O(1) per-seat storage, and `GameRng` for seeded, forkable randomness
//! so games and searches are replayable.

mod player;
mod rng;

pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
