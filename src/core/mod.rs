//! Core game logic module - pure, deterministic, and testable
//!
//! Contains the whole sliding-tile rule set with zero dependencies on UI or
//! I/O:
//!
//! - [`board`]: the grid store - cell queries, mutation, empty-cell sampling
//! - [`turn`]: the turn engine - merge pass, alignment pass, turn events
//! - [`rules`]: immutable merge-value table and spawn policy
//! - [`rng`]: seeded LCG for reproducible spawn sequences
//! - [`game`]: wiring, turn atomicity, post-turn spawning, stuck detection
//!
//! Same seed and same moves produce identical games.

pub mod board;
pub mod game;
pub mod rng;
pub mod rules;
pub mod turn;

pub use board::Board;
pub use game::Game;
pub use rng::SimpleRng;
pub use rules::{Rules, SpawnPolicy};
pub use turn::{SpawnEvent, TileEvent, TurnResult};
