//! Game module - wires board, rules, and rng into one playable game
//!
//! The game owns all state; the turn engine borrows the board for one turn
//! at a time. Construction validates configuration up front so that turns
//! themselves cannot fail on bad config.

use anyhow::{bail, ensure, Result};

use crate::core::board::Board;
use crate::core::rng::SimpleRng;
use crate::core::rules::Rules;
use crate::core::turn::{self, SpawnEvent, TurnResult};
use crate::types::{Direction, MAX_BOARD_EDGE};

/// Number of tiles seeded onto a fresh board
const INITIAL_TILES: usize = 2;

/// A complete game: board state, rules, and deterministic RNG
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    rules: Rules,
    rng: SimpleRng,
    seed: u32,
    started: bool,
    /// Guards against a move request arriving while a turn is unresolved
    turn_in_progress: bool,
}

impl Game {
    /// Create a game; fails on invalid rules or dimensions
    pub fn new(rules: Rules, width: u8, height: u8, seed: u32) -> Result<Self> {
        rules.validate()?;
        ensure!(
            width > 0 && height > 0,
            "board dimensions {}x{} must be positive",
            width,
            height
        );
        ensure!(
            width <= MAX_BOARD_EDGE && height <= MAX_BOARD_EDGE,
            "board dimensions {}x{} exceed the maximum edge of {}",
            width,
            height,
            MAX_BOARD_EDGE
        );

        Ok(Self {
            board: Board::new(width, height),
            rules,
            rng: SimpleRng::new(seed),
            seed,
            started: false,
            turn_in_progress: false,
        })
    }

    /// Seed the initial tiles; no-op if already started
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        for _ in 0..INITIAL_TILES {
            self.spawn_tile();
        }
    }

    /// Clear the board and start over with a fresh spawn sequence
    pub fn reset(&mut self) {
        self.board.clear();
        self.turn_in_progress = false;
        self.started = false;
        self.start();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Apply one full turn: both passes, then a spawn iff anything moved
    ///
    /// The returned events are the complete observable record of the turn;
    /// a no-op move returns `moved = false` and spawns nothing.
    pub fn apply_move(&mut self, direction: Direction) -> Result<TurnResult> {
        if self.turn_in_progress {
            bail!("move requested while a turn is unresolved");
        }
        self.turn_in_progress = true;

        let mut result = turn::apply_move(&mut self.board, direction, &self.rules);
        if result.moved {
            result.spawned = self.spawn_tile();
        }

        self.turn_in_progress = false;
        Ok(result)
    }

    /// Place one tile per the spawn policy into a uniformly random empty cell
    ///
    /// Returns None when the board is full (not an error; the game is likely
    /// over, which the caller decides).
    fn spawn_tile(&mut self) -> Option<SpawnEvent> {
        let pos = self.board.random_empty_cell(&mut self.rng)?;
        let policy = self.rules.spawn();
        let value = if self.rng.roll_percent(policy.alternate_percent) {
            policy.alternate
        } else {
            policy.base
        };
        self.board.set(pos, Some(value));
        Some(SpawnEvent { pos, value })
    }

    /// True when no direction would change the board
    ///
    /// Probes each direction against a scratch copy; the real board is
    /// untouched.
    pub fn no_moves_available(&self) -> bool {
        if !self.board.is_full() {
            return false;
        }
        Direction::ALL.iter().all(|&direction| {
            let mut probe = self.board.clone();
            !turn::apply_move(&mut probe, direction, &self.rules).moved
        })
    }
}
