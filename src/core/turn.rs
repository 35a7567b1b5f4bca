//! Turn engine - applies one directional move to the board
//!
//! Two passes per turn, both sweeping destination-nearest cells first:
//!
//! 1. Adjacency-merge pass: each occupied destination looks backward along
//!    the move direction for the nearest occupied tile (empty gaps are
//!    skipped, not blockers). Equal values combine into the rules table's
//!    next value; the product is marked settled so it cannot merge again
//!    within the same turn.
//! 2. Edge-alignment pass: each empty destination pulls the nearest occupied
//!    tile toward the edge.
//!
//! Processing the cell nearest the destination edge first guarantees each
//! tile moves at most once per turn and matches the genre's merge priority
//! (edge-nearest pairs win).

use std::collections::HashSet;

use crate::core::board::Board;
use crate::core::rules::Rules;
use crate::types::{Direction, Pos, TileValue};

/// One observable sub-step of a turn, in application order
///
/// Returned to the caller for presentation; the engine holds no subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileEvent {
    /// A tile moved into an empty cell nearer the destination edge
    Slide {
        from: Pos,
        to: Pos,
        value: TileValue,
    },
    /// The tile at `from` merged into the equal-valued tile at `to`
    Merge {
        from: Pos,
        to: Pos,
        merged: TileValue,
        into: TileValue,
    },
}

/// Spawn placed after a moving turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnEvent {
    pub pos: Pos,
    pub value: TileValue,
}

/// Outcome of one complete turn
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TurnResult {
    /// True iff any tile slid or merged this turn
    pub moved: bool,
    /// Slides and merges in the order they were applied
    pub events: Vec<TileEvent>,
    /// Tile spawned after the turn, when one was
    pub spawned: Option<SpawnEvent>,
}

/// Map sweep indices to a board position for `direction`
///
/// `i` runs along the primary (sweep) axis with i = 0 at the destination
/// edge; `j` runs along the other axis. The primary axis length is the
/// height for vertical moves and the width for horizontal ones.
fn dest_position(board: &Board, direction: Direction, i: i8, j: i8) -> Pos {
    match direction {
        Direction::Up => Pos::new(j, i),
        Direction::Down => Pos::new(j, board.height() as i8 - 1 - i),
        Direction::Left => Pos::new(i, j),
        Direction::Right => Pos::new(board.width() as i8 - 1 - i, j),
    }
}

/// Sweep dimensions for `direction`: (primary axis length, secondary axis length)
fn sweep_lens(board: &Board, direction: Direction) -> (i8, i8) {
    if direction.is_vertical() {
        (board.height() as i8, board.width() as i8)
    } else {
        (board.width() as i8, board.height() as i8)
    }
}

/// Nearest occupied cell strictly behind `pos` (away from the destination edge)
///
/// Skips empty cells; gives up after at most one primary-axis length of steps
/// or when the scan falls off the board.
fn nearest_tile_behind(board: &Board, pos: Pos, direction: Direction) -> Option<Pos> {
    let (primary_len, _) = sweep_lens(board, direction);
    let mut current = pos;
    for _ in 0..primary_len {
        current = current.step_back(direction);
        match board.get(current) {
            Some(Some(_)) => return Some(current),
            Some(None) => continue,
            None => return None,
        }
    }
    None
}

/// Apply one full move to `board`: merge pass, then alignment pass
///
/// Deterministic, and idempotent on a board already settled for `direction`
/// (the second application reports `moved = false`). Spawning is the caller's
/// job; `spawned` is left empty here.
pub fn apply_move(board: &mut Board, direction: Direction, rules: &Rules) -> TurnResult {
    let mut result = TurnResult::default();
    let (primary_len, secondary_len) = sweep_lens(board, direction);

    // Pass 1: merges. Cells that became merge products this turn are settled
    // and may not merge again.
    let mut settled: HashSet<Pos> = HashSet::new();
    for i in 0..primary_len {
        for j in 0..secondary_len {
            let dest = dest_position(board, direction, i, j);
            let Some(Some(dest_value)) = board.get(dest) else {
                continue;
            };
            if settled.contains(&dest) {
                continue;
            }
            let Some(origin) = nearest_tile_behind(board, dest, direction) else {
                continue;
            };
            let Some(Some(origin_value)) = board.get(origin) else {
                continue;
            };
            if origin_value != dest_value {
                continue;
            }
            // Cap-value pairs have no next value and stay apart.
            let Some(merged_value) = rules.next_value(dest_value) else {
                continue;
            };

            board.set(dest, Some(merged_value));
            board.set(origin, None);
            settled.insert(dest);
            result.events.push(TileEvent::Merge {
                from: origin,
                to: dest,
                merged: origin_value,
                into: merged_value,
            });
            result.moved = true;
        }
    }

    // Pass 2: slide everything flush against the destination edge.
    for i in 0..primary_len {
        for j in 0..secondary_len {
            let dest = dest_position(board, direction, i, j);
            if board.has_tile(dest) {
                continue;
            }
            let Some(origin) = nearest_tile_behind(board, dest, direction) else {
                continue;
            };
            let Some(Some(value)) = board.get(origin) else {
                continue;
            };

            board.set(dest, Some(value));
            board.set(origin, None);
            result.events.push(TileEvent::Slide {
                from: origin,
                to: dest,
                value,
            });
            result.moved = true;
        }
    }

    result
}
