//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Default board dimensions (classic 2048 is 4x4)
pub const DEFAULT_BOARD_WIDTH: u8 = 4;
pub const DEFAULT_BOARD_HEIGHT: u8 = 4;

/// Largest board edge that fits the i8 coordinate convention
pub const MAX_BOARD_EDGE: u8 = 127;

/// Default spawn split: 90% base value, 10% alternate
pub const DEFAULT_ALTERNATE_PERCENT: u8 = 10;

/// A single tile's face value (2, 4, 8, ...)
///
/// Opaque to the turn engine: merging is triggered by equality alone, and the
/// merged-into value comes from the rules table, never from arithmetic here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct TileValue(u32);

impl TileValue {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TileValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Cell on the board (None = empty, Some = tile)
pub type Cell = Option<TileValue>;

/// Board position in cell coordinates
///
/// x ranges 0..width (left to right), y ranges 0..height (top to bottom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: i8,
    pub y: i8,
}

impl Pos {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// One step along `direction`
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.vector();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// One step against `direction` (away from its destination edge)
    pub fn step_back(self, direction: Direction) -> Self {
        let (dx, dy) = direction.vector();
        Self {
            x: self.x - dx,
            y: self.y - dy,
        }
    }
}

/// Move directions
///
/// Each direction names the edge tiles slide toward: Up is the top edge
/// (y = 0), Down the bottom, Left x = 0, Right x = width-1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector pointing toward the destination edge
    pub fn vector(&self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// True when the sweep runs along the vertical axis
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Parse direction from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}
