//! Board module - manages the game grid
//!
//! The board is a width x height grid where each cell is empty or holds one
//! tile value. Uses flat row-major storage. Dimensions are configurable and
//! need not be square; every consumer must index with the axis-appropriate
//! size. Coordinates: (x, y) with x 0..width (left to right) and y 0..height
//! (top to bottom).

use crate::core::rng::SimpleRng;
use crate::types::{Cell, Pos, TileValue};

/// The game board - owns all cell state, exactly one value-or-empty per cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Calculate flat index from a position
    /// Returns None if out of bounds
    #[inline(always)]
    fn index(&self, pos: Pos) -> Option<usize> {
        if pos.x < 0 || pos.x >= self.width as i8 || pos.y < 0 || pos.y >= self.height as i8 {
            return None;
        }
        Some(pos.y as usize * self.width as usize + pos.x as usize)
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position
    /// Returns None if out of bounds, Some(None) for an empty in-bounds cell
    pub fn get(&self, pos: Pos) -> Option<Cell> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Set cell at position, overwriting whatever was there
    /// Returns false (no mutation) if out of bounds
    pub fn set(&mut self, pos: Pos, cell: Cell) -> bool {
        match self.index(pos) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and holds a tile
    pub fn has_tile(&self, pos: Pos) -> bool {
        matches!(self.get(pos), Some(Some(_)))
    }

    /// Number of occupied cells
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// All currently empty positions, in row-major order
    pub fn empty_cells(&self) -> Vec<Pos> {
        let mut empties = Vec::new();
        for y in 0..self.height as i8 {
            for x in 0..self.width as i8 {
                let pos = Pos::new(x, y);
                if !self.has_tile(pos) {
                    empties.push(pos);
                }
            }
        }
        empties
    }

    /// Uniformly sample one empty cell, or None when the board is full
    ///
    /// Collects all empty cells first so no board region is favored.
    pub fn random_empty_cell(&self, rng: &mut SimpleRng) -> Option<Pos> {
        let empties = self.empty_cells();
        if empties.is_empty() {
            return None;
        }
        let idx = rng.next_range(empties.len() as u32) as usize;
        Some(empties[idx])
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Build a board from rows of face values, 0 meaning empty
    ///
    /// Intended for tests and fixtures; row lengths must agree.
    pub fn from_rows(rows: &[Vec<u32>]) -> Self {
        let height = rows.len() as u8;
        let width = rows.first().map_or(0, |row| row.len()) as u8;
        assert!(rows.iter().all(|row| row.len() == width as usize));

        let mut board = Self::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                if value != 0 {
                    board.set(Pos::new(x as i8, y as i8), Some(TileValue::new(value)));
                }
            }
        }
        board
    }

    /// Dump the board as rows of face values, 0 meaning empty
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        (0..self.height as i8)
            .map(|y| {
                (0..self.width as i8)
                    .map(|x| match self.get(Pos::new(x, y)) {
                        Some(Some(value)) => value.get(),
                        _ => 0,
                    })
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new(4, 4);
        assert_eq!(board.index(Pos::new(0, 0)), Some(0));
        assert_eq!(board.index(Pos::new(3, 0)), Some(3));
        assert_eq!(board.index(Pos::new(0, 1)), Some(4));
        assert_eq!(board.index(Pos::new(3, 3)), Some(15));
        assert_eq!(board.index(Pos::new(-1, 0)), None);
        assert_eq!(board.index(Pos::new(4, 0)), None);
        assert_eq!(board.index(Pos::new(0, 4)), None);
    }

    #[test]
    fn test_non_square_indexing_uses_width() {
        let board = Board::new(2, 4);
        assert_eq!(board.index(Pos::new(1, 0)), Some(1));
        assert_eq!(board.index(Pos::new(0, 1)), Some(2));
        assert_eq!(board.index(Pos::new(1, 3)), Some(7));
        assert_eq!(board.index(Pos::new(2, 0)), None);
        assert_eq!(board.index(Pos::new(0, 4)), None);
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new(4, 4);
        let two = TileValue::new(2);

        assert!(board.set(Pos::new(1, 2), Some(two)));
        assert_eq!(board.get(Pos::new(1, 2)), Some(Some(two)));
        assert!(board.has_tile(Pos::new(1, 2)));

        assert!(board.set(Pos::new(1, 2), None));
        assert_eq!(board.get(Pos::new(1, 2)), Some(None));
        assert!(!board.has_tile(Pos::new(1, 2)));
    }

    #[test]
    fn test_out_of_bounds_set_is_rejected() {
        let mut board = Board::new(4, 4);
        assert!(!board.set(Pos::new(-1, 0), Some(TileValue::new(2))));
        assert!(!board.set(Pos::new(0, 4), Some(TileValue::new(2))));
        assert_eq!(board.tile_count(), 0);
    }

    #[test]
    fn test_rows_roundtrip() {
        let rows = vec![vec![2, 0, 4, 0], vec![0, 0, 0, 0], vec![8, 8, 0, 2]];
        let board = Board::from_rows(&rows);
        assert_eq!(board.width(), 4);
        assert_eq!(board.height(), 3);
        assert_eq!(board.to_rows(), rows);
        assert_eq!(board.tile_count(), 5);
    }

    #[test]
    fn test_random_empty_cell_uniform_support() {
        let mut board = Board::new(2, 2);
        board.set(Pos::new(0, 0), Some(TileValue::new(2)));
        board.set(Pos::new(1, 1), Some(TileValue::new(4)));

        // Both remaining empties must be reachable.
        let mut rng = SimpleRng::new(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..64 {
            seen.insert(board.random_empty_cell(&mut rng).unwrap());
        }
        assert_eq!(
            seen,
            [Pos::new(1, 0), Pos::new(0, 1)].into_iter().collect()
        );
    }

    #[test]
    fn test_random_empty_cell_full_board() {
        let board = Board::from_rows(&[vec![2, 4], vec![8, 16]]);
        let mut rng = SimpleRng::new(1);
        assert!(board.is_full());
        assert_eq!(board.random_empty_cell(&mut rng), None);
    }
}
