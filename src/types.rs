//! Core data types for the game.
//!
//! Boards use flat `Vec` storage in row-major layout:
//! `cells[row * side + column]` is the square at `(column, row)`.

use derive_more::Display;
use serde::Serialize;

/// Smallest supported board side. Configured values below it are raised to it.
pub const MIN_SIDE: usize = 3;

/// The symbol a player places in a cell. `X` always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The mark to move once `step` moves have been played.
    ///
    /// Even steps belong to `X`, odd steps to `O`, regardless of the path
    /// that produced the history.
    #[inline(always)]
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }
}

/// Split a flat cell index into zero-based `(column, row)`.
#[inline(always)]
pub fn cell_coords(index: usize, side: usize) -> (usize, usize) {
    (index % side, index / side)
}

/// Join zero-based `(column, row)` back into a flat cell index.
#[inline(always)]
pub fn cell_index(column: usize, row: usize, side: usize) -> usize {
    row * side + column
}

/// A square board of `side * side` cells; `None` is an empty cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub side: usize,
    pub cells: Vec<Option<Mark>>,
}

impl Board {
    /// Create an empty board. `side` is raised to at least `MIN_SIDE`.
    pub fn new(side: usize) -> Self {
        let side = side.max(MIN_SIDE);
        Self {
            side,
            cells: vec![None; side * side],
        }
    }

    /// Number of cells on the board.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline(always)]
    pub fn in_bounds(&self, index: usize) -> bool {
        index < self.cells.len()
    }

    /// Mark at `index`, or `None` if the cell is empty or off the board.
    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    #[inline(always)]
    pub fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = Some(mark);
    }

    #[inline(always)]
    pub fn is_occupied(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// True once no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }
}

/// One immutable snapshot in the move history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub board: Board,
    /// Cell played to reach this snapshot; `None` for the game start.
    pub last_move: Option<usize>,
}

impl HistoryEntry {
    /// The empty board every game starts from.
    pub fn start(side: usize) -> Self {
        Self {
            board: Board::new(side),
            last_move: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_coords_roundtrip() {
        for side in [3, 4, 7] {
            for index in 0..side * side {
                let (column, row) = cell_coords(index, side);
                assert!(column < side && row < side);
                assert_eq!(cell_index(column, row, side), index);
            }
        }
    }

    #[test]
    fn test_board_side_clamped() {
        assert_eq!(Board::new(0).side, 3);
        assert_eq!(Board::new(2).len(), 9);
        assert_eq!(Board::new(5).len(), 25);
        assert_eq!(Board::new(40).side, 40);
        assert_eq!(Board::new(40).len(), 1_600);
    }

    #[test]
    fn test_board_get_set() {
        let mut b = Board::new(3);
        b.set(4, Mark::O);
        assert_eq!(b.get(4), Some(Mark::O));
        assert_eq!(b.get(0), None);
        assert_eq!(b.get(9), None);
        assert!(b.is_occupied(4));
        assert!(!b.in_bounds(9));
        assert_eq!(b.cells.iter().flatten().count(), 1);
    }

    #[test]
    fn test_board_full() {
        let mut b = Board::new(3);
        assert!(!b.is_full());
        for i in 0..9 {
            b.set(i, Mark::for_step(i));
        }
        assert!(b.is_full());
    }

    #[test]
    fn test_mark_parity() {
        assert_eq!(Mark::for_step(0), Mark::X);
        assert_eq!(Mark::for_step(1), Mark::O);
        assert_eq!(Mark::for_step(8), Mark::X);
        assert_eq!(Mark::O.to_string(), "O");
    }
}
