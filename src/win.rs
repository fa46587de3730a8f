//! Win detection.
//!
//! A winning line is any full row, full column, or one of the two main
//! diagonals, all holding the same mark. Lines are checked in that order
//! (rows, columns, main diagonal, anti-diagonal), so on a 3×3 board the
//! table is exactly the classic eight triples.

use crate::types::{cell_index, Board, Mark};
use serde::Serialize;

/// Pre-computed winning lines for one board side.
///
/// Every line has exactly `side` cells, stored back to back in `data`.
#[derive(Debug, Clone)]
pub struct Lines {
    pub side: usize,
    data: Vec<usize>,
}

impl Lines {
    /// Build the line table for a `side * side` board.
    pub fn new(side: usize) -> Self {
        let mut data = Vec::with_capacity((2 * side + 2) * side);

        for row in 0..side {
            data.extend((0..side).map(|column| cell_index(column, row, side)));
        }
        for column in 0..side {
            data.extend((0..side).map(|row| cell_index(column, row, side)));
        }
        data.extend((0..side).map(|i| cell_index(i, i, side)));
        data.extend((0..side).map(|i| cell_index(side - 1 - i, i, side)));

        Self { side, data }
    }

    pub fn iter(&self) -> impl Iterator<Item = &[usize]> {
        self.data.chunks_exact(self.side.max(1))
    }
}

/// Outcome of evaluating one board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct WinResult {
    pub winner: Option<Mark>,
    /// Cells of the winning line; empty when there is no winner.
    pub line: Vec<usize>,
}

impl WinResult {
    pub fn none() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn contains(&self, index: usize) -> bool {
        self.line.contains(&index)
    }
}

/// Evaluate `board` against every line of its side.
pub fn evaluate(board: &Board) -> WinResult {
    evaluate_with(board, &Lines::new(board.side))
}

/// Evaluate `board` against a pre-built line table.
///
/// The first uniformly marked line wins. `lines.side` must equal `board.side`.
pub fn evaluate_with(board: &Board, lines: &Lines) -> WinResult {
    debug_assert_eq!(lines.side, board.side);

    for line in lines.iter() {
        let Some(mark) = board.get(line[0]) else {
            continue;
        };
        if line[1..].iter().all(|&i| board.get(i) == Some(mark)) {
            return WinResult {
                winner: Some(mark),
                line: line.to_vec(),
            };
        }
    }

    WinResult::none()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(side: usize, marks: &[(usize, Mark)]) -> Board {
        let mut b = Board::new(side);
        for &(i, m) in marks {
            b.set(i, m);
        }
        b
    }

    #[test]
    fn test_lines_classic_table() {
        let table = Lines::new(3);
        let lines: Vec<&[usize]> = table.iter().collect();
        let expected: [[usize; 3]; 8] = [
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8],
            [0, 3, 6],
            [1, 4, 7],
            [2, 5, 8],
            [0, 4, 8],
            [2, 4, 6],
        ];
        assert_eq!(lines.len(), 8);
        for (line, want) in lines.iter().zip(expected.iter()) {
            assert_eq!(*line, want);
        }
    }

    #[test]
    fn test_lines_general_side() {
        let table = Lines::new(5);
        let lines: Vec<&[usize]> = table.iter().collect();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[10], &[0, 6, 12, 18, 24]);
        assert_eq!(lines[11], &[4, 8, 12, 16, 20]);
        assert!(lines.iter().all(|l| l.len() == 5));
    }

    #[test]
    fn test_no_winner_empty_board() {
        let result = evaluate(&Board::new(3));
        assert_eq!(result, WinResult::none());
        assert!(result.line.is_empty());
    }

    #[test]
    fn test_winner_top_row() {
        let b = board_from(3, &[(0, Mark::X), (1, Mark::X), (2, Mark::X), (4, Mark::O), (5, Mark::O)]);
        let result = evaluate(&b);
        assert_eq!(result.winner, Some(Mark::X));
        assert_eq!(result.line, vec![0, 1, 2]);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let b = board_from(3, &[(2, Mark::O), (4, Mark::O), (6, Mark::O)]);
        let result = evaluate(&b);
        assert_eq!(result.winner, Some(Mark::O));
        assert_eq!(result.line, vec![2, 4, 6]);
        assert!(result.contains(4));
        assert!(!result.contains(0));
    }

    #[test]
    fn test_mixed_line_no_winner() {
        let b = board_from(3, &[(0, Mark::X), (1, Mark::O), (2, Mark::X)]);
        assert_eq!(evaluate(&b).winner, None);
    }

    #[test]
    fn test_four_by_four_column() {
        let b = board_from(4, &[(1, Mark::O), (5, Mark::O), (9, Mark::O), (13, Mark::O)]);
        let result = evaluate(&b);
        assert_eq!(result.winner, Some(Mark::O));
        assert_eq!(result.line, vec![1, 5, 9, 13]);
    }

    #[test]
    fn test_three_in_a_row_not_enough_on_four_by_four() {
        let b = board_from(4, &[(0, Mark::X), (1, Mark::X), (2, Mark::X)]);
        assert_eq!(evaluate(&b).winner, None);
    }

    #[test]
    fn test_breaking_any_winning_cell_removes_that_line() {
        let b = board_from(3, &[(0, Mark::X), (4, Mark::X), (8, Mark::X)]);
        let result = evaluate(&b);
        assert_eq!(result.winner, Some(Mark::X));

        for &cell in &result.line {
            let mut broken = b.clone();
            broken.cells[cell] = Some(Mark::O);
            let after = evaluate(&broken);
            assert_ne!(after.line, result.line, "line survived flipping cell {}", cell);
            assert_ne!(after.winner, Some(Mark::X));
        }
    }

    #[test]
    fn test_evaluate_idempotent() {
        let b = board_from(3, &[(0, Mark::X), (3, Mark::O), (1, Mark::X), (4, Mark::O), (2, Mark::X)]);
        assert_eq!(evaluate(&b), evaluate(&b));
        let lines = Lines::new(3);
        assert_eq!(evaluate_with(&b, &lines), evaluate(&b));
    }

    #[test]
    fn test_winner_reported_only_for_uniform_lines() {
        // Every reachable-looking 3×3 pattern from a fixed fill order.
        for mask in 0u32..(1 << 9) {
            let mut b = Board::new(3);
            for i in 0..9 {
                if mask & (1 << i) != 0 {
                    b.set(i, if i % 3 == 0 { Mark::O } else { Mark::X });
                }
            }
            let result = evaluate(&b);
            if let Some(mark) = result.winner {
                assert_eq!(result.line.len(), 3);
                assert!(result.line.iter().all(|&i| b.get(i) == Some(mark)));
            } else {
                assert!(result.line.is_empty());
            }
        }
    }
}
