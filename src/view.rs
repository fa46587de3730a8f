//! Render projection: pure functions from game state to view data.
//!
//! Nothing here mutates state. The DOM renderer and JS hosts both consume
//! [`GameView`]; rendering the same state twice yields equal views.

use crate::game::Game;
use crate::types::{cell_coords, Board, HistoryEntry};
use crate::win::WinResult;
use serde::Serialize;

pub const SQUARE_CLASS: &str = "square";
pub const WINNER_SQUARE_CLASS: &str = "squareWinner";
pub const ROW_CLASS: &str = "board-row";

// ─── Square / Board ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SquareView {
    pub index: usize,
    pub label: String,
    pub winning: bool,
    pub class_name: &'static str,
}

pub fn square_view(board: &Board, index: usize, win: &WinResult) -> SquareView {
    let winning = win.contains(index);
    SquareView {
        index,
        label: board.get(index).map(|m| m.to_string()).unwrap_or_default(),
        winning,
        class_name: if winning {
            WINNER_SQUARE_CLASS
        } else {
            SQUARE_CLASS
        },
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub side: usize,
    /// `side` rows of `side` squares; row `r` starts at cell `r * side`.
    pub rows: Vec<Vec<SquareView>>,
}

pub fn board_view(board: &Board, win: &WinResult) -> BoardView {
    let side = board.side;
    let rows = (0..side)
        .map(|row| {
            let offset = row * side;
            (offset..offset + side)
                .map(|index| square_view(board, index, win))
                .collect()
        })
        .collect();
    BoardView { side, rows }
}

// ─── Move history ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveView {
    /// Jump target. Unaffected by display order.
    pub step: usize,
    pub label: String,
    pub location: Option<String>,
    pub active: bool,
}

pub fn move_label(step: usize) -> String {
    if step == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{}", step)
    }
}

/// 1-indexed `(column, row)` text for a cell.
pub fn location_text(index: usize, side: usize) -> String {
    let (column, row) = cell_coords(index, side);
    format!("(column {}, row {})", column + 1, row + 1)
}

pub fn history_view(
    history: &[HistoryEntry],
    active_step: usize,
    side: usize,
    reversed: bool,
) -> Vec<MoveView> {
    let mut moves: Vec<MoveView> = history
        .iter()
        .enumerate()
        .map(|(step, entry)| MoveView {
            step,
            label: move_label(step),
            location: entry.last_move.map(|i| location_text(i, side)),
            active: step == active_step,
        })
        .collect();
    if reversed {
        moves.reverse();
    }
    moves
}

// ─── Whole game ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub status: String,
    pub board: BoardView,
    pub moves: Vec<MoveView>,
    pub reversed: bool,
    pub winner: WinResult,
}

pub fn game_view(game: &Game) -> GameView {
    let winner = game.winner();
    GameView {
        status: game.status().to_string(),
        board: board_view(game.current_board(), &winner),
        moves: history_view(
            game.history(),
            game.active_step(),
            game.side(),
            game.is_reversed(),
        ),
        reversed: game.is_reversed(),
        winner,
    }
}
