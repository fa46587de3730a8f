//! Game state and the intent reducer.
//!
//! `Game` owns the board history, the active step, the player to move and
//! the move-list ordering. UI events arrive as [`Intent`]s and are applied by
//! [`Game::apply`]; refused intents leave the state untouched.

use crate::config::GameConfig;
use crate::types::{Board, HistoryEntry, Mark};
use crate::view::{self, GameView};
use crate::win::{self, Lines, WinResult};
use derive_more::{Display, Error};
use serde::Deserialize;

/// A user action against the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Intent {
    /// Place the next mark on a cell.
    Move(usize),
    /// Travel to a history step.
    Jump(usize),
    /// Flip the move-list display order.
    ToggleOrder,
}

impl Intent {
    /// Decode an intent from DOM `data-intent` / `data-value` attributes.
    pub fn from_dataset(kind: &str, value: Option<&str>) -> Option<Self> {
        let number = || value.and_then(|v| v.trim().parse::<usize>().ok());
        match kind {
            "move" => number().map(Intent::Move),
            "jump" => number().map(Intent::Jump),
            "toggle-order" => Some(Intent::ToggleOrder),
            _ => None,
        }
    }
}

/// Why an intent was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum Rejection {
    #[display("game already won by {winner}")]
    GameOver { winner: Mark },
    #[display("cell {cell} is already occupied")]
    Occupied { cell: usize },
    #[display("cell {cell} is outside a board of {len} cells")]
    CellOutOfRange { cell: usize, len: usize },
    #[display("step {step} is outside a history of {len} entries")]
    StepOutOfRange { step: usize, len: usize },
}

/// Derived game status for the active board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Status {
    #[display("Next player: {_0}")]
    InProgress(Mark),
    #[display("Winner {_0}")]
    Won(Mark),
    #[display("The game ends in a draw.")]
    Draw,
}

#[derive(Debug, Clone)]
pub struct Game {
    side: usize,
    lines: Lines,
    history: Vec<HistoryEntry>,
    active_step: usize,
    x_is_next: bool,
    reversed: bool,
}

impl Game {
    pub fn new(config: &GameConfig) -> Self {
        let side = config.side();
        Self {
            side,
            lines: Lines::new(side),
            history: vec![HistoryEntry::start(side)],
            active_step: 0,
            x_is_next: true,
            reversed: false,
        }
    }

    pub fn with_side(side: usize) -> Self {
        Self::new(&GameConfig::with_side(side))
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn active_step(&self) -> usize {
        self.active_step
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    pub fn next_player(&self) -> Mark {
        if self.x_is_next {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// The history entry currently displayed and played against.
    pub fn current(&self) -> &HistoryEntry {
        &self.history[self.active_step]
    }

    pub fn current_board(&self) -> &Board {
        &self.current().board
    }

    /// Evaluate the active board from scratch.
    pub fn winner(&self) -> WinResult {
        win::evaluate_with(self.current_board(), &self.lines)
    }

    pub fn status(&self) -> Status {
        match self.winner().winner {
            Some(mark) => Status::Won(mark),
            None if self.current_board().is_full() => Status::Draw,
            None => Status::InProgress(self.next_player()),
        }
    }

    /// Play the next mark on `cell`.
    ///
    /// Any history beyond the active step is discarded before the new
    /// snapshot is appended.
    pub fn try_move(&mut self, cell: usize) -> Result<(), Rejection> {
        let board = self.current_board();
        if !board.in_bounds(cell) {
            return Err(Rejection::CellOutOfRange {
                cell,
                len: board.len(),
            });
        }
        if let Some(winner) = self.winner().winner {
            return Err(Rejection::GameOver { winner });
        }
        if board.is_occupied(cell) {
            return Err(Rejection::Occupied { cell });
        }

        let mut board = board.clone();
        board.set(cell, self.next_player());

        self.history.truncate(self.active_step + 1);
        self.history.push(HistoryEntry {
            board,
            last_move: Some(cell),
        });
        self.active_step = self.history.len() - 1;
        self.x_is_next = !self.x_is_next;
        Ok(())
    }

    /// Travel to `step`. The player to move is recomputed from parity.
    pub fn try_jump(&mut self, step: usize) -> Result<(), Rejection> {
        if step >= self.history.len() {
            return Err(Rejection::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        self.active_step = step;
        self.x_is_next = Mark::for_step(step) == Mark::X;
        Ok(())
    }

    pub fn toggle_move_order(&mut self) {
        self.reversed = !self.reversed;
    }

    /// Apply one intent. Returns `true` if the state changed.
    pub fn apply(&mut self, intent: Intent) -> bool {
        let outcome = match intent {
            Intent::Move(cell) => self.try_move(cell),
            Intent::Jump(step) => self.try_jump(step),
            Intent::ToggleOrder => {
                self.toggle_move_order();
                Ok(())
            }
        };
        match outcome {
            Ok(()) => {
                log::debug!(
                    "{:?} applied: step {}/{}, {}",
                    intent,
                    self.active_step,
                    self.history.len() - 1,
                    self.status()
                );
                true
            }
            Err(rejection) => {
                log::debug!("{:?} ignored: {}", intent, rejection);
                false
            }
        }
    }

    pub fn handle_move(&mut self, cell: usize) -> bool {
        self.apply(Intent::Move(cell))
    }

    pub fn jump_to(&mut self, step: usize) -> bool {
        self.apply(Intent::Jump(step))
    }

    /// Project the state into everything a renderer needs.
    pub fn view(&self) -> GameView {
        view::game_view(self)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
