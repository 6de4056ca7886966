//! Game rules for tic-tac-toe.
//!
//! Pure functions deriving terminal status from cell contents. Nothing here
//! is cached: every query rescans the board, so results can never go stale
//! after a mutation.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, lines};

use crate::board::Board;
use crate::types::{Cell, Mark};
use serde::{Deserialize, Serialize};

/// Current status of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Play continues.
    InProgress,
    /// A line is complete.
    Won(Mark),
    /// Full board, no winner.
    Draw,
}

/// Derives the status of `board`.
pub fn status(board: &Board) -> GameStatus {
    if let Some(mark) = check_winner(board) {
        GameStatus::Won(mark)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

impl Board {
    /// The 8 lines in scan order: rows, columns, main diagonal, anti-diagonal.
    pub fn lines(&self) -> impl Iterator<Item = [Cell; 3]> + '_ {
        lines(self)
    }

    /// Mark of the first complete line, if any.
    pub fn winner(&self) -> Option<Mark> {
        check_winner(self)
    }

    /// Checks if every cell is filled.
    pub fn is_full(&self) -> bool {
        is_full(self)
    }

    /// Full board with no winner.
    pub fn is_draw(&self) -> bool {
        is_draw(self)
    }

    /// Neither won nor drawn.
    pub fn is_active(&self) -> bool {
        self.winner().is_none() && !self.is_draw()
    }

    /// Derived status of this position.
    pub fn status(&self) -> GameStatus {
        status(self)
    }
}
