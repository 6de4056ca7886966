//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use crate::board::Board;
use crate::console::Console;
use crate::error::GameError;
use crate::types::{Coord, Mark};
use serde::{Deserialize, Serialize};

/// Who is choosing the moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum PlayerKind {
    /// Moves typed at the console.
    Human,
    /// Moves chosen by minimax search.
    Computer,
}

/// Trait for players that can make moves.
pub trait Player {
    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Returns the mark this player places.
    fn mark(&self) -> Mark;

    /// Returns how this player picks moves.
    fn kind(&self) -> PlayerKind;

    /// Places exactly one mark on `board` and returns where.
    ///
    /// # Errors
    ///
    /// Only errors the player cannot recover from are returned; a human
    /// player retries bad input itself.
    fn take_turn(&mut self, board: &mut Board, console: &mut dyn Console)
    -> Result<Coord, GameError>;

    /// Whether `mark` belongs to this player.
    fn is_winning_mark(&self, mark: Mark) -> bool {
        self.mark() == mark
    }
}
