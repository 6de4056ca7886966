//! Human player that reads moves from the console.

use super::{Player, PlayerKind};
use crate::board::Board;
use crate::console::Console;
use crate::error::GameError;
use crate::types::{Coord, Mark};
use tracing::{debug, instrument};

/// Human player typing cell numbers 1-9.
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    name: String,
    mark: Mark,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            mark,
        }
    }

    /// One attempt: parse the token, then fill the cell.
    fn attempt(&self, board: &mut Board, raw: &str) -> Result<Coord, GameError> {
        let coord = Coord::parse_input(raw)?;
        board.fill_cell(coord, self.mark)?;
        Ok(coord)
    }
}

impl Player for HumanPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Human
    }

    #[instrument(skip(self, board, console), fields(player = %self.name, mark = %self.mark))]
    fn take_turn(
        &mut self,
        board: &mut Board,
        console: &mut dyn Console,
    ) -> Result<Coord, GameError> {
        let prompt = format!("{}, choose a cell (1-9): ", self.name);
        loop {
            let raw = console.read_line(&prompt)?;
            match self.attempt(board, &raw) {
                Ok(coord) => {
                    debug!(cell = coord.number(), "Human placed mark");
                    return Ok(coord);
                }
                Err(e) if e.is_retryable() => {
                    debug!(input = %raw.trim(), error = %e, "Rejected move, asking again");
                    console.write_line(&e.user_message())?;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
