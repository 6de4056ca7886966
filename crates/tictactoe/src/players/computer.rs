//! Computer player driven by minimax search.

use super::{Player, PlayerKind};
use crate::board::Board;
use crate::console::Console;
use crate::error::GameError;
use crate::search::Minimax;
use crate::types::{Coord, Mark};
use tracing::{debug, instrument};

/// Perfect-play opponent.
#[derive(Debug, Clone)]
pub struct ComputerPlayer {
    name: String,
    mark: Mark,
    show_thinking: bool,
}

impl ComputerPlayer {
    /// Creates a new computer player.
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            mark,
            show_thinking: true,
        }
    }

    /// Whether to print a "thinking" line before each move.
    pub fn with_thinking(mut self, show_thinking: bool) -> Self {
        self.show_thinking = show_thinking;
        self
    }
}

impl Player for ComputerPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Computer
    }

    #[instrument(skip(self, board, console), fields(player = %self.name, mark = %self.mark))]
    fn take_turn(
        &mut self,
        board: &mut Board,
        console: &mut dyn Console,
    ) -> Result<Coord, GameError> {
        if self.show_thinking {
            console.write_line(&format!("{} is thinking...", self.name))?;
        }

        let mut search = Minimax::new(self.mark);
        let coord = search.evaluate(board).best.ok_or_else(|| {
            GameError::InvariantViolation(format!(
                "search found no move on active board {}",
                board.pattern()
            ))
        })?;

        // The search only proposes empty cells; a rejection here is a bug.
        board.fill_cell(coord, self.mark).map_err(|e| {
            GameError::InvariantViolation(format!("search chose a filled cell: {}", e))
        })?;

        debug!(cell = coord.number(), nodes = search.nodes(), "Computer placed mark");
        console.write_line(&format!("{} chose cell {}", self.name, coord.number()))?;
        Ok(coord)
    }
}
