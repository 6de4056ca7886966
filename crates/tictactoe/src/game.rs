//! Game orchestration between two players.

use crate::board::Board;
use crate::console::Console;
use crate::error::GameError;
use crate::players::{Player, PlayerKind};
use tracing::{debug, info, instrument};

/// How a finished game ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A player completed a line.
    Winner {
        /// Name of the winning player.
        name: String,
        /// Whether the winner was the human or the computer.
        kind: PlayerKind,
    },
    /// The board filled up with no line.
    Draw,
}

impl Outcome {
    /// The final line shown to the user.
    pub fn message(&self) -> String {
        match self {
            Outcome::Winner {
                name,
                kind: PlayerKind::Human,
            } => format!("Congratulations, {}! You won!", name),
            Outcome::Winner {
                name,
                kind: PlayerKind::Computer,
            } => format!("{} wins! Better luck next time.", name),
            Outcome::Draw => "It's a draw!".to_string(),
        }
    }
}

/// One session: a shared board, two players and a turn counter.
pub struct Game<C> {
    board: Board,
    players: [Box<dyn Player>; 2],
    turns: usize,
    console: C,
}

impl<C: Console> Game<C> {
    /// Creates a game where `first` moves first.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvariantViolation`] if both players hold the
    /// same mark.
    #[instrument(skip_all, fields(first = %first.name(), second = %second.name()))]
    pub fn new(
        first: Box<dyn Player>,
        second: Box<dyn Player>,
        console: C,
    ) -> Result<Self, GameError> {
        if first.mark() == second.mark() {
            return Err(GameError::InvariantViolation(format!(
                "both players hold mark {}",
                first.mark()
            )));
        }
        Ok(Self {
            board: Board::new(),
            players: [first, second],
            turns: 0,
            console,
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of completed turns.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// The player whose turn is next.
    pub fn current_player(&self) -> &dyn Player {
        self.players[self.turns % 2].as_ref()
    }

    /// Returns the console.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Consumes the game, returning its console.
    pub fn into_console(self) -> C {
        self.console
    }

    /// Plays a single turn for the current player.
    #[instrument(skip(self), fields(turn = self.turns + 1))]
    pub fn play_turn(&mut self) -> Result<(), GameError> {
        let player = &mut self.players[self.turns % 2];
        let coord = player.take_turn(&mut self.board, &mut self.console)?;
        self.turns += 1;

        debug_assert_eq!(self.board.filled_count(), self.turns);
        debug!(
            player = %player.name(),
            kind = %player.kind(),
            cell = coord.number(),
            board = %self.board.pattern(),
            "Turn complete"
        );
        Ok(())
    }

    /// Plays until the board is won or drawn, then reports the outcome.
    ///
    /// # Errors
    ///
    /// Propagates console failures and internal invariant violations.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Outcome, GameError> {
        info!("Starting game");
        self.render()?;

        while self.board.is_active() {
            self.play_turn()?;
            self.render()?;
        }

        let outcome = self.outcome()?;
        info!(?outcome, turns = self.turns, "Game over");
        self.console.write_line(&outcome.message())?;
        Ok(outcome)
    }

    /// Attributes the finished position to a player.
    fn outcome(&self) -> Result<Outcome, GameError> {
        let Some(mark) = self.board.winner() else {
            return Ok(Outcome::Draw);
        };

        self.players
            .iter()
            .find(|player| player.is_winning_mark(mark))
            .map(|player| Outcome::Winner {
                name: player.name().to_string(),
                kind: player.kind(),
            })
            .ok_or_else(|| GameError::InvariantViolation(format!("no player holds mark {}", mark)))
    }

    fn render(&mut self) -> Result<(), GameError> {
        self.console.write_line("")?;
        self.console.write_line(&self.board.to_string())?;
        self.console.write_line("")?;
        Ok(())
    }
}
