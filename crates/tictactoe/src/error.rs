//! Error types for tic-tac-toe play.

use crate::types::Coord;
use derive_more::{Display, Error, From};
use tracing::instrument;

/// A mark was placed on a cell that is already filled.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("This cell {} is occupied! Please, choose another... at {}:{}", coord, file, line)]
pub struct OccupiedCellError {
    /// The filled cell.
    pub coord: Coord,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl OccupiedCellError {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(coord: Coord) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            coord,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Raw input could not be understood as a move or board.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("{} at {}:{}", message, file, line)]
pub struct WrongInputError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl WrongInputError {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Any failure during a game.
#[derive(Debug, Display, From)]
pub enum GameError {
    /// The target cell is already filled.
    #[display("{}", _0)]
    #[from]
    OccupiedCell(OccupiedCellError),

    /// Human input was not a cell number from 1 to 9.
    #[display("{}", _0)]
    #[from]
    WrongInput(WrongInputError),

    /// The console could not be read or written.
    #[display("Console error: {}", _0)]
    #[from]
    Io(std::io::Error),

    /// Internal bug: the computer produced an illegal move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl GameError {
    /// Whether a human player should be asked again after this error.
    pub fn is_retryable(&self) -> bool {
        matches!(self, GameError::OccupiedCell(_) | GameError::WrongInput(_))
    }

    /// Short message suitable for showing to the player.
    pub fn user_message(&self) -> String {
        match self {
            GameError::OccupiedCell(_) => {
                "This cell is occupied! Please, choose another...".to_string()
            }
            GameError::WrongInput(e) => e.message.clone(),
            other => other.to_string(),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::OccupiedCell(e) => Some(e),
            GameError::WrongInput(e) => Some(e),
            GameError::Io(e) => Some(e),
            GameError::InvariantViolation(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_records_caller_location() {
        let err = WrongInputError::new("bad");
        assert_eq!(err.file, file!());
        assert!(err.to_string().starts_with("bad at "));
    }

    #[test]
    fn test_only_input_errors_are_retryable() {
        let coord = Coord::new(0, 0).unwrap();
        assert!(GameError::from(OccupiedCellError::new(coord)).is_retryable());
        assert!(GameError::from(WrongInputError::new("x")).is_retryable());
        assert!(!GameError::InvariantViolation("bug".into()).is_retryable());
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "closed");
        assert!(!GameError::from(io).is_retryable());
    }

    #[test]
    fn test_user_message_hides_location() {
        let coord = Coord::new(2, 2).unwrap();
        let err = GameError::from(OccupiedCellError::new(coord));
        assert_eq!(
            err.user_message(),
            "This cell is occupied! Please, choose another..."
        );
    }
}
