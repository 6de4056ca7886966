//! Tic-tac-toe against a perfect-play computer opponent.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid with line-based win and draw detection
//! - **Search**: exhaustive minimax over board copies
//! - **Players**: a human reading from a [`Console`] and a computer running the search
//! - **Game**: alternates turns on the shared board and reports the outcome
//!
//! # Example
//!
//! ```
//! use tictactoe::{Board, Coord, Mark, best_move};
//!
//! let mut board = Board::new();
//! board.fill_cell(Coord::from_number(5).unwrap(), Mark::Cross).unwrap();
//! let reply = best_move(&board, Mark::Naught).unwrap();
//! assert_eq!(reply.number(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod console;
mod error;
mod game;
mod players;
mod rules;
mod search;
mod session;
mod types;

pub use board::Board;
pub use console::{Console, ScriptedConsole};
pub use error::{GameError, OccupiedCellError, WrongInputError};
pub use game::{Game, Outcome};
pub use players::{ComputerPlayer, HumanPlayer, Player, PlayerKind};
pub use rules::{GameStatus, LINES};
pub use search::{DRAW_SCORE, Evaluation, LOSS_SCORE, Minimax, WIN_SCORE, best_move, static_score};
pub use session::{Settings, autoplay, prompt};
pub use types::{Cell, Coord, Mark};
