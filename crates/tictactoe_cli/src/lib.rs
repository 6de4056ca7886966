//! Terminal front-end for the tic-tac-toe engine.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod terminal;

pub use cli::Cli;
pub use config::{ConfigError, GameConfig};
pub use terminal::Terminal;
