//! Start-of-game setup: who plays, with which mark, in which order.

use crate::console::Console;
use crate::error::GameError;
use crate::game::Game;
use crate::players::{ComputerPlayer, HumanPlayer, Player};
use crate::types::Mark;
use tracing::{info, instrument};

/// Knobs for building a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Name shown for the computer player.
    pub computer_name: String,
    /// Mark given to the human; the computer gets the other one.
    pub human_mark: Mark,
    /// Print "<name> is thinking..." before computer moves.
    pub show_thinking: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            computer_name: "Computer".to_string(),
            human_mark: Mark::Cross,
            show_thinking: true,
        }
    }
}

/// Asks for the human's name, re-asking on blank input.
#[instrument(skip(console))]
pub fn prompt_name(console: &mut dyn Console) -> Result<String, GameError> {
    loop {
        let name = console.read_line("What is your name? ")?;
        let name = name.trim();
        if !name.is_empty() {
            return Ok(name.to_string());
        }
    }
}

/// Asks whether the human moves first; only `y` or `Y` means yes.
#[instrument(skip(console))]
pub fn prompt_moves_first(console: &mut dyn Console) -> Result<bool, GameError> {
    let answer = console.read_line("Do you want to move first? (y/n) ")?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

/// Prompts for the human's details and builds a human-versus-computer game.
///
/// # Errors
///
/// Fails only if the console does.
#[instrument(skip(console))]
pub fn prompt<C: Console>(mut console: C, settings: &Settings) -> Result<Game<C>, GameError> {
    let name = prompt_name(&mut console)?;
    let human_first = prompt_moves_first(&mut console)?;
    info!(%name, human_first, "Session configured");

    let human: Box<dyn Player> = Box::new(HumanPlayer::new(name, settings.human_mark));
    let computer: Box<dyn Player> = Box::new(
        ComputerPlayer::new(settings.computer_name.clone(), settings.human_mark.opponent())
            .with_thinking(settings.show_thinking),
    );

    if human_first {
        Game::new(human, computer, console)
    } else {
        Game::new(computer, human, console)
    }
}

/// Builds a computer-versus-computer game; the cross moves first.
#[instrument(skip(console))]
pub fn autoplay<C: Console>(console: C, settings: &Settings) -> Result<Game<C>, GameError> {
    let player = |mark: Mark| -> Box<dyn Player> {
        Box::new(
            ComputerPlayer::new(format!("{} ({})", settings.computer_name, mark), mark)
                .with_thinking(settings.show_thinking),
        )
    };
    Game::new(player(Mark::Cross), player(Mark::Naught), console)
}
