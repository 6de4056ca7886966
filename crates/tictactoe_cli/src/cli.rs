//! Command-line interface for the tic-tac-toe binary.

use clap::Parser;

/// Play tic-tac-toe against a computer that never loses
#[derive(Parser, Debug)]
#[command(name = "tictactoe_cli")]
#[command(about = "Play tic-tac-toe against a perfect computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults are used when omitted)
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Let the computer play both sides
    #[arg(long)]
    pub autoplay: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags() {
        let cli = Cli::try_parse_from(["tictactoe_cli"]).unwrap();
        assert!(cli.config.is_none());
        assert!(!cli.autoplay);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from(["tictactoe_cli", "--config", "game.toml", "--autoplay"]).unwrap();
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("game.toml")));
        assert!(cli.autoplay);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["tictactoe_cli", "--depth", "3"]).is_err());
    }
}
