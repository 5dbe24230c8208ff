//! Command-line interface for the tic-tac-toe driver.

use clap::{Parser, Subcommand};
use tictactoe::Coord;

/// Tic-Tac-Toe - two players on one terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log filter used when RUST_LOG is unset (e.g. "info", "tictactoe=debug")
    #[arg(long, global = true, default_value = "warn")]
    pub log_filter: String,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively, reading `x,y` coordinates from stdin
    Play,

    /// Apply a fixed sequence of moves and print the result
    Replay {
        /// Moves as `x,y` pairs, Player1 first
        #[arg(required = true, allow_hyphen_values = true)]
        moves: Vec<Coord>,
    },
}

impl Cli {
    /// Returns the selected command, falling back to `play`.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play)
    }
}
