//! Tic-Tac-Toe - terminal driver
//!
//! Two players share one terminal and take turns entering coordinates.

use anyhow::Result;
use clap::Parser;
use std::io;
use tictactoe_cli::{Cli, Command, driver, logging};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(&cli.log_filter);

    match cli.command() {
        Command::Play => {
            info!("Starting interactive game");
            driver::play(io::stdin().lock(), io::stdout().lock())?;
        }
        Command::Replay { moves } => {
            info!(moves = moves.len(), "Replaying moves");
            driver::replay(&moves, io::stdout().lock())?;
        }
    }

    Ok(())
}
