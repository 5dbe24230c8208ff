//! Terminal game loop.
//!
//! Reads `x,y` coordinates line by line, hands them to the engine and writes
//! the board after every turn. Rejected or unparsable input is reported and
//! the player is asked again.

use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use tictactoe::{Coord, Game, GameStatus};
use tracing::{debug, info, instrument};

/// Runs an interactive game to completion.
///
/// # Errors
///
/// Fails if reading or writing fails, or if input ends before the game does.
#[instrument(skip_all)]
pub fn play<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<Game> {
    let mut game = Game::new();
    writeln!(output, "Tic-Tac-Toe")?;

    let mut line = String::new();
    while !game.is_over() {
        writeln!(output, "{game}")?;
        writeln!(output, "It's the turn of player {}", game.current_player())?;
        writeln!(output, "Enter the coordinates like so: x,y")?;
        output.flush()?;

        line.clear();
        let read = input.read_line(&mut line).context("Failed to read input")?;
        if read == 0 {
            bail!("Input ended before the game finished");
        }
        writeln!(output)?;

        let coord = match line.parse::<Coord>() {
            Ok(coord) => coord,
            Err(e) => {
                debug!(input = line.trim(), error = %e, "Unparsable move");
                writeln!(output, "{e}")?;
                continue;
            }
        };

        if let Err(e) = game.place_mark(coord.col, coord.row) {
            writeln!(output, "{e}")?;
        }
    }

    writeln!(output, "{game}")?;
    writeln!(output, "{}", outcome(&game))?;
    info!(status = ?game.status(), moves = game.move_count(), "Game finished");
    Ok(game)
}

/// Applies `moves` in order, reporting rejected ones, then prints the board
/// and outcome.
#[instrument(skip_all, fields(moves = moves.len()))]
pub fn replay<W: Write>(moves: &[Coord], mut output: W) -> Result<Game> {
    let mut game = Game::new();
    for coord in moves {
        if let Err(e) = game.place_mark(coord.col, coord.row) {
            writeln!(output, "Move {coord} rejected: {e}")?;
        }
    }

    writeln!(output, "{game}")?;
    writeln!(output, "{}", outcome(&game))?;
    Ok(game)
}

/// Result line for a game.
pub fn outcome(game: &Game) -> String {
    match game.status() {
        GameStatus::Won(player) => format!("Player {player} won!"),
        GameStatus::Drawn => "The game resulted in a draw!".to_string(),
        GameStatus::InProgress => "The game is still in progress.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tictactoe::Player;

    #[test]
    fn test_outcome_lines() {
        assert_eq!(outcome(&Game::new()), "The game is still in progress.");

        let won = Game::replay([(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)].map(Coord::from))
            .expect("Valid moves");
        assert_eq!(outcome(&won), "Player X won!");
    }

    #[test]
    fn test_play_reports_bad_input_and_continues() {
        let input = Cursor::new("nonsense\n0,0\n0,0\n5,5\n0,1\n1,0\n1,1\n2,0\n");
        let mut output = Vec::new();

        let game = play(input, &mut output).expect("Game completes");
        let text = String::from_utf8(output).expect("UTF-8 output");

        assert_eq!(game.winner(), Some(Player::Player1));
        assert!(text.contains("Expected coordinates like x,y"));
        assert!(text.contains("Cell 0,0 is already marked"));
        assert!(text.contains("Invalid coordinates 5,5"));
        assert!(text.ends_with("Player X won!\n"));
    }

    #[test]
    fn test_play_fails_when_input_ends_early() {
        let input = Cursor::new("0,0\n1,1\n");
        let err = play(input, Vec::new()).unwrap_err();
        assert!(err.to_string().contains("Input ended"));
    }

    #[test]
    fn test_replay_reports_rejected_moves() {
        let moves = [(0, 0), (0, 0), (-1, 0)].map(Coord::from);
        let mut output = Vec::new();

        let game = replay(&moves, &mut output).expect("Writable output");
        let text = String::from_utf8(output).expect("UTF-8 output");

        assert_eq!(game.move_count(), 1);
        assert!(text.contains("Move 0,0 rejected: Cell 0,0 is already marked"));
        assert!(text.contains("Move -1,0 rejected: Invalid coordinates -1,0"));
        assert!(text.ends_with("The game is still in progress.\n"));
    }
}
