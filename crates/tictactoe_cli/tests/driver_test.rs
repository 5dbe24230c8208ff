//! End-to-end tests for the terminal game loop.

use std::io::Cursor;
use tictactoe::{Coord, GameStatus, Player};
use tictactoe_cli::driver;

fn run(input: &str) -> (tictactoe::Game, String) {
    let mut output = Vec::new();
    let game = driver::play(Cursor::new(input.to_string()), &mut output).expect("Game completes");
    (game, String::from_utf8(output).expect("UTF-8 output"))
}

#[test]
fn test_draw_session_transcript() {
    let (game, text) = run("0,1\n1,1\n0,2\n0,0\n2,2\n1,2\n1,0\n2,0\n2,1\n");

    assert_eq!(game.status(), GameStatus::Drawn);
    assert!(text.starts_with("Tic-Tac-Toe\n"));
    assert_eq!(text.matches("Enter the coordinates like so: x,y").count(), 9);
    assert!(text.ends_with(
        " O | X | O \n---+---+---\n X | O | X \n---+---+---\n X | O | X \n\nThe game resulted in a draw!\n"
    ));
}

#[test]
fn test_turn_announcements_alternate() {
    let (_, text) = run("0,0\n0,1\n1,0\n1,1\n2,0\n");

    let turns: Vec<_> = text
        .lines()
        .filter_map(|l| l.strip_prefix("It's the turn of player "))
        .collect();
    assert_eq!(turns, ["X", "O", "X", "O", "X"]);
}

#[test]
fn test_player2_win_announced() {
    let (game, text) = run("0,0\n0,2\n1,1\n1,2\n2,1\n2,2\n");
    assert_eq!(game.winner(), Some(Player::Player2));
    assert!(text.ends_with("Player O won!\n"));
}

#[test]
fn test_whitespace_in_coordinates_accepted() {
    let (game, _) = run(" 0 , 0 \n0,1\n1, 0\n1,1\n2 ,0\n");
    assert_eq!(game.winner(), Some(Player::Player1));
}

#[test]
fn test_replay_prints_final_board() {
    let moves = [(1, 1), (1, 0)].map(Coord::from);
    let mut output = Vec::new();
    driver::replay(&moves, &mut output).expect("Writable output");

    let text = String::from_utf8(output).expect("UTF-8 output");
    assert_eq!(
        text,
        "   | O |   \n---+---+---\n   | X |   \n---+---+---\n   |   |   \n\nThe game is still in progress.\n"
    );
}
