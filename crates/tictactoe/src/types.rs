//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
///
/// Player1 always moves first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// First player, plays `X`.
    #[display("X")]
    Player1,
    /// Second player, plays `O`.
    #[display("O")]
    Player2,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    /// Zero-based player index (0 for Player1, 1 for Player2).
    pub fn index(self) -> usize {
        match self {
            Player::Player1 => 0,
            Player::Player2 => 1,
        }
    }

    /// Display token for this player's mark.
    pub fn token(self) -> &'static str {
        match self {
            Player::Player1 => "X",
            Player::Player2 => "O",
        }
    }
}

/// A cell on the board.
///
/// `Empty` is a board sentinel only. "No winner" is reported as `None`
/// from [`Game::winner`](crate::Game::winner) and never stored here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Unmarked cell.
    #[default]
    Empty,
    /// Cell marked by a player.
    Marked(Player),
}

impl Cell {
    /// Display token: the player's token, or a blank for an empty cell.
    pub fn token(self) -> &'static str {
        match self {
            Cell::Empty => " ",
            Cell::Marked(player) => player.token(),
        }
    }

    /// Returns the player occupying the cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Marked(player) => Some(player),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Board filled with no completed line.
    Drawn,
}

impl GameStatus {
    /// Checks if the status is terminal.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}
