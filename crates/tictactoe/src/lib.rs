//! Tic-tac-toe rules engine.
//!
//! The engine tracks a 3x3 board, alternates Player1 (`X`) and Player2 (`O`),
//! and detects a completed row, column or diagonal, or a full board.
//!
//! # Example
//!
//! ```
//! use tictactoe::{Game, GameStatus, PlaceError, Player};
//!
//! let mut game = Game::new();
//! for (col, row) in [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)] {
//!     game.place_mark(col, row)?;
//! }
//! assert_eq!(game.status(), GameStatus::Won(Player::Player1));
//! assert_eq!(game.place_mark(2, 2), Err(PlaceError::GameOver));
//! # Ok::<(), PlaceError>(())
//! ```

#![warn(missing_docs)]

mod board;
mod coord;
mod error;
mod game;
mod invariants;
mod shared;
mod types;

pub use board::{Board, CELL_COUNT, DIMENSION};
pub use coord::{Coord, CoordError};
pub use error::PlaceError;
pub use game::Game;
pub use invariants::{
    BalancedMarksInvariant, GameInvariants, Invariant, InvariantSet, InvariantViolation,
    MoveCountInvariant, WinnerImpliesOverInvariant,
};
pub use shared::SharedGame;
pub use types::{Cell, GameStatus, Player};
