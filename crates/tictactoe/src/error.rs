//! Move rejection errors.

use super::coord::Coord;
use derive_more::{Display, Error};

/// Error returned by [`Game::place_mark`](crate::Game::place_mark).
///
/// Every variant is recoverable and leaves the game unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PlaceError {
    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// Column or row outside the board.
    #[display("Invalid coordinates {}", _0)]
    OutOfBounds(#[error(not(source))] Coord),

    /// The target cell already holds a mark.
    #[display("Cell {} is already marked", _0)]
    CellOccupied(#[error(not(source))] Coord),
}
