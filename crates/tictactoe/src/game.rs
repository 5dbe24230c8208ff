//! Game engine for tic-tac-toe.
//!
//! A [`Game`] is a plain value holding the whole state of one match. It is
//! mutated only through [`Game::place_mark`], which validates the move,
//! writes the mark and re-evaluates the end of the game.

use super::board::{Board, CELL_COUNT, DIMENSION};
use super::coord::Coord;
use super::error::PlaceError;
use super::invariants::assert_invariants;
use super::types::{Cell, GameStatus, Player};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Fewest moves after which a line can be complete (the first player's third
/// mark).
const MIN_WINNING_MOVES: usize = DIMENSION + 2;

/// Line-sum weight of an unmarked cell. Larger than any player's target so a
/// line with a gap never matches.
const EMPTY_WEIGHT: usize = DIMENSION + 1;

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) move_count: usize,
    pub(crate) game_over: bool,
    pub(crate) has_winner: bool,
}

impl Game {
    /// Creates a new game with an empty board and Player1 to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::Player1,
            move_count: 0,
            game_over: false,
            has_winner: false,
        }
    }

    /// Builds a game by applying `moves` in order.
    ///
    /// Stops at the first rejected move and returns its error.
    #[instrument(skip(moves))]
    pub fn replay<I>(moves: I) -> Result<Self, PlaceError>
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut game = Self::new();
        for coord in moves {
            game.place_mark(coord.col, coord.row)?;
        }
        Ok(game)
    }

    /// Returns the player whose mark the next move places.
    ///
    /// Once the game is over this keeps returning the player who made the
    /// final move; it does not advance.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Returns the winning player, or `None` for a draw or a game in progress.
    ///
    /// Use [`Game::is_over`] or [`Game::status`] to tell those two apart.
    pub fn winner(&self) -> Option<Player> {
        self.has_winner.then_some(self.current_player)
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        match (self.game_over, self.winner()) {
            (_, Some(player)) => GameStatus::Won(player),
            (true, None) => GameStatus::Drawn,
            (false, None) => GameStatus::InProgress,
        }
    }

    /// Number of marks placed so far.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the cell at `(col, row)`, or `None` when out of range.
    pub fn cell(&self, col: i32, row: i32) -> Option<Cell> {
        let (col, row) = Board::locate(col, row)?;
        self.board.get(col, row)
    }

    /// Returns the mark at `(col, row)`.
    ///
    /// Out-of-range coordinates read as [`Cell::Empty`].
    pub fn cell_value(&self, col: i32, row: i32) -> Cell {
        self.cell(col, row).unwrap_or_default()
    }

    /// Marks `(col, row)` for the current player.
    ///
    /// Checks, in order: the game is not over, the coordinates are on the
    /// board, the cell is empty. The first failing check is returned and
    /// the game is left untouched.
    ///
    /// # Errors
    ///
    /// - [`PlaceError::GameOver`] after a win or draw.
    /// - [`PlaceError::OutOfBounds`] if either coordinate is outside `0..3`.
    /// - [`PlaceError::CellOccupied`] if the cell already holds a mark.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn place_mark(&mut self, col: i32, row: i32) -> Result<(), PlaceError> {
        let coord = Coord::new(col, row);

        if self.game_over {
            warn!(%coord, "Move rejected: game is already over");
            return Err(PlaceError::GameOver);
        }

        let Some((x, y)) = Board::locate(col, row) else {
            warn!(%coord, "Move rejected: out of bounds");
            return Err(PlaceError::OutOfBounds(coord));
        };

        if !self.board.is_empty(x, y) {
            warn!(%coord, "Move rejected: cell occupied");
            return Err(PlaceError::CellOccupied(coord));
        }

        self.board.set(x, y, Cell::Marked(self.current_player));
        self.move_count += 1;
        debug!(%coord, move_count = self.move_count, "Mark placed");

        self.check_status(x, y);
        if !self.game_over {
            self.current_player = self.current_player.opponent();
        }

        assert_invariants(self);
        Ok(())
    }

    /// Updates the terminal flags after a mark at `(col, row)`.
    fn check_status(&mut self, col: usize, row: usize) {
        if self.move_count < MIN_WINNING_MOVES {
            return;
        }
        if self.move_count == CELL_COUNT {
            self.game_over = true;
        }

        let target = DIMENSION * self.current_player.index();
        let diagonal = (col == row).then(|| self.line_sum(|i| (i, i)));
        let anti_diagonal =
            (col + row == DIMENSION - 1).then(|| self.line_sum(|i| (DIMENSION - 1 - i, i)));
        let lines = [
            Some(self.line_sum(|i| (i, row))),
            Some(self.line_sum(|i| (col, i))),
            diagonal,
            anti_diagonal,
        ];

        if lines.contains(&Some(target)) {
            self.game_over = true;
            self.has_winner = true;
            info!(winner = %self.current_player, "Game won");
        } else if self.game_over {
            info!("Game drawn");
        }
    }

    /// Sums cell weights along the line traced by `cell_at(0..DIMENSION)`.
    fn line_sum(&self, cell_at: impl Fn(usize) -> (usize, usize)) -> usize {
        (0..DIMENSION)
            .map(|i| {
                let (col, row) = cell_at(i);
                match self.board.cells()[Board::index(col, row)] {
                    Cell::Empty => EMPTY_WEIGHT,
                    Cell::Marked(player) => player.index(),
                }
            })
            .sum()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.board, f)
    }
}
