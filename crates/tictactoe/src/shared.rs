//! Thread-safe handle to a single game.

use super::{Cell, Game, GameStatus, PlaceError, Player};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::instrument;

/// Shared game handle for callers on multiple threads.
///
/// Clones refer to the same game. Each operation takes the lock for its full
/// duration, so a placement's check-then-set cannot interleave with another.
#[derive(Debug, Clone, Default)]
pub struct SharedGame {
    game: Arc<Mutex<Game>>,
}

impl SharedGame {
    /// Creates a handle to a new game.
    #[instrument]
    pub fn new() -> Self {
        Self::from(Game::new())
    }

    // A panic while holding the lock cannot leave a half-applied move:
    // `place_mark` validates before it writes.
    fn lock(&self) -> MutexGuard<'_, Game> {
        self.game.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Marks `(col, row)` for the current player under the lock.
    #[instrument(skip(self))]
    pub fn place_mark(&self, col: i32, row: i32) -> Result<(), PlaceError> {
        self.lock().place_mark(col, row)
    }

    /// Returns the player whose mark the next move places.
    pub fn current_player(&self) -> Player {
        self.lock().current_player()
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        self.lock().is_over()
    }

    /// Returns the winning player, if any.
    pub fn winner(&self) -> Option<Player> {
        self.lock().winner()
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.lock().status()
    }

    /// Returns the mark at `(col, row)`.
    pub fn cell_value(&self, col: i32, row: i32) -> Cell {
        self.lock().cell_value(col, row)
    }

    /// Returns a copy of the current game.
    pub fn snapshot(&self) -> Game {
        self.lock().clone()
    }
}

impl From<Game> for SharedGame {
    fn from(game: Game) -> Self {
        Self {
            game: Arc::new(Mutex::new(game)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CELL_COUNT;
    use std::thread;

    #[test]
    fn test_clones_share_state() {
        let shared = SharedGame::new();
        let other = shared.clone();
        shared.place_mark(1, 1).expect("legal move");
        assert_eq!(other.cell_value(1, 1), Cell::Marked(Player::Player1));
        assert_eq!(other.current_player(), Player::Player2);
    }

    #[test]
    fn test_concurrent_claims_of_one_cell() {
        let shared = SharedGame::new();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || shared.place_mark(0, 0))
            })
            .collect();

        let results: Vec<_> = handles
            .into_iter()
            .map(|h| h.join().expect("thread panicked"))
            .collect();

        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(
            results
                .iter()
                .filter(|r| r.is_err())
                .all(|r| matches!(r, Err(PlaceError::CellOccupied(_))))
        );
        assert_eq!(shared.snapshot().move_count(), 1);
    }

    #[test]
    fn test_concurrent_fill_keeps_counter_consistent() {
        let shared = SharedGame::new();
        let handles: Vec<_> = (0..CELL_COUNT as i32)
            .map(|i| {
                let shared = shared.clone();
                thread::spawn(move || shared.place_mark(i % 3, i / 3))
            })
            .collect();
        for handle in handles {
            let _ = handle.join().expect("thread panicked");
        }

        let game = shared.snapshot();
        assert_eq!(game.move_count(), game.board().occupied());
        assert!(game.move_count() >= 5);
    }
}
