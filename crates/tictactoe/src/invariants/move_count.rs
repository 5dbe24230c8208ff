//! Move counter invariant: the counter tracks the number of marks.

use super::super::Game;
use super::Invariant;

/// Invariant: `move_count` equals the number of marked cells.
pub struct MoveCountInvariant;

impl Invariant<Game> for MoveCountInvariant {
    fn holds(game: &Game) -> bool {
        game.move_count() == game.board().occupied()
    }

    fn description() -> &'static str {
        "Move count equals number of marked cells"
    }
}
