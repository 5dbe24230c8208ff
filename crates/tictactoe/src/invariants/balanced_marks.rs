//! Balanced marks invariant: Player1 is never behind, and never more than
//! one mark ahead.

use super::super::{Game, Player};
use super::Invariant;

/// Invariant: Player1's mark count is Player2's or one more.
pub struct BalancedMarksInvariant;

impl Invariant<Game> for BalancedMarksInvariant {
    fn holds(game: &Game) -> bool {
        let first = game.board().count(Player::Player1);
        let second = game.board().count(Player::Player2);
        first == second || first == second + 1
    }

    fn description() -> &'static str {
        "Players alternate marks, Player1 first"
    }
}
