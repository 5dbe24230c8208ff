//! A recorded winner implies a finished game.

use super::super::Game;
use super::Invariant;

/// Invariant: `has_winner ⇒ game_over`.
pub struct WinnerImpliesOverInvariant;

impl Invariant<Game> for WinnerImpliesOverInvariant {
    fn holds(game: &Game) -> bool {
        !game.has_winner || game.game_over
    }

    fn description() -> &'static str {
        "A winner is only recorded once the game is over"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_for_draw_and_win() {
        let drawn = Game::replay(
            [(0, 1), (1, 1), (0, 2), (0, 0), (2, 2), (1, 2), (1, 0), (2, 0), (2, 1)]
                .map(crate::Coord::from),
        )
        .expect("legal moves");
        assert!(WinnerImpliesOverInvariant::holds(&drawn));

        let won = Game::replay([(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)].map(crate::Coord::from))
            .expect("legal moves");
        assert!(WinnerImpliesOverInvariant::holds(&won));
    }

    #[test]
    fn test_detects_winner_in_progress() {
        let mut game = Game::new();
        game.has_winner = true;
        assert!(!WinnerImpliesOverInvariant::holds(&game));
    }
}
