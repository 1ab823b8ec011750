//! Lock invariant: the game is locked exactly when a winner is recorded.

use super::Invariant;
use crate::engine::GameState;
use crate::rules::evaluate_winner;

/// Invariant: `locked` mirrors the stored winner, and the stored winner is
/// what the board shows.
pub struct LockedWinnerInvariant;

impl Invariant<GameState> for LockedWinnerInvariant {
    fn holds(state: &GameState) -> bool {
        state.is_locked() == state.winner().is_some()
            && state.winner() == evaluate_winner(state.board())
    }

    fn description() -> &'static str {
        "Game is locked exactly when the board has a winner"
    }
}
