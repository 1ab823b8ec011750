//! Window invariant: never more than five marks in play.

use super::Invariant;
use crate::engine::GameState;
use crate::types::WINDOW;

/// Invariant: history length stays within the window.
pub struct WindowBoundInvariant;

impl Invariant<GameState> for WindowBoundInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().len() <= WINDOW
    }

    fn description() -> &'static str {
        "At most five marks are in play"
    }
}
