//! Draw detection.

use crate::engine::GameState;
use tracing::instrument;

/// Checks if the game is drawn: no winner and no empty cell left.
///
/// Once the window is full at least four cells are always empty, so this only
/// fires for hand-built states or boards that filled before any eviction.
#[instrument(level = "trace", skip(state), ret)]
pub fn is_draw(state: &GameState) -> bool {
    state.winner().is_none() && state.board().is_full()
}
