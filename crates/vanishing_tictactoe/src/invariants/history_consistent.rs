//! History consistency invariant: history and occupied cells match 1:1.

use super::Invariant;
use crate::engine::GameState;
use crate::types::CELLS;

/// Invariant: every occupied cell has exactly one history entry and vice versa.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        let mut seen = [false; CELLS];
        for &index in history {
            if index >= CELLS || seen[index] || state.board().is_empty(index) {
                return false;
            }
            seen[index] = true;
        }

        state.board().occupied_count() == history.len()
    }

    fn description() -> &'static str {
        "History entries are unique and match the occupied cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{new_game, replay};
    use crate::types::{Cell, Mark};

    #[test]
    fn test_empty_game_holds() {
        assert!(HistoryConsistentInvariant::holds(&new_game()));
    }

    #[test]
    fn test_after_eviction_holds() {
        let state = replay(&[0, 1, 5, 3, 7, 8]).expect("legal replay");
        assert!(HistoryConsistentInvariant::holds(&state));
        assert_eq!(state.history().len(), 5);
    }

    #[test]
    fn test_extra_mark_violates() {
        let mut state = replay(&[4]).expect("legal replay");
        state.board = state.board.with(0, Cell::Marked(Mark::O));
        assert!(!HistoryConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_duplicate_entry_violates() {
        let mut state = replay(&[4]).expect("legal replay");
        state.history.push(4);
        assert!(!HistoryConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_stale_entry_violates() {
        let mut state = replay(&[4, 0]).expect("legal replay");
        state.board = state.board.with(0, Cell::Empty);
        assert!(!HistoryConsistentInvariant::holds(&state));
    }
}
