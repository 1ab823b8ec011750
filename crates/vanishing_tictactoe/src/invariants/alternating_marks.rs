//! Alternation invariant: marks in play alternate by age.

use super::Invariant;
use crate::engine::GameState;
use crate::types::Mark;

/// Invariant: consecutive history entries belong to opposite marks, and the
/// newest belongs to the side that just moved.
///
/// Eviction only removes from the front, so alternation survives it.
pub struct AlternatingMarksInvariant;

impl Invariant<GameState> for AlternatingMarksInvariant {
    fn holds(state: &GameState) -> bool {
        let marks: Vec<Option<Mark>> = state
            .history()
            .iter()
            .map(|&index| state.board().get(index).and_then(|cell| cell.mark()))
            .collect();

        if marks.iter().any(Option::is_none) {
            return false;
        }

        let alternates = marks.windows(2).all(|pair| pair[0] != pair[1]);
        let newest_ok = match marks.last() {
            Some(newest) => *newest == Some(state.to_move().opponent()),
            None => true,
        };

        alternates && newest_ok
    }

    fn description() -> &'static str {
        "Marks in play alternate X, O, X, ... by age"
    }
}
