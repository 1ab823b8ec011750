//! First-class invariants for vanishing tic-tac-toe.
//!
//! Invariants are logical properties that must hold for every reachable
//! [`GameState`]. They can be tested independently and are checked after each
//! move in debug builds.

use crate::engine::GameState;
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }
        if !I4::holds(state) {
            violations.push(InvariantViolation::new(I4::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod alternating_marks;
pub mod history_consistent;
pub mod locked_winner;
pub mod window_bound;

pub use alternating_marks::AlternatingMarksInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use locked_winner::LockedWinnerInvariant;
pub use window_bound::WindowBoundInvariant;

/// All game invariants as a composable set.
pub type GameInvariants = (
    HistoryConsistentInvariant,
    WindowBoundInvariant,
    AlternatingMarksInvariant,
    LockedWinnerInvariant,
);

/// Asserts that every game invariant holds, logging each violation first.
pub(crate) fn assert_invariants(state: &GameState) {
    if let Err(violations) = GameInvariants::check_all(state) {
        for violation in &violations {
            warn!(description = %violation.description, "Invariant violated");
        }
        debug_assert!(violations.is_empty(), "Game invariants violated: {violations:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{new_game, replay};
    use crate::types::{Cell, Mark};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(GameInvariants::check_all(&new_game()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_through_evictions() {
        let state = replay(&[0, 1, 5, 3, 7, 8, 0, 1]).expect("legal replay");
        assert!(GameInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut state = replay(&[4]).expect("legal replay");
        state.board = state.board.with(0, Cell::Marked(Mark::O));

        let violations = GameInvariants::check_all(&state).unwrap_err();
        assert!(!violations.is_empty());
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (HistoryConsistentInvariant, WindowBoundInvariant);
        assert!(TwoInvariants::check_all(&new_game()).is_ok());
    }
}
