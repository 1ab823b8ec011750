//! Error types for move application and search.

use crate::types::Mark;

/// A move the engine refused to apply.
///
/// The input state is never modified when this is returned; callers simply
/// ignore the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IllegalMove {
    /// The game already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// The index is not a board cell.
    #[display("Cell {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(usize),
}

impl std::error::Error for IllegalMove {}

/// The search was asked to move from a state it cannot move from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidSearchState {
    /// The game already has a winner.
    #[display("Cannot search a finished game")]
    GameOver,

    /// The requested mark is not the side to move.
    #[display("Search requested for {} but {} is to move", requested, to_move)]
    WrongSide {
        /// Mark the caller asked to optimize for.
        requested: Mark,
        /// Mark actually to move.
        to_move: Mark,
    },
}

impl std::error::Error for InvalidSearchState {}
