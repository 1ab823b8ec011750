//! Move application with the vanishing window.
//!
//! [`GameState`] is an immutable snapshot. [`apply_move`] never edits its
//! input; it returns the next snapshot or an [`IllegalMove`].

use crate::error::IllegalMove;
use crate::rules::evaluate_winner;
use crate::types::{Board, CELLS, Cell, Mark, WINDOW};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    pub(crate) board: Board,
    /// Indices of the marks in play, oldest first.
    pub(crate) history: Vec<usize>,
    /// Total moves made, including evicted ones.
    pub(crate) move_count: u32,
    /// Winner, once a line is held.
    pub(crate) winner: Option<Mark>,
    /// True once a winner exists.
    pub(crate) locked: bool,
}

impl GameState {
    /// Creates a fresh game.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the cells of the marks in play, oldest first.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Returns the number of moves made so far.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Returns the mark to move: X on even move counts, O on odd.
    pub fn to_move(&self) -> Mark {
        if self.move_count % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// Returns true once the game has a winner.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Cell that the next move will evict, if the window is full.
    pub fn next_eviction(&self) -> Option<usize> {
        if self.history.len() == WINDOW {
            self.history.first().copied()
        } else {
            None
        }
    }

    /// Returns the cells a move may target, in index order.
    ///
    /// Empty when the game is over.
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.locked {
            Vec::new()
        } else {
            self.board.empty_cells().collect()
        }
    }
}

/// Creates a fresh game: empty board, X to move.
#[instrument]
pub fn new_game() -> GameState {
    GameState::new()
}

/// Applies a move for the side to move, returning the next snapshot.
///
/// The mark is placed first and then, if more than [`WINDOW`] marks are in
/// play, the oldest one is cleared. The just-placed mark is therefore never
/// the evicted one.
///
/// # Errors
///
/// Returns [`IllegalMove`] if the game is over, `cell` is not 0-8, or the
/// cell is occupied.
#[instrument(level = "debug", skip(state), fields(move_count = state.move_count))]
pub fn apply_move(state: &GameState, cell: usize) -> Result<GameState, IllegalMove> {
    if state.locked {
        return Err(IllegalMove::GameOver);
    }
    if cell >= CELLS {
        return Err(IllegalMove::OutOfRange(cell));
    }
    if !state.board.is_empty(cell) {
        return Err(IllegalMove::Occupied(cell));
    }

    let mark = state.to_move();
    let mut board = state.board.with(cell, Cell::Marked(mark));
    let mut history = state.history.clone();
    history.push(cell);

    if history.len() > WINDOW {
        let evicted = history.remove(0);
        board = board.with(evicted, Cell::Empty);
        debug!(evicted, "Evicted oldest mark");
    }

    let winner = evaluate_winner(&board);
    let next = GameState {
        board,
        history,
        move_count: state.move_count + 1,
        winner,
        locked: winner.is_some(),
    };

    #[cfg(debug_assertions)]
    crate::invariants::assert_invariants(&next);

    Ok(next)
}

/// Replays a list of cells from a fresh game.
///
/// # Errors
///
/// Returns the first [`IllegalMove`] encountered.
#[instrument]
pub fn replay(cells: &[usize]) -> Result<GameState, IllegalMove> {
    cells
        .iter()
        .try_fold(new_game(), |state, &cell| apply_move(&state, cell))
}
