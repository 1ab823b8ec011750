//! Win detection over the eight fixed lines.

use crate::types::{Board, Mark};
use tracing::instrument;

/// Three board indices that win when held by one mark.
pub type Line = [usize; 3];

/// Every winning line in scan order: rows, then columns, then diagonals.
pub static LINES: [Line; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the mark owning the first fully held line, if any.
///
/// A board that is full without such a line still returns `None`; a draw is
/// decided by the caller.
#[instrument(level = "trace", ret)]
pub fn evaluate_winner(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|&[a, b, c]| {
        let mark = board.get(a)?.mark()?;
        let held = board.get(b)?.mark() == Some(mark) && board.get(c)?.mark() == Some(mark);
        held.then_some(mark)
    })
}
