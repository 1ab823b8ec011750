//! Minimax move selection for the automated side.
//!
//! The search walks hypothetical states through [`apply_move`], so evictions
//! happen during lookahead exactly as they would in play. Because evictions
//! keep at least four cells open once the window is full, the board alone
//! never ends the recursion. Each call instead carries a ply budget equal to
//! the number of empty cells at the root; a node that exhausts it scores as a
//! draw.

use crate::engine::{GameState, apply_move};
use crate::error::InvalidSearchState;
use crate::types::Mark;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Outcome of a line of play, from the maximizing side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Score {
    /// The minimizer completes a line.
    Loss = -1,
    /// No line within the horizon.
    Draw = 0,
    /// The maximizer completes a line.
    Win = 1,
}

impl Score {
    /// Numeric value: -1, 0 or +1.
    pub fn value(self) -> i8 {
        self as i8
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Score::Loss => write!(f, "-1"),
            Score::Draw => write!(f, "0"),
            Score::Win => write!(f, "+1"),
        }
    }
}

/// Move chosen by [`choose_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Chosen cell, absent when no empty cell exists.
    cell: Option<usize>,
    /// Best score reachable for the maximizer.
    score: Score,
    /// Positions visited.
    nodes: u64,
}

impl SearchResult {
    /// Returns the chosen cell, if any.
    pub fn cell(&self) -> Option<usize> {
        self.cell
    }

    /// Returns the score of the chosen cell.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Returns the number of positions visited.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

/// Chooses the optimal cell for `mark`, the side to move.
///
/// `mark` is the maximizer; the opponent is assumed to minimize. Ties go to
/// the lowest cell index.
///
/// # Errors
///
/// Returns [`InvalidSearchState`] if the game is over or `mark` is not the
/// side to move.
#[instrument(skip(state), fields(move_count = state.move_count()))]
pub fn choose_move(state: &GameState, mark: Mark) -> Result<SearchResult, InvalidSearchState> {
    if state.is_locked() {
        return Err(InvalidSearchState::GameOver);
    }
    if state.to_move() != mark {
        return Err(InvalidSearchState::WrongSide {
            requested: mark,
            to_move: state.to_move(),
        });
    }

    let horizon = state.board().empty_cells().count();
    debug!(horizon, "Starting search");

    let mut search = Search {
        maximizer: mark,
        nodes: 0,
    };
    let (cell, score) = search.best(state, horizon);

    info!(?cell, %score, nodes = search.nodes, "Search complete");
    Ok(SearchResult {
        cell,
        score,
        nodes: search.nodes,
    })
}

/// Per-call search context.
struct Search {
    maximizer: Mark,
    nodes: u64,
}

impl Search {
    /// Returns the first best cell and its score for the side to move.
    fn best(&mut self, state: &GameState, budget: usize) -> (Option<usize>, Score) {
        self.nodes += 1;
        if budget == 0 {
            return (None, Score::Draw);
        }

        let maximizing = state.to_move() == self.maximizer;
        let ideal = if maximizing { Score::Win } else { Score::Loss };
        let mut best: Option<(usize, Score)> = None;

        for cell in state.board().empty_cells() {
            let Ok(next) = apply_move(state, cell) else {
                continue;
            };

            let score = match next.winner() {
                Some(winner) if winner == self.maximizer => Score::Win,
                Some(_) => Score::Loss,
                None => self.best(&next, budget - 1).1,
            };

            let improves = match best {
                None => true,
                Some((_, current)) if maximizing => score > current,
                Some((_, current)) => score < current,
            };
            if improves {
                best = Some((cell, score));
            }

            // Nothing later in the scan can beat the ideal score.
            if score == ideal {
                break;
            }
        }

        match best {
            Some((cell, score)) => (Some(cell), score),
            None => (None, Score::Draw),
        }
    }
}
