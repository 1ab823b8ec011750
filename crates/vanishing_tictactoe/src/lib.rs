//! Vanishing tic-tac-toe: game engine and minimax search.
//!
//! Tic-tac-toe where only the five most recent marks stay on the board. The
//! sixth placement evicts the oldest mark, whichever side placed it.
//!
//! # Example
//!
//! ```
//! use vanishing_tictactoe::{Mark, apply_move, choose_move, new_game};
//!
//! let state = new_game();
//! let state = apply_move(&state, 4)?;
//! let reply = choose_move(&state, Mark::O)?;
//! assert!(reply.cell().is_some());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
pub mod invariants;
mod position;
pub mod rules;
mod search;
mod types;

pub use engine::{GameState, apply_move, new_game, replay};
pub use error::{IllegalMove, InvalidSearchState};
pub use position::Position;
pub use rules::{LINES, Line, evaluate_winner, is_draw};
pub use search::{Score, SearchResult, choose_move};
pub use types::{Board, CELLS, Cell, Mark, WINDOW};
