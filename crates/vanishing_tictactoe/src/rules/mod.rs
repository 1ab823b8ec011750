//! Game rules for vanishing tic-tac-toe.
//!
//! Pure functions over boards and game states, kept apart from the move
//! engine so renderers can call them directly.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{LINES, Line, evaluate_winner};
