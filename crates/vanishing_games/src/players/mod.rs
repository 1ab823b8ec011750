//! Player trait and implementations.

mod engine;
mod human;

pub use engine::EnginePlayer;
pub use human::{HumanPlayer, parse_action};

use anyhow::Result;
use vanishing_tictactoe::GameState;

/// What a player wants to do on its turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Place the current mark at a cell (0-8).
    Place(usize),
    /// Discard the game and start a fresh one.
    Reset,
    /// Stop playing.
    Quit,
    /// Input that could not be understood.
    Unrecognized(String),
}

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Called once when a new turn starts, before any [`Player::get_move`].
    ///
    /// Retries after a rejected move do not call this again.
    fn begin_turn(&mut self) {}

    /// Gets the next action from this player.
    async fn get_move(&mut self, state: &GameState) -> Result<Action>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Returns true for players driven by the search engine.
    fn is_automated(&self) -> bool {
        false
    }
}
