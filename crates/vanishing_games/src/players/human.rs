//! Human player fed by lines of text input.

use super::{Action, Player};
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};
use tracing::{debug, info};
use vanishing_tictactoe::{GameState, Position};

/// Human player reading one command per line.
///
/// Accepts a cell number as shown on the board (1-9), a position label
/// (`center`, `top-left`, ...), `r`/`reset` or `q`/`quit`.
///
/// Two players at one terminal share a single input queue through
/// [`HumanPlayer::sharing_input`]; each line is read by exactly one of them.
pub struct HumanPlayer {
    name: String,
    input_rx: Arc<Mutex<mpsc::UnboundedReceiver<String>>>,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input_rx: mpsc::UnboundedReceiver<String>) -> Self {
        Self {
            name: name.into(),
            input_rx: Arc::new(Mutex::new(input_rx)),
        }
    }

    /// Creates a second player reading from this player's input queue.
    pub fn sharing_input(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            input_rx: Arc::clone(&self.input_rx),
        }
    }
}

/// Parses one line of input into an action.
pub fn parse_action(line: &str) -> Action {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => Action::Quit,
        "r" | "reset" => Action::Reset,
        _ => match Position::from_label_or_number(trimmed) {
            Some(pos) => Action::Place(pos.to_index()),
            None => Action::Unrecognized(trimmed.to_string()),
        },
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    fn begin_turn(&mut self) {
        // Drop lines typed while it was not our turn, e.g. during the engine's pause.
        let Ok(mut input_rx) = self.input_rx.try_lock() else {
            return;
        };
        while let Ok(stale) = input_rx.try_recv() {
            debug!(player = %self.name, input = %stale, "Discarding input received out of turn");
        }
    }

    async fn get_move(&mut self, _state: &GameState) -> Result<Action> {
        let mut input_rx = self.input_rx.lock().await;
        loop {
            let Some(line) = input_rx.recv().await else {
                info!(player = %self.name, "Input closed, quitting");
                return Ok(Action::Quit);
            };
            if line.trim().is_empty() {
                continue;
            }
            let action = parse_action(&line);
            debug!(player = %self.name, ?action, "Parsed input");
            return Ok(action);
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
