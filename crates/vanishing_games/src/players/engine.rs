//! Player driven by the minimax search.

use super::{Action, Player};
use anyhow::{Result, bail};
use std::time::Duration;
use tracing::{Span, debug, instrument};
use vanishing_tictactoe::{GameState, Mark, choose_move};

/// Engine player: waits a cosmetic delay, then plays the searched move.
pub struct EnginePlayer {
    name: String,
    mark: Mark,
    delay: Duration,
}

impl EnginePlayer {
    /// Creates an engine player for `mark`.
    pub fn new(name: impl Into<String>, mark: Mark, delay: Duration) -> Self {
        Self {
            name: name.into(),
            mark,
            delay,
        }
    }
}

#[async_trait::async_trait]
impl Player for EnginePlayer {
    #[instrument(skip(self, state), fields(engine = %self.name, mark = %self.mark))]
    async fn get_move(&mut self, state: &GameState) -> Result<Action> {
        debug!(delay_ms = self.delay.as_millis() as u64, "Engine pausing before move");
        tokio::time::sleep(self.delay).await;

        // The search is CPU-bound; keep it off the async workers.
        let state = state.clone();
        let mark = self.mark;
        let span = Span::current();
        let result =
            tokio::task::spawn_blocking(move || span.in_scope(|| choose_move(&state, mark)))
                .await??;
        match result.cell() {
            Some(cell) => {
                debug!(cell, score = %result.score(), "Engine chose cell");
                Ok(Action::Place(cell))
            }
            None => bail!("No legal move available for {}", self.mark),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_automated(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vanishing_tictactoe::replay;

    #[tokio::test]
    async fn test_engine_takes_win() {
        let state = replay(&[0, 3, 1, 4]).expect("legal replay");
        let mut engine = EnginePlayer::new("Engine", Mark::X, Duration::ZERO);
        let action = engine.get_move(&state).await.expect("action");
        assert_eq!(action, Action::Place(2));
    }

    #[tokio::test]
    async fn test_engine_refuses_out_of_turn() {
        let state = replay(&[4]).expect("legal replay");
        let mut engine = EnginePlayer::new("Engine", Mark::X, Duration::ZERO);
        assert!(engine.get_move(&state).await.is_err());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_search_runs_beside_other_tasks() {
        let state = replay(&[4]).expect("legal replay");
        let mut engine = EnginePlayer::new("Engine", Mark::O, Duration::ZERO);
        let search = tokio::spawn(async move { engine.get_move(&state).await });

        // The single runtime thread stays free to drive this task meanwhile.
        let heartbeat = tokio::spawn(async { 42 });
        assert_eq!(heartbeat.await.expect("heartbeat"), 42);

        let action = search.await.expect("join").expect("action");
        assert!(matches!(action, Action::Place(cell) if cell != 4));
    }

    #[tokio::test(start_paused = true)]
    async fn test_engine_waits_for_delay() {
        let state = replay(&[0, 3, 1, 4]).expect("legal replay");
        let mut engine = EnginePlayer::new("Engine", Mark::X, Duration::from_millis(500));

        let start = tokio::time::Instant::now();
        engine.get_move(&state).await.expect("action");
        assert!(start.elapsed() >= Duration::from_millis(500));
    }
}
