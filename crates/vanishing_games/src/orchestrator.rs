//! Game orchestration between players.
//!
//! The orchestrator owns the only live [`GameState`]. Each move is applied
//! and published before the next player is asked, so moves are strictly
//! sequenced.

use crate::players::{Action, Player};
use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};
use vanishing_tictactoe::{GameState, IllegalMove, Mark, apply_move, is_draw, new_game};

/// How a game ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    /// A player completed a line.
    Won {
        /// Winning mark.
        mark: Mark,
        /// Winning player's name.
        player: String,
    },
    /// No winner and no empty cell.
    Draw,
    /// The move cap was reached without a winner.
    MoveLimit {
        /// Moves played.
        moves: u32,
    },
    /// A player quit.
    Quit {
        /// Name of the player who quit.
        player: String,
    },
}

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// Game state updated.
    StateChanged(GameState),
    /// A player is expected to move.
    AwaitingMove {
        /// Player name.
        player: String,
        /// Mark to place.
        mark: Mark,
        /// True when the engine is thinking.
        automated: bool,
    },
    /// Move was applied.
    MoveMade {
        /// Player name.
        player: String,
        /// Mark placed.
        mark: Mark,
        /// Cell played.
        cell: usize,
        /// Cell cleared by the vanishing window, if any.
        evicted: Option<usize>,
    },
    /// The engine refused a move.
    MoveRejected {
        /// Player name.
        player: String,
        /// Why the move was refused.
        error: IllegalMove,
    },
    /// Input could not be understood.
    InputRejected {
        /// Player name.
        player: String,
        /// Raw input.
        input: String,
    },
    /// The game was discarded and a fresh one started.
    Reset,
    /// Game ended.
    GameOver(GameOutcome),
}

/// Orchestrates gameplay between two players.
pub struct Orchestrator {
    state: GameState,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
    max_moves: u32,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
        max_moves: u32,
    ) -> Self {
        Self {
            state: new_game(),
            player_x,
            player_o,
            event_tx,
            max_moves,
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Discards the current game and starts a fresh one with X to move.
    pub fn restart(&mut self) {
        self.state = new_game();
    }

    /// Runs the game loop until the game ends or a player quits.
    #[instrument(skip(self), fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub async fn run(&mut self) -> Result<GameOutcome> {
        info!("Starting game orchestration");
        self.event_tx.send(GameEvent::StateChanged(self.state.clone()))?;

        loop {
            if let Some(outcome) = self.outcome() {
                info!(?outcome, moves = self.state.move_count(), "Game over");
                self.event_tx.send(GameEvent::GameOver(outcome.clone()))?;
                return Ok(outcome);
            }

            let mark = self.state.to_move();
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            let player_name = player.name().to_string();

            player.begin_turn();
            self.event_tx.send(GameEvent::AwaitingMove {
                player: player_name.clone(),
                mark,
                automated: player.is_automated(),
            })?;

            loop {
                debug!(player = %player_name, %mark, "Waiting for move");
                match player.get_move(&self.state).await? {
                    Action::Place(cell) => {
                        let evicted = self.state.next_eviction();
                        match apply_move(&self.state, cell) {
                            Ok(next) => {
                                self.state = next;
                                self.event_tx.send(GameEvent::MoveMade {
                                    player: player_name.clone(),
                                    mark,
                                    cell,
                                    evicted,
                                })?;
                                self.event_tx
                                    .send(GameEvent::StateChanged(self.state.clone()))?;
                                break;
                            }
                            Err(error) => {
                                warn!(player = %player_name, cell, %error, "Move rejected");
                                self.event_tx.send(GameEvent::MoveRejected {
                                    player: player_name.clone(),
                                    error,
                                })?;
                            }
                        }
                    }
                    Action::Reset => {
                        info!(player = %player_name, "Game reset");
                        self.restart();
                        self.event_tx.send(GameEvent::Reset)?;
                        self.event_tx
                            .send(GameEvent::StateChanged(self.state.clone()))?;
                        break;
                    }
                    Action::Quit => {
                        let outcome = GameOutcome::Quit {
                            player: player_name,
                        };
                        info!(?outcome, "Player quit");
                        self.event_tx.send(GameEvent::GameOver(outcome.clone()))?;
                        return Ok(outcome);
                    }
                    Action::Unrecognized(input) => {
                        debug!(player = %player_name, %input, "Unrecognized input");
                        self.event_tx.send(GameEvent::InputRejected {
                            player: player_name.clone(),
                            input,
                        })?;
                    }
                }
            }
        }
    }

    /// Returns the outcome if the game is finished.
    fn outcome(&self) -> Option<GameOutcome> {
        if let Some(mark) = self.state.winner() {
            let player = match mark {
                Mark::X => self.player_x.name(),
                Mark::O => self.player_o.name(),
            };
            return Some(GameOutcome::Won {
                mark,
                player: player.to_string(),
            });
        }
        if is_draw(&self.state) {
            return Some(GameOutcome::Draw);
        }
        if self.state.move_count() >= self.max_moves {
            return Some(GameOutcome::MoveLimit {
                moves: self.state.move_count(),
            });
        }
        None
    }
}
