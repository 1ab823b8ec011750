//! Terminal front end for vanishing tic-tac-toe.
//!
//! # Architecture
//!
//! - **Orchestrator**: owns the live game state and sequences turns
//! - **Players**: humans typing into the terminal, or the minimax engine
//! - **Render**: plain-text output of orchestrator events
//! - **Config**: TOML settings overridden by CLI flags

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analysis;
pub mod cli;
pub mod config;
pub mod orchestrator;
pub mod players;
pub mod render;

pub use analysis::{Analysis, analyze};
pub use config::{ConfigError, EngineSide, GameConfig};
pub use orchestrator::{GameEvent, GameOutcome, Orchestrator};
pub use players::{Action, EnginePlayer, HumanPlayer, Player};
