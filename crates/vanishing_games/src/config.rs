//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};
use vanishing_tictactoe::Mark;

/// Which side, if any, the engine plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EngineSide {
    /// Engine plays X and moves first.
    X,
    /// Engine plays O.
    O,
    /// Two humans share the terminal.
    None,
}

impl EngineSide {
    /// Mark played by the engine, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            EngineSide::X => Some(Mark::X),
            EngineSide::O => Some(Mark::O),
            EngineSide::None => None,
        }
    }
}

/// Settings for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side played by the engine in interactive games.
    #[serde(default = "default_engine")]
    engine: EngineSide,

    /// Pause before each engine move, in milliseconds.
    #[serde(default = "default_engine_delay_ms")]
    engine_delay_ms: u64,

    /// Moves after which an undecided game is abandoned.
    #[serde(default = "default_max_moves")]
    max_moves: u32,

    /// Display name for human players.
    #[serde(default = "default_player_name")]
    player_name: String,

    /// Log file for interactive games, so logs stay off the board.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_engine() -> EngineSide {
    EngineSide::O
}

fn default_engine_delay_ms() -> u64 {
    500
}

fn default_max_moves() -> u32 {
    100
}

fn default_player_name() -> String {
    "Human".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("vanishing_games.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            engine: default_engine(),
            engine_delay_ms: default_engine_delay_ms(),
            max_moves: default_max_moves(),
            player_name: default_player_name(),
            log_file: default_log_file(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(engine = ?config.engine, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the engine side.
    pub fn with_engine(mut self, engine: EngineSide) -> Self {
        self.engine = engine;
        self
    }

    /// Overrides the engine delay.
    pub fn with_engine_delay_ms(mut self, delay_ms: u64) -> Self {
        self.engine_delay_ms = delay_ms;
        self
    }

    /// Overrides the move cap.
    pub fn with_max_moves(mut self, max_moves: u32) -> Self {
        self.max_moves = max_moves;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
