//! Command-line interface for vanishing_games.

use crate::config::EngineSide;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Vanishing tic-tac-toe: only the five newest marks stay on the board
#[derive(Parser, Debug)]
#[command(name = "vanishing_games")]
#[command(about = "Vanishing tic-tac-toe against a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it does not exist)
    #[arg(short, long, global = true, default_value = "vanishing.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Side played by the engine
        #[arg(long, value_enum)]
        engine: Option<EngineSide>,

        /// Pause before each engine move, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Abandon the game after this many moves
        #[arg(long)]
        max_moves: Option<u32>,
    },

    /// Replay moves and print the engine's choice for the side to move
    Analyze {
        /// Comma-separated cell numbers as shown on the board (1-9)
        #[arg(long, value_delimiter = ',', value_parser = clap::value_parser!(u8).range(1..=9))]
        moves: Vec<u8>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Watch the engine play both sides
    Selfplay {
        /// Pause before each engine move, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Stop after this many moves
        #[arg(long)]
        max_moves: Option<u32>,
    },
}
