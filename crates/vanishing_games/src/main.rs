//! Vanishing Games - unified CLI.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use vanishing_games::cli::{Cli, Command};
use vanishing_games::analysis::report;
use vanishing_games::render::run_renderer;
use vanishing_games::{
    EnginePlayer, GameConfig, GameOutcome, HumanPlayer, Orchestrator, Player, analyze,
};
use vanishing_tictactoe::Mark;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load_or_default(&cli.config)?;

    match cli.command {
        Command::Play {
            engine,
            delay_ms,
            max_moves,
        } => {
            let mut config = config;
            if let Some(engine) = engine {
                config = config.with_engine(engine);
            }
            if let Some(delay_ms) = delay_ms {
                config = config.with_engine_delay_ms(delay_ms);
            }
            if let Some(max_moves) = max_moves {
                config = config.with_max_moves(max_moves);
            }
            run_play(config).await
        }
        Command::Analyze { moves, json } => run_analyze(moves, json),
        Command::Selfplay {
            delay_ms,
            max_moves,
        } => {
            let mut config = config;
            if let Some(delay_ms) = delay_ms {
                config = config.with_engine_delay_ms(delay_ms);
            }
            if let Some(max_moves) = max_moves {
                config = config.with_max_moves(max_moves);
            }
            run_selfplay(config).await
        }
    }
}

/// Play an interactive game in the terminal.
async fn run_play(config: GameConfig) -> Result<()> {
    // Logs go to a file so they don't interleave with the board.
    let log_file = std::fs::File::create(config.log_file())?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!(engine = ?config.engine(), "Starting interactive game");

    let delay = Duration::from_millis(*config.engine_delay_ms());
    let (input_tx, input_rx) = mpsc::unbounded_channel();
    let human = HumanPlayer::new(config.player_name().clone(), input_rx);

    let (player_x, player_o): (Box<dyn Player>, Box<dyn Player>) = match config.engine().mark() {
        Some(Mark::X) => (
            Box::new(EnginePlayer::new("Engine", Mark::X, delay)),
            Box::new(human),
        ),
        Some(Mark::O) => (
            Box::new(human),
            Box::new(EnginePlayer::new("Engine", Mark::O, delay)),
        ),
        None => {
            // Both humans read the terminal through one queue.
            let second = human.sharing_input(format!("{} 2", config.player_name()));
            (Box::new(human), Box::new(second))
        }
    };

    tokio::spawn(forward_stdin(input_tx));

    let outcome = play_to_end(player_x, player_o, *config.max_moves()).await?;
    info!(?outcome, "Interactive game finished");
    Ok(())
}

/// Sends each stdin line to the players' input queue.
async fn forward_stdin(input_tx: mpsc::UnboundedSender<String>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        if input_tx.send(line).is_err() {
            break;
        }
    }
    debug!("Standard input closed");
}

/// Watch the engine play itself.
async fn run_selfplay(config: GameConfig) -> Result<()> {
    initialize_tracing();
    info!(max_moves = config.max_moves(), "Starting self-play");

    let delay = Duration::from_millis(*config.engine_delay_ms());
    let player_x = Box::new(EnginePlayer::new("Engine X", Mark::X, delay));
    let player_o = Box::new(EnginePlayer::new("Engine O", Mark::O, delay));

    let outcome = play_to_end(player_x, player_o, *config.max_moves()).await?;
    info!(?outcome, "Self-play finished");
    Ok(())
}

/// Runs one game with a renderer printing to stdout.
#[instrument(skip(player_x, player_o))]
async fn play_to_end(
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    max_moves: u32,
) -> Result<GameOutcome> {
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let renderer = tokio::spawn(run_renderer(event_rx, std::io::stdout()));

    let mut orchestrator = Orchestrator::new(player_x, player_o, event_tx, max_moves);
    let outcome = orchestrator.run().await;

    // Dropping the orchestrator closes the channel and lets the renderer drain.
    drop(orchestrator);
    renderer.await?;
    outcome
}

/// Replay moves and print the engine's choice.
fn run_analyze(moves: Vec<u8>, json: bool) -> Result<()> {
    initialize_tracing();

    let indices = moves.into_iter().map(|cell| usize::from(cell) - 1).collect();
    let analysis = analyze(indices)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        println!("{}", report(&analysis));
    }
    Ok(())
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,vanishing_games=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
