//! Plain-text rendering of game events.

use crate::orchestrator::{GameEvent, GameOutcome};
use std::io::Write;
use tokio::sync::mpsc;
use tracing::debug;
use vanishing_tictactoe::{GameState, IllegalMove, Position};

/// Describes an event for the terminal, or `None` for events with no output.
pub fn describe(event: &GameEvent) -> Option<String> {
    match event {
        GameEvent::StateChanged(state) => Some(render_state(state)),
        GameEvent::AwaitingMove {
            player,
            mark,
            automated: true,
        } => Some(format!("{player} ({mark}) is thinking...")),
        GameEvent::AwaitingMove { player, mark, .. } => Some(format!(
            "{player} ({mark}), enter a cell 1-9 (r = reset, q = quit):"
        )),
        GameEvent::MoveMade {
            player,
            mark,
            cell,
            evicted,
        } => {
            let mut line = format!("{player} ({mark}) played {}", cell_name(*cell));
            if let Some(evicted) = evicted {
                line.push_str(&format!("; the mark at {} vanished", cell_name(*evicted)));
            }
            Some(line)
        }
        GameEvent::MoveRejected {
            error: IllegalMove::Occupied(cell),
            ..
        } => Some(format!("Move ignored: {} is taken", cell_name(*cell))),
        GameEvent::MoveRejected { error, .. } => Some(format!("Move ignored: {error}")),
        GameEvent::InputRejected { input, .. } => Some(format!(
            "Didn't understand {input:?}; enter 1-9 or a position like \"center\""
        )),
        GameEvent::Reset => Some("New game".to_string()),
        GameEvent::GameOver(outcome) => Some(describe_outcome(outcome)),
    }
}

/// Describes how a game ended.
pub fn describe_outcome(outcome: &GameOutcome) -> String {
    match outcome {
        GameOutcome::Won { mark, player } => format!("Congratulations: {player} ({mark}) wins!"),
        GameOutcome::Draw => "Draw".to_string(),
        GameOutcome::MoveLimit { moves } => format!("No winner after {moves} moves"),
        GameOutcome::Quit { player } => format!("{player} quit"),
    }
}

/// Renders a board with the side to move and the mark about to vanish.
pub fn render_state(state: &GameState) -> String {
    let mut out = format!("\n{}\n", state.board().display());
    if state.is_locked() {
        return out;
    }
    out.push_str(&format!("Move {}, {} to play", state.move_count() + 1, state.to_move()));
    if let Some(cell) = state.next_eviction() {
        out.push_str(&format!(" (next move clears {})", cell_name(cell)));
    }
    out
}

fn cell_name(cell: usize) -> String {
    match Position::from_index(cell) {
        Some(pos) => format!("{} [{}]", pos, cell + 1),
        None => format!("[{}]", cell + 1),
    }
}

/// Prints events until the channel closes.
pub async fn run_renderer(mut event_rx: mpsc::UnboundedReceiver<GameEvent>, mut out: impl Write) {
    while let Some(event) = event_rx.recv().await {
        debug!(?event, "Rendering event");
        if let Some(text) = describe(&event) {
            let _ = writeln!(out, "{text}");
            let _ = out.flush();
        }
    }
}
