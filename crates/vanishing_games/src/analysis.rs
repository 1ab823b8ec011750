//! One-shot position analysis for the `analyze` command.

use serde::Serialize;
use tracing::instrument;
use vanishing_tictactoe::{GameState, IllegalMove, Mark, SearchResult, choose_move, replay};

/// Board, side to move and engine choice after replaying some moves.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// Moves replayed, as board indices (0-8).
    pub moves: Vec<usize>,
    /// Resulting state.
    pub state: GameState,
    /// Side to move, absent once the game is won.
    pub to_move: Option<Mark>,
    /// Engine choice for the side to move.
    pub best: Option<SearchResult>,
}

/// Replays `moves` (board indices) and searches for the side to move.
///
/// # Errors
///
/// Returns the first [`IllegalMove`] in `moves`.
#[instrument]
pub fn analyze(moves: Vec<usize>) -> Result<Analysis, IllegalMove> {
    let state = replay(&moves)?;
    let to_move = (!state.is_locked()).then(|| state.to_move());
    let best = to_move.and_then(|mark| choose_move(&state, mark).ok());
    Ok(Analysis {
        moves,
        state,
        to_move,
        best,
    })
}

/// Human-readable report.
pub fn report(analysis: &Analysis) -> String {
    let mut out = format!("{}\n", analysis.state.board().display());
    match (analysis.state.winner(), analysis.to_move, analysis.best) {
        (Some(winner), _, _) => out.push_str(&format!("{winner} has won")),
        (None, Some(mark), Some(best)) => {
            let cell = best
                .cell()
                .map(|cell| (cell + 1).to_string())
                .unwrap_or_else(|| "none".to_string());
            out.push_str(&format!(
                "{mark} to move: best cell {cell}, score {} ({} positions)",
                best.score(),
                best.nodes()
            ));
        }
        _ => out.push_str("No move to search"),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use vanishing_tictactoe::Score;

    #[test]
    fn test_analyze_finds_win() {
        let analysis = analyze(vec![0, 3, 1, 4]).expect("legal moves");
        assert_eq!(analysis.to_move, Some(Mark::X));
        let best = analysis.best.expect("search ran");
        assert_eq!(best.cell(), Some(2));
        assert_eq!(best.score(), Score::Win);
        assert!(report(&analysis).contains("X to move: best cell 3, score +1"));
    }

    #[test]
    fn test_analyze_won_game() {
        let analysis = analyze(vec![0, 3, 1, 4, 2]).expect("legal moves");
        assert_eq!(analysis.to_move, None);
        assert!(analysis.best.is_none());
        assert!(report(&analysis).ends_with("X has won"));
    }

    #[test]
    fn test_analyze_rejects_illegal_sequence() {
        assert_eq!(analyze(vec![4, 4]).unwrap_err(), IllegalMove::Occupied(4));
    }

    #[test]
    fn test_analysis_serializes() {
        let analysis = analyze(vec![4]).expect("legal moves");
        let json = serde_json::to_value(&analysis).expect("serialize");
        assert_eq!(json["to_move"], "O");
        assert_eq!(json["moves"], serde_json::json!([4]));
        assert!(json["best"]["cell"].is_u64());
    }
}
