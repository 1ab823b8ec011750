//! Tests for move application and the vanishing window.

use proptest::prelude::*;
use vanishing_tictactoe::invariants::{GameInvariants, InvariantSet};
use vanishing_tictactoe::{
    CELLS, Cell, GameState, IllegalMove, Mark, WINDOW, apply_move, evaluate_winner, is_draw,
    new_game, replay,
};

// =============================================================================
// Strategies
// =============================================================================

/// Every state of a game played by picking among the legal moves.
///
/// Each choice is reduced modulo the number of legal moves, so any vector
/// yields a legal game. Games stop early once a side wins.
fn arb_game(max_moves: usize) -> impl Strategy<Value = Vec<GameState>> {
    proptest::collection::vec(0usize..CELLS, 0..=max_moves).prop_map(|choices| {
        let mut states = vec![new_game()];
        for choice in choices {
            let Some(current) = states.last() else {
                break;
            };
            let legal = current.legal_moves();
            if legal.is_empty() {
                break;
            }
            let next = apply_move(current, legal[choice % legal.len()]).expect("legal move");
            states.push(next);
        }
        states
    })
}

// =============================================================================
// Properties over reachable states
// =============================================================================

proptest! {
    #[test]
    fn prop_occupied_count_matches_history(states in arb_game(40)) {
        for state in &states {
            let occupied = state.board().occupied_count();
            prop_assert_eq!(occupied, state.history().len());
            prop_assert!(occupied <= WINDOW);
        }
    }

    #[test]
    fn prop_move_count_increments_by_one(states in arb_game(40)) {
        for pair in states.windows(2) {
            prop_assert_eq!(pair[1].move_count(), pair[0].move_count() + 1);
        }
    }

    #[test]
    fn prop_invariants_hold_in_long_games(states in arb_game(60)) {
        for state in &states {
            prop_assert!(GameInvariants::check_all(state).is_ok());
        }
    }

    #[test]
    fn prop_relabeling_swaps_winner(states in arb_game(30)) {
        for state in &states {
            let board = state.board();
            let swapped = evaluate_winner(&board.relabeled());
            prop_assert_eq!(swapped, evaluate_winner(board).map(Mark::opponent));
        }
    }

    #[test]
    fn prop_evaluation_is_idempotent(states in arb_game(30)) {
        for state in &states {
            prop_assert_eq!(evaluate_winner(state.board()), evaluate_winner(state.board()));
            prop_assert_eq!(state.winner(), evaluate_winner(state.board()));
        }
    }
}

#[test]
fn test_sixth_move_frees_first_cell() {
    let state = replay(&[2, 0, 3, 8, 7]).expect("legal replay");
    assert!(state.winner().is_none());
    assert!(!state.legal_moves().contains(&2));

    let state = apply_move(&state, 1).expect("legal move");
    assert!(state.winner().is_none());
    assert_eq!(state.board().get(2), Some(Cell::Empty));
    assert!(state.legal_moves().contains(&2));
}

#[test]
fn test_evicted_cell_is_from_window_moves_ago() {
    let cells = [0, 1, 5, 3, 7, 8, 0, 1, 5, 3];
    let mut state = new_game();
    for (n, &cell) in cells.iter().enumerate() {
        state = apply_move(&state, cell).expect("legal move");
        assert!(state.winner().is_none(), "no winner expected at move {n}");
        if n >= WINDOW {
            let evicted = cells[n - WINDOW];
            assert_ne!(state.history().first(), Some(&evicted));
            assert_eq!(state.history(), &cells[n + 1 - WINDOW..=n]);
        }
    }
}

#[test]
fn test_illegal_moves_leave_state_unchanged() {
    let state = replay(&[4, 0, 8]).expect("legal replay");
    let snapshot = state.clone();

    assert_eq!(apply_move(&state, 4), Err(IllegalMove::Occupied(4)));
    assert_eq!(apply_move(&state, 0), Err(IllegalMove::Occupied(0)));
    assert_eq!(apply_move(&state, CELLS), Err(IllegalMove::OutOfRange(CELLS)));
    assert_eq!(apply_move(&state, usize::MAX), Err(IllegalMove::OutOfRange(usize::MAX)));
    assert_eq!(state, snapshot);
}

#[test]
fn test_locked_state_rejects_every_cell() {
    let state = replay(&[0, 3, 1, 4, 2]).expect("legal replay");
    assert!(state.is_locked());
    for cell in 0..CELLS + 2 {
        assert_eq!(apply_move(&state, cell), Err(IllegalMove::GameOver));
    }
}

#[test]
fn test_winner_matches_evaluation() {
    let state = replay(&[4, 0, 2, 1, 6]).expect("legal replay");
    assert_eq!(state.winner(), Some(Mark::X));
    assert_eq!(evaluate_winner(state.board()), Some(Mark::X));
    assert!(!is_draw(&state));
}

#[test]
fn test_state_serializes() {
    let state = replay(&[4, 0]).expect("legal replay");
    let json = serde_json::to_string(&state).expect("serialize");
    let back: GameState = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, state);
    assert_eq!(back.to_move(), Mark::X);
}

#[test]
fn test_error_messages() {
    assert_eq!(IllegalMove::Occupied(4).to_string(), "Cell 4 is already occupied");
    assert_eq!(IllegalMove::GameOver.to_string(), "Game is already over");
}
