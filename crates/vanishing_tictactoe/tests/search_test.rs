//! Tests for minimax move selection.

use vanishing_tictactoe::{
    InvalidSearchState, Mark, Score, apply_move, choose_move, evaluate_winner, new_game, replay,
};

#[test]
fn test_takes_immediate_win() {
    // X X . / O O . / . . .
    let state = replay(&[0, 3, 1, 4]).expect("legal replay");
    assert_eq!(state.to_move(), Mark::X);

    let result = choose_move(&state, Mark::X).expect("valid search state");
    assert_eq!(result.cell(), Some(2));
    assert_eq!(result.score(), Score::Win);
}

#[test]
fn test_blocks_immediate_loss() {
    // O threatens the left column; X must take 3.
    let state = replay(&[4, 0, 2, 6]).expect("legal replay");
    let result = choose_move(&state, Mark::X).expect("valid search state");
    assert_eq!(result.cell(), Some(3));
    assert_ne!(result.score(), Score::Loss);
}

#[test]
fn test_second_player_blocks() {
    let state = replay(&[0, 4, 1]).expect("legal replay");
    let result = choose_move(&state, Mark::O).expect("valid search state");
    assert_eq!(result.cell(), Some(2));
    assert_eq!(result.score(), Score::Draw);
}

#[test]
fn test_chosen_move_never_loses_immediately() {
    for cells in [&[4][..], &[4, 0], &[0, 4, 8], &[0, 1, 5, 3, 7], &[0, 1, 5, 3, 7, 8]] {
        let state = replay(cells).expect("legal replay");
        let mark = state.to_move();
        let result = choose_move(&state, mark).expect("valid search state");
        let cell = result.cell().expect("a legal move exists");
        assert!(state.legal_moves().contains(&cell));

        let next = apply_move(&state, cell).expect("chosen move is legal");
        if next.winner().is_none() {
            // No reply may complete a line for the opponent.
            for reply in next.legal_moves() {
                let after = apply_move(&next, reply).expect("legal reply");
                assert_ne!(evaluate_winner(after.board()), Some(mark.opponent()));
            }
        }
    }
}

#[test]
fn test_empty_board_is_a_draw() {
    let result = choose_move(&new_game(), Mark::X).expect("valid search state");
    assert!(result.cell().is_some());
    assert_eq!(result.score(), Score::Draw);
}

#[test]
fn test_search_does_not_mutate_state() {
    let state = replay(&[0, 1, 5, 3, 7]).expect("legal replay");
    let snapshot = state.clone();
    let _ = choose_move(&state, Mark::O).expect("valid search state");
    assert_eq!(state, snapshot);
}

#[test]
fn test_search_is_deterministic() {
    let state = replay(&[4, 0]).expect("legal replay");
    let first = choose_move(&state, Mark::X).expect("valid search state");
    let second = choose_move(&state, Mark::X).expect("valid search state");
    assert_eq!(first, second);
}

#[test]
fn test_rejects_locked_state() {
    let state = replay(&[0, 3, 1, 4, 2]).expect("legal replay");
    assert_eq!(choose_move(&state, Mark::O), Err(InvalidSearchState::GameOver));
    assert_eq!(choose_move(&state, Mark::X), Err(InvalidSearchState::GameOver));
}

#[test]
fn test_rejects_wrong_side() {
    let state = new_game();
    assert_eq!(
        choose_move(&state, Mark::O),
        Err(InvalidSearchState::WrongSide {
            requested: Mark::O,
            to_move: Mark::X,
        })
    );
}
