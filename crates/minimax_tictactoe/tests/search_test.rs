//! Tests for minimax search.

use minimax_tictactoe::{
    Board, Decision, Mark, Move, actions, best_move, evaluate, initial_state, minimax, player,
    result, terminal, winner,
};

/// Plays `engine` with minimax against every possible reply sequence and
/// returns the set of winners seen at the leaves.
fn winners_against_all_replies(board: &Board, engine: Mark) -> Vec<Option<Mark>> {
    if terminal(board) {
        return vec![winner(board)];
    }

    if player(board) == engine {
        let mv = match minimax(board).unwrap() {
            Decision::Play(mv) => mv,
            Decision::GameOver(score) => panic!("unexpected terminal score {}", score),
        };
        return winners_against_all_replies(&result(board, mv).unwrap(), engine);
    }

    actions(board)
        .into_iter()
        .flat_map(|mv| winners_against_all_replies(&result(board, mv).unwrap(), engine))
        .collect()
}

#[test]
fn test_x_never_loses() {
    let winners = winners_against_all_replies(&initial_state(), Mark::X);
    assert!(!winners.is_empty());
    assert!(winners.iter().all(|w| *w != Some(Mark::O)));
}

#[test]
fn test_o_never_loses() {
    let winners = winners_against_all_replies(&initial_state(), Mark::O);
    assert!(winners.iter().all(|w| *w != Some(Mark::X)));
}

#[test]
fn test_converts_opponent_mistake_into_win() {
    // O answering a corner with an adjacent edge loses by force.
    let board: Board = "XO./.../...".parse().unwrap();
    assert_eq!(evaluate(&board).unwrap(), 1);

    let winners = winners_against_all_replies(&board, Mark::X);
    assert!(winners.iter().all(|w| *w == Some(Mark::X)));
}

#[test]
fn test_empty_board_is_a_draw() {
    let board = initial_state();
    assert_eq!(evaluate(&board).unwrap(), 0);
    // Every opening draws, so the first in row-major order is chosen.
    assert_eq!(minimax(&board).unwrap(), Decision::Play(Move::new(0, 0)));
}

#[test]
fn test_x_takes_win_over_block() {
    let board: Board = "XX./OO./...".parse().unwrap();
    assert_eq!(player(&board), Mark::X);
    assert_eq!(minimax(&board).unwrap(), Decision::Play(Move::new(0, 2)));
}

#[test]
fn test_o_takes_win_over_block() {
    let board: Board = "XX./OO./X..".parse().unwrap();
    assert_eq!(player(&board), Mark::O);
    assert_eq!(minimax(&board).unwrap(), Decision::Play(Move::new(1, 2)));
}

#[test]
fn test_o_blocks_forced_loss() {
    let board: Board = "O../.XX/...".parse().unwrap();
    assert_eq!(player(&board), Mark::O);
    assert_eq!(minimax(&board).unwrap(), Decision::Play(Move::new(1, 0)));
    assert_eq!(evaluate(&board).unwrap(), 0);
}

#[test]
fn test_x_blocks_forced_loss() {
    let board: Board = "X../.OO/..X".parse().unwrap();
    assert_eq!(player(&board), Mark::X);
    assert_eq!(best_move(&board).unwrap(), Some(Move::new(1, 0)));
}

#[test]
fn test_avoids_fork() {
    // X at opposite corners with O in the center: O must not take a corner.
    let board: Board = "X../.O./..X".parse().unwrap();
    assert_eq!(player(&board), Mark::O);
    let mv = best_move(&board).unwrap().unwrap();
    assert!(
        [Move::new(0, 1), Move::new(1, 0), Move::new(1, 2), Move::new(2, 1)].contains(&mv),
        "O chose {}",
        mv
    );
    assert_eq!(evaluate(&board).unwrap(), 0);
}

#[test]
fn test_terminal_board_reports_score() {
    let won: Board = "XXX/OO./...".parse().unwrap();
    assert_eq!(minimax(&won).unwrap(), Decision::GameOver(1));
    assert_eq!(best_move(&won).unwrap(), None);

    let lost: Board = "XX./OOO/X..".parse().unwrap();
    assert_eq!(minimax(&lost).unwrap(), Decision::GameOver(-1));

    let drawn: Board = "XOX/OXX/OXO".parse().unwrap();
    assert_eq!(minimax(&drawn).unwrap(), Decision::GameOver(0));
}

#[test]
fn test_minimax_does_not_touch_board() {
    let board: Board = "X../.O./...".parse().unwrap();
    let copy = board;
    minimax(&board).unwrap();
    assert_eq!(board, copy);
}

#[test]
fn test_self_play_draws() {
    let mut board = initial_state();
    while let Decision::Play(mv) = minimax(&board).unwrap() {
        board = result(&board, mv).unwrap();
    }
    assert!(terminal(&board));
    assert_eq!(winner(&board), None);
}
