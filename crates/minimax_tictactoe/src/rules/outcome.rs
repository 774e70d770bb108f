//! Win, draw and score detection for tic-tac-toe.

use super::lines::{anti_diagonal, column, diagonal, row};
use crate::types::{Board, Mark, Outcome, SIZE};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Rows are checked first, then columns, then the two diagonals, and the
/// mark owning the first completed line is returned.
#[instrument(level = "trace", skip(board))]
pub fn winner(board: &Board) -> Option<Mark> {
    (0..SIZE)
        .find_map(|r| row(board, r))
        .or_else(|| (0..SIZE).find_map(|c| column(board, c)))
        .or_else(|| diagonal(board))
        .or_else(|| anti_diagonal(board))
}

/// Checks if the game is over, by a completed line or a full board.
#[instrument(level = "trace", skip(board))]
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

/// Scores a board from X's point of view: `1` if X won, `-1` if O won,
/// `0` otherwise.
///
/// Only meaningful on terminal boards; an unfinished board scores `0`.
#[instrument(level = "trace", skip(board))]
pub fn score(board: &Board) -> i8 {
    winner(board).map_or(0, Mark::win_score)
}

/// Classifies the board as won, drawn or still in progress.
#[instrument(level = "trace", skip(board))]
pub fn outcome(board: &Board) -> Outcome {
    match winner(board) {
        Some(mark) => Outcome::Won(mark),
        None if board.is_full() => Outcome::Draw,
        None => Outcome::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    const X: Cell = Cell::Occupied(Mark::X);
    const O: Cell = Cell::Occupied(Mark::O);
    const E: Cell = Cell::Empty;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winner(&board), None);
        assert!(!terminal(&board));
        assert_eq!(outcome(&board), Outcome::InProgress);
    }

    #[test]
    fn test_winner_top_row() {
        let board = Board::from_rows([[X, X, X], [O, O, E], [E, E, E]]).unwrap();
        assert_eq!(winner(&board), Some(Mark::X));
        assert_eq!(score(&board), 1);
        assert!(terminal(&board));
        assert_eq!(outcome(&board), Outcome::Won(Mark::X));
    }

    #[test]
    fn test_winner_column() {
        let board = Board::from_rows([[X, O, X], [E, O, E], [X, O, E]]).unwrap();
        assert_eq!(winner(&board), Some(Mark::O));
        assert_eq!(score(&board), -1);
    }

    #[test]
    fn test_winner_on_full_board() {
        // X completes the anti-diagonal with the last empty cell.
        let board = Board::from_rows([[O, X, X], [O, X, O], [X, O, X]]).unwrap();
        assert!(board.is_full());
        assert_eq!(winner(&board), Some(Mark::X));
        assert_eq!(outcome(&board), Outcome::Won(Mark::X));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board = Board::from_rows([[X, O, X], [O, X, X], [O, X, O]]).unwrap();
        assert_eq!(winner(&board), None);
        assert!(terminal(&board));
        assert_eq!(score(&board), 0);
        assert_eq!(outcome(&board), Outcome::Draw);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = Board::from_rows([[X, X, E], [O, E, E], [E, E, E]]).unwrap();
        assert_eq!(winner(&board), None);
        assert!(!terminal(&board));
        assert_eq!(score(&board), 0);
    }
}
