//! Turn inference, move enumeration and move application.
//!
//! These functions never mutate a board: `result` hands back a fresh one,
//! which is what lets the search explore sibling positions from a shared
//! ancestor.

use crate::error::{EngineError, EngineErrorKind};
use crate::invariants::{Invariant, MarkBalanceInvariant};
use crate::types::{Board, Mark, Move};
use tracing::{debug, instrument};

/// Returns the starting board: every cell empty.
#[instrument]
pub fn initial_state() -> Board {
    Board::new()
}

/// Returns the mark whose turn it is.
///
/// X moves first, so O is to move exactly when X has more marks on the
/// board. On a finished board the same rule applies.
#[instrument(level = "trace", skip(board))]
pub fn player(board: &Board) -> Mark {
    if board.count(Mark::X) > board.count(Mark::O) {
        Mark::O
    } else {
        Mark::X
    }
}

/// Returns every empty cell as a move, in row-major order.
///
/// A full board yields an empty vector.
#[instrument(level = "trace", skip(board))]
pub fn actions(board: &Board) -> Vec<Move> {
    board
        .cells()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(mv, _)| mv)
        .collect()
}

/// Returns the board that results from the player to move taking `mv`.
///
/// The input board is left untouched.
///
/// # Errors
///
/// Returns `IllegalMove` if `mv` is not among [`actions`] for the board,
/// which covers occupied cells and coordinates off the board.
#[instrument(level = "trace", skip(board))]
pub fn result(board: &Board, mv: Move) -> Result<Board, EngineError> {
    if !actions(board).contains(&mv) {
        debug!(%mv, "Rejected move outside legal actions");
        return Err(EngineError::new(EngineErrorKind::IllegalMove(mv)));
    }

    let next = board.with_mark(mv, player(board));
    debug_assert!(MarkBalanceInvariant::holds(&next), "Mark balance violated");
    Ok(next)
}
