//! Exhaustive minimax search.
//!
//! The full game tree from the empty board has fewer than 550,000 nodes, so
//! the search walks all of it without pruning, depth limits or memoization.

use crate::engine::{actions, player, result};
use crate::error::{EngineError, EngineErrorKind};
use crate::rules::{score, terminal};
use crate::types::{Board, Mark, Move};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// What [`minimax`] hands back for a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Decision {
    /// Optimal move for the player to move.
    #[display("play {_0}")]
    Play(Move),
    /// The board is already terminal; carries its score.
    #[display("game over (score {_0})")]
    GameOver(i8),
}

impl Decision {
    /// Returns the chosen move, if the game was still running.
    pub fn as_move(self) -> Option<Move> {
        match self {
            Decision::Play(mv) => Some(mv),
            Decision::GameOver(_) => None,
        }
    }

    /// Checks if the board was already terminal.
    pub fn is_game_over(self) -> bool {
        matches!(self, Decision::GameOver(_))
    }
}

/// Computes the optimal move for the player to move.
///
/// X maximizes and O minimizes the terminal score reachable under optimal
/// play. Ties go to the first move in row-major order. A terminal board
/// yields [`Decision::GameOver`] with its score instead of a move.
///
/// # Errors
///
/// Any error from [`result`] aborts the search and is returned as-is.
#[instrument(skip(board), fields(board = %board.notation()))]
pub fn minimax(board: &Board) -> Result<Decision, EngineError> {
    if terminal(board) {
        let score = score(board);
        debug!(score, "Board is terminal");
        return Ok(Decision::GameOver(score));
    }

    let (value, best) = search(board)?;
    match best {
        Some(mv) => {
            debug!(%mv, value, to_move = %player(board), "Selected move");
            Ok(Decision::Play(mv))
        }
        None => Ok(Decision::GameOver(value)),
    }
}

/// Returns the value of a board under optimal play by both sides.
///
/// `1` means X forces a win, `-1` means O does, `0` means a draw.
#[instrument(skip(board), fields(board = %board.notation()))]
pub fn evaluate(board: &Board) -> Result<i8, EngineError> {
    let (value, _) = search(board)?;
    debug!(value, "Evaluated board");
    Ok(value)
}

/// Returns the optimal move, or `None` on a terminal board.
#[instrument(skip(board))]
pub fn best_move(board: &Board) -> Result<Option<Move>, EngineError> {
    Ok(minimax(board)?.as_move())
}

/// Value of `board` and the first move reaching it.
fn search(board: &Board) -> Result<(i8, Option<Move>), EngineError> {
    if terminal(board) {
        return Ok((score(board), None));
    }

    let to_move = player(board);
    let mut best: Option<(i8, Move)> = None;

    for mv in actions(board) {
        let child = result(board, mv)?;
        let (value, _) = search(&child)?;

        let improves = match best {
            None => true,
            Some((best_value, _)) => match to_move {
                Mark::X => value > best_value,
                Mark::O => value < best_value,
            },
        };
        if improves {
            best = Some((value, mv));
        }
    }

    let (value, mv) = best.ok_or_else(|| {
        EngineError::new(EngineErrorKind::InvalidPlayer(format!(
            "{} has no legal move on an unfinished board",
            to_move
        )))
    })?;
    Ok((value, Some(mv)))
}
