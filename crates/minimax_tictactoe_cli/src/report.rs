//! Position analysis for the `analyze` command.

use derive_getters::Getters;
use minimax_tictactoe::{
    Board, EngineError, Mark, Move, Outcome, actions, best_move, evaluate, outcome, player,
};
use serde::Serialize;
use std::fmt;
use tracing::instrument;

/// Everything the engine can say about one position.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct Analysis {
    /// Board in compact notation.
    board: String,
    /// Mark whose turn it is.
    to_move: Mark,
    /// Legal moves in row-major order.
    legal_moves: Vec<Move>,
    /// Current outcome.
    outcome: Outcome,
    /// Minimax value from X's point of view.
    value: i8,
    /// Optimal move, absent on a finished board.
    best_move: Option<Move>,
}

impl Analysis {
    /// Analyzes a board.
    #[instrument(skip(board), fields(board = %board.notation()))]
    pub fn of(board: &Board) -> Result<Self, EngineError> {
        Ok(Self {
            board: board.notation(),
            to_move: player(board),
            legal_moves: actions(board),
            outcome: outcome(board),
            value: evaluate(board)?,
            best_move: best_move(board)?,
        })
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board:       {}", self.board)?;
        writeln!(f, "Outcome:     {}", self.outcome)?;
        if !self.outcome.is_over() {
            writeln!(f, "To move:     {}", self.to_move)?;
        }
        let moves = self
            .legal_moves
            .iter()
            .map(Move::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(f, "Legal moves: {}", if moves.is_empty() { "none" } else { moves.as_str() })?;
        writeln!(f, "Value:       {}", self.value)?;
        match self.best_move {
            Some(mv) => write!(f, "Best move:   {}", mv),
            None => write!(f, "Best move:   none"),
        }
    }
}
