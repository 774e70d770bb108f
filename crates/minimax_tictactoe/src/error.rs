//! Engine error types.

use crate::types::Move;
use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong inside the engine.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum EngineErrorKind {
    /// The move is not among the legal actions of the board.
    #[display("Illegal move {}: not among the legal actions", _0)]
    IllegalMove(Move),

    /// The board does not describe a position reachable by alternating play.
    #[display("Invalid player: {}", _0)]
    InvalidPlayer(String),
}

/// Engine error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Engine error: {} at {}:{}", kind, file, line)]
pub struct EngineError {
    /// Error kind.
    pub kind: EngineErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl EngineError {
    /// Creates a new engine error with caller location tracking.
    #[track_caller]
    #[instrument(level = "debug")]
    pub fn new(kind: EngineErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &EngineErrorKind {
        &self.kind
    }

    /// Checks if this error reports an illegal move.
    pub fn is_illegal_move(&self) -> bool {
        matches!(self.kind, EngineErrorKind::IllegalMove(_))
    }
}
