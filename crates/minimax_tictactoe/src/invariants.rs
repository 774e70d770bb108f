//! First-class invariants for tic-tac-toe boards.
//!
//! Invariants are logical properties every board produced by alternating
//! play satisfies. Boards built from outside input are checked against them
//! before any engine function sees them.

use crate::rules::lines;
use crate::types::{Board, Mark};
use derive_more::Display;
use tracing::{instrument, warn};

/// A property a board must satisfy.
pub trait Invariant<S> {
    /// Whether the property holds for `state`.
    fn holds(state: &S) -> bool;

    /// Short description, used in error messages.
    fn description() -> &'static str;
}

/// A failed invariant, by description.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// What was violated.
    pub description: &'static str,
}

/// Invariants checked together; every violation is reported, not just the first.
pub trait InvariantSet<S> {
    /// Returns the descriptions of every invariant that fails for `state`.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, A: Invariant<S>, B: Invariant<S>> InvariantSet<S> for (A, B) {
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (A::holds(state), A::description()),
            (B::holds(state), B::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation { description })
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: X leads O by zero or one mark.
///
/// X always moves first and the players alternate, so the counts can never
/// diverge by more than one, and O can never be ahead.
pub struct MarkBalanceInvariant;

impl Invariant<Board> for MarkBalanceInvariant {
    #[instrument(level = "trace", skip(board))]
    fn holds(board: &Board) -> bool {
        let x_count = board.count(Mark::X);
        let o_count = board.count(Mark::O);

        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X leads O by zero or one mark"
    }
}

/// Invariant: at most one mark owns a completed line.
pub struct SingleWinnerInvariant;

impl Invariant<Board> for SingleWinnerInvariant {
    #[instrument(level = "trace", skip(board))]
    fn holds(board: &Board) -> bool {
        let mut owners = lines::LINES
            .iter()
            .filter_map(|line| lines::line_owner(board, line));

        let valid = match owners.next() {
            Some(first) => owners.all(|owner| owner == first),
            None => true,
        };
        if !valid {
            warn!("Both marks own a completed line");
        }
        valid
    }

    fn description() -> &'static str {
        "at most one mark owns a completed line"
    }
}

/// All board invariants as a composable set.
pub type BoardInvariants = (MarkBalanceInvariant, SingleWinnerInvariant);
