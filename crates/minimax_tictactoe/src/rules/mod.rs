//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board according to
//! tic-tac-toe rules. Line checks live apart from outcome detection so each
//! can be tested on its own.

pub mod lines;
pub mod outcome;

pub use lines::{LINES, Line, anti_diagonal, column, diagonal, line_owner, owner, row};
pub use outcome::{outcome, score, terminal, winner};
