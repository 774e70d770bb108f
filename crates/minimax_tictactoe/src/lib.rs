//! Minimax tic-tac-toe - pure game logic for an unbeatable player
//!
//! The engine is a set of stateless functions over an explicit [`Board`]
//! value. Boards are never mutated; every move produces a new board.
//!
//! # Architecture
//!
//! - **Types**: boards, cells, marks, moves and outcomes
//! - **Engine**: turn inference, legal moves, move application
//! - **Rules**: line checks and outcome detection
//! - **Search**: exhaustive minimax over the full game tree
//! - **Notation**: text form of boards for drivers and tests
//!
//! # Example
//!
//! ```
//! use minimax_tictactoe::{initial_state, minimax, result, terminal, Decision};
//!
//! # fn example() -> Result<(), minimax_tictactoe::EngineError> {
//! let mut board = initial_state();
//! while !terminal(&board) {
//!     match minimax(&board)? {
//!         Decision::Play(mv) => board = result(&board, mv)?,
//!         Decision::GameOver(_) => break,
//!     }
//! }
//! assert_eq!(minimax_tictactoe::winner(&board), None);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod engine;
mod error;
mod notation;
mod search;
mod types;

// Public modules
pub mod invariants;
pub mod rules;

// Crate-level exports - Types
pub use types::{Board, CELLS, Cell, Mark, Move, Outcome, SIZE};

// Crate-level exports - Errors
pub use error::{EngineError, EngineErrorKind};
pub use notation::NotationError;

// Crate-level exports - Engine operations
pub use engine::{actions, initial_state, player, result};
pub use rules::{outcome, score, terminal, winner};

// Crate-level exports - Search
pub use search::{Decision, best_move, evaluate, minimax};
