//! Command-line driver for the minimax tic-tac-toe engine
//!
//! The engine crate holds all game logic; this crate only collects input,
//! renders boards and wires players together.
//!
//! # Architecture
//!
//! - **Cli**: `clap` subcommands
//! - **Config**: TOML play configuration
//! - **Players**: human, minimax and first-available players
//! - **Orchestrator**: the game loop
//! - **Report**: position analysis

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod orchestrator;
mod players;
mod report;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, OpponentKind, PlayConfig, Side};

// Crate-level exports - Players
pub use players::{FirstAvailable, HumanPlayer, MinimaxPlayer, Player, parse_move};

// Crate-level exports - Game loop and analysis
pub use orchestrator::Orchestrator;
pub use report::Analysis;
