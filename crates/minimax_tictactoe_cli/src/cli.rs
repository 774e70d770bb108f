//! Command-line interface for the tic-tac-toe engine.

use crate::config::{OpponentKind, Side};
use clap::{Parser, Subcommand};
use minimax_tictactoe::{Board, NotationError};
use std::path::PathBuf;

/// Unbeatable tic-tac-toe engine
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Unbeatable tic-tac-toe engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the optimal move for a position
    BestMove {
        /// Board in notation, e.g. "XX./OO./..."
        #[arg(value_parser = parse_board)]
        board: Board,
    },

    /// Describe a position: turn, legal moves, outcome and value
    Analyze {
        /// Board in notation, e.g. "XX./OO./..."
        #[arg(value_parser = parse_board)]
        board: Board,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Let the engine play X against a computer opponent
    SelfPlay {
        /// Opponent playing O
        #[arg(long, value_enum, default_value_t = OpponentKind::Minimax)]
        opponent: OpponentKind,
    },

    /// Play against the engine on the terminal
    Play {
        /// Path to a TOML play config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Mark to play (overrides the config file)
        #[arg(long, value_enum)]
        human: Option<Side>,

        /// Show the engine's suggested move before each turn
        #[arg(long)]
        hints: bool,
    },
}

fn parse_board(s: &str) -> Result<Board, NotationError> {
    s.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_best_move() {
        let cli = Cli::try_parse_from(["tictactoe", "best-move", "XX./OO./..."]).unwrap();
        match cli.command {
            Command::BestMove { board } => assert_eq!(board.notation(), "XX./OO./..."),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_rejects_bad_board() {
        assert!(Cli::try_parse_from(["tictactoe", "analyze", "XXXX"]).is_err());
    }

    #[test]
    fn test_parses_play_overrides() {
        let cli = Cli::try_parse_from(["tictactoe", "play", "--human", "o", "--hints"]).unwrap();
        match cli.command {
            Command::Play { config, human, hints } => {
                assert_eq!(config, None);
                assert_eq!(human, Some(Side::O));
                assert!(hints);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_self_play_opponent_names() {
        let cli =
            Cli::try_parse_from(["tictactoe", "self-play", "--opponent", "first-available"])
                .unwrap();
        assert!(matches!(
            cli.command,
            Command::SelfPlay { opponent: OpponentKind::FirstAvailable }
        ));
    }
}
