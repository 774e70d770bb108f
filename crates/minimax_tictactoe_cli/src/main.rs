//! Minimax tic-tac-toe - Unified CLI
//!
//! Analyze positions, watch the engine play, or play against it.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use minimax_tictactoe::{Board, Decision, Mark, minimax};
use minimax_tictactoe_cli::{
    Analysis, Cli, Command, FirstAvailable, HumanPlayer, MinimaxPlayer, OpponentKind, Orchestrator,
    PlayConfig, Player, Side,
};
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::BestMove { board } => run_best_move(&board),
        Command::Analyze { board, json } => run_analyze(&board, json),
        Command::SelfPlay { opponent } => run_self_play(opponent),
        Command::Play {
            config,
            human,
            hints,
        } => run_play(config, human, hints),
    }
}

/// Print the optimal move, or the final score of a finished board
#[instrument(skip(board), fields(board = %board.notation()))]
fn run_best_move(board: &Board) -> Result<()> {
    match minimax(board)? {
        Decision::Play(mv) => println!("{}", mv),
        Decision::GameOver(score) => println!("game over, score {}", score),
    }
    Ok(())
}

/// Print the analysis of a position as text or JSON
#[instrument(skip(board), fields(board = %board.notation()))]
fn run_analyze(board: &Board, json: bool) -> Result<()> {
    let analysis = Analysis::of(board)?;
    if json {
        let text = serde_json::to_string_pretty(&analysis).context("Failed to encode analysis")?;
        println!("{}", text);
    } else {
        println!("{}", analysis);
    }
    Ok(())
}

/// Build a computer player of the given kind
fn computer(kind: OpponentKind, mark: Mark) -> Box<dyn Player> {
    let name = format!("Engine {}", mark);
    match kind {
        OpponentKind::Minimax => Box::new(MinimaxPlayer::new(name)),
        OpponentKind::FirstAvailable => {
            Box::new(FirstAvailable::new(format!("{} (first available)", name)))
        }
    }
}

/// Run minimax as X against the chosen opponent
#[instrument]
fn run_self_play(opponent: OpponentKind) -> Result<()> {
    info!("Starting self-play");
    let player_x = computer(OpponentKind::Minimax, Mark::X);
    let player_o = computer(opponent, Mark::O);

    let mut orchestrator = Orchestrator::new(player_x, player_o);
    orchestrator.run(&mut io::stdout())?;
    Ok(())
}

/// Run a human-versus-engine game on stdin/stdout
#[instrument]
fn run_play(config: Option<PathBuf>, human: Option<Side>, hints: bool) -> Result<()> {
    let config = PlayConfig::load(config.as_deref())?.with_overrides(human, hints);
    let human_mark = Mark::from(*config.human());
    info!(human = %human_mark, opponent = %config.opponent(), "Starting game");

    let human: Box<dyn Player> = Box::new(
        HumanPlayer::new(
            format!("Player {}", human_mark),
            BufReader::new(io::stdin()),
            io::stdout(),
        )
        .with_hints(*config.hints()),
    );
    let engine = computer(*config.opponent(), human_mark.opponent());

    let (player_x, player_o) = match human_mark {
        Mark::X => (human, engine),
        Mark::O => (engine, human),
    };

    let mut orchestrator = Orchestrator::new(player_x, player_o);
    orchestrator.run(&mut io::stdout())?;
    Ok(())
}
