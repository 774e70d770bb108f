//! Game orchestration between players.

use crate::players::Player;
use anyhow::{Context, Result};
use minimax_tictactoe::{
    Board, Mark, Move, Outcome, initial_state, outcome, player, result, terminal,
};
use std::io::Write;
use tracing::{debug, info, instrument};

/// Orchestrates gameplay between two players.
pub struct Orchestrator {
    board: Board,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    history: Vec<Move>,
}

impl Orchestrator {
    /// Creates a new orchestrator starting from the empty board.
    pub fn new(player_x: Box<dyn Player>, player_o: Box<dyn Player>) -> Self {
        Self {
            board: initial_state(),
            player_x,
            player_o,
            history: Vec::new(),
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Runs the game loop until the board is terminal, rendering to `out`.
    #[instrument(skip_all)]
    pub fn run(&mut self, out: &mut impl Write) -> Result<Outcome> {
        info!(
            x = self.player_x.name(),
            o = self.player_o.name(),
            "Starting game orchestration"
        );
        writeln!(out, "{}\n", self.board)?;

        while !terminal(&self.board) {
            let to_move = player(&self.board);
            let current = match to_move {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            let name = current.name().to_string();

            debug!(player = %name, mark = %to_move, "Waiting for move");
            let mv = current.choose_move(&self.board)?;

            self.board = result(&self.board, mv)
                .with_context(|| format!("{} chose an illegal move", name))?;
            self.history.push(mv);

            writeln!(out, "{} ({}) plays {}", name, to_move, mv)?;
            writeln!(out, "{}\n", self.board)?;
        }

        let outcome = outcome(&self.board);
        let summary = match outcome.winner() {
            Some(Mark::X) => format!("{} wins", self.player_x.name()),
            Some(Mark::O) => format!("{} wins", self.player_o.name()),
            None => outcome.to_string(),
        };
        writeln!(out, "{}", summary)?;
        info!(%outcome, moves = self.history.len(), "Game over");
        Ok(outcome)
    }
}
