//! Player trait and implementations.

use anyhow::{Context, Result, anyhow, bail};
use minimax_tictactoe::{Board, Decision, Move, actions, best_move, minimax};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Trait for players that can make moves.
pub trait Player {
    /// Gets a move from this player.
    ///
    /// Only called on boards that are not terminal.
    fn choose_move(&mut self, board: &Board) -> Result<Move>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

/// Engine player backed by exhaustive minimax.
pub struct MinimaxPlayer {
    name: String,
}

impl MinimaxPlayer {
    /// Creates a new minimax player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for MinimaxPlayer {
    #[instrument(skip(self, board), fields(player = %self.name))]
    fn choose_move(&mut self, board: &Board) -> Result<Move> {
        match minimax(board)? {
            Decision::Play(mv) => {
                debug!(%mv, "Engine chose move");
                Ok(mv)
            }
            Decision::GameOver(score) => bail!("No move on a finished board (score {})", score),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Simple AI that picks the first available square.
pub struct FirstAvailable {
    name: String,
}

impl FirstAvailable {
    /// Creates a new first-available player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for FirstAvailable {
    #[instrument(skip(self, board), fields(player = %self.name))]
    fn choose_move(&mut self, board: &Board) -> Result<Move> {
        let mv = actions(board)
            .first()
            .copied()
            .ok_or_else(|| anyhow!("No valid moves available"))?;
        debug!(%mv, "AI chose move");
        Ok(mv)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Human player reading moves as text.
///
/// Accepts `row col` (also `row,col`) with 0-based coordinates, or a single
/// keypad digit `1`-`9` counting cells in row-major order.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
    hints: bool,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a new human player over the given input and output.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
            hints: false,
        }
    }

    /// Shows the engine's suggestion before each turn.
    pub fn with_hints(mut self, hints: bool) -> Self {
        self.hints = hints;
        self
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    #[instrument(skip(self, board), fields(player = %self.name))]
    fn choose_move(&mut self, board: &Board) -> Result<Move> {
        if self.hints
            && let Some(hint) = best_move(board)?
        {
            writeln!(self.output, "Hint: {}", hint)?;
        }

        loop {
            let legal = actions(board);
            write!(self.output, "{}, your move (row col or 1-9): ", self.name)?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read move")?;
            if read == 0 {
                bail!("Input closed");
            }

            let Some(mv) = parse_move(&line) else {
                writeln!(self.output, "Could not read '{}'", line.trim())?;
                continue;
            };
            if !legal.contains(&mv) {
                writeln!(self.output, "Square {} is not available", mv)?;
                continue;
            }

            debug!(%mv, "Human chose move");
            return Ok(mv);
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Parses `row col`, `row,col` or a keypad digit `1`-`9` into a move.
#[instrument]
pub fn parse_move(input: &str) -> Option<Move> {
    let parts: Vec<usize> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(str::parse)
        .collect::<Result<_, _>>()
        .ok()?;

    match parts.as_slice() {
        [digit] if (1..=9).contains(digit) => Move::from_index(digit - 1),
        [row, col] => Some(Move::new(*row, *col)),
        _ => None,
    }
}
