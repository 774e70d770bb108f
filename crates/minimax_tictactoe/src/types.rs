//! Core domain types for tic-tac-toe.

use crate::error::{EngineError, EngineErrorKind};
use crate::invariants::{BoardInvariants, InvariantSet};
use derive_more::Display;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Side length of the board.
pub const SIZE: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = SIZE * SIZE;

/// A player's mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize,
)]
pub enum Mark {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Mark {
    /// Returns the opponent mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Score of a win by this mark, from X's point of view.
    pub fn win_score(self) -> i8 {
        match self {
            Mark::X => 1,
            Mark::O => -1,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a player's mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Single-character symbol used by the text notation.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Mark::X) => 'X',
            Cell::Occupied(Mark::O) => 'O',
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        Cell::Occupied(mark)
    }
}

impl TryFrom<Cell> for Mark {
    type Error = EngineError;

    #[track_caller]
    fn try_from(cell: Cell) -> Result<Self, Self::Error> {
        cell.mark().ok_or_else(|| {
            EngineError::new(EngineErrorKind::InvalidPlayer(
                "an empty cell holds no mark".to_string(),
            ))
        })
    }
}

/// A move: the row and column of the cell to fill.
///
/// Any coordinates can be held here; whether the move is legal is decided
/// against a board by [`crate::result`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    Serialize,
    Deserialize,
    new,
)]
#[display("({row}, {col})")]
pub struct Move {
    /// Row index (0-2).
    pub row: usize,
    /// Column index (0-2).
    pub col: usize,
}

impl Move {
    /// Creates a move from a row-major cell index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        (index < CELLS).then(|| Self::new(index / SIZE, index % SIZE))
    }

    /// Row-major cell index (0-8) of this move.
    pub fn index(self) -> usize {
        self.row * SIZE + self.col
    }

    /// Checks if both coordinates fall on the board.
    pub fn is_on_board(self) -> bool {
        self.row < SIZE && self.col < SIZE
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values: there are no public mutators, and every move
/// produces a fresh board through [`crate::result`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "[[Cell; SIZE]; SIZE]", into = "[[Cell; SIZE]; SIZE]")]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Builds a board from rows of cells.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPlayer` if the marks could not have come from
    /// alternating play: X must lead O by zero or one mark, and at most
    /// one mark may own a completed line.
    pub fn from_rows(rows: [[Cell; SIZE]; SIZE]) -> Result<Self, EngineError> {
        let board = Self { cells: rows };
        BoardInvariants::check_all(&board).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description)
                .collect::<Vec<_>>()
                .join("; ");
            EngineError::new(EngineErrorKind::InvalidPlayer(format!(
                "malformed board: {}",
                descriptions
            )))
        })?;
        Ok(board)
    }

    /// Gets the cell a move points at, or `None` when off the board.
    pub fn get(&self, mv: Move) -> Option<Cell> {
        self.cells.get(mv.row)?.get(mv.col).copied()
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Iterates over every cell with its coordinates, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Move, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, cell)| (Move::new(row, col), *cell))
        })
    }

    /// Number of cells holding the given mark.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells()
            .filter(|(_, cell)| *cell == Cell::Occupied(mark))
            .count()
    }

    /// Number of non-empty cells.
    pub fn filled(&self) -> usize {
        self.cells().filter(|(_, cell)| !cell.is_empty()).count()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.filled() == CELLS
    }

    /// Copy of this board with `mark` written at `mv`.
    pub(crate) fn with_mark(&self, mv: Move, mark: Mark) -> Self {
        let mut next = *self;
        next.cells[mv.row][mv.col] = Cell::Occupied(mark);
        next
    }
}

impl TryFrom<[[Cell; SIZE]; SIZE]> for Board {
    type Error = EngineError;

    fn try_from(rows: [[Cell; SIZE]; SIZE]) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Board> for [[Cell; SIZE]; SIZE] {
    fn from(board: Board) -> Self {
        board.cells
    }
}

/// Outcome of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a line.
    #[display("{_0} wins")]
    Won(Mark),
    /// Board is full with no completed line.
    #[display("Draw")]
    Draw,
    /// Game is still ongoing.
    #[display("In progress")]
    InProgress,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Won(mark) => Some(mark),
            Outcome::Draw | Outcome::InProgress => None,
        }
    }

    /// Returns true once the game has ended.
    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }
}
