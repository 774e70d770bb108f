//! Line checks for tic-tac-toe.
//!
//! Every check reduces to [`owner`]: three cells belong to a mark when they
//! are all equal and non-empty.

use crate::types::{Board, Cell, Mark, Move, SIZE};

/// Three cells forming a row, column or diagonal.
pub type Line = [Move; SIZE];

const fn at(row: usize, col: usize) -> Move {
    Move { row, col }
}

/// All eight lines: rows, then columns, then diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [at(0, 0), at(0, 1), at(0, 2)],
    [at(1, 0), at(1, 1), at(1, 2)],
    [at(2, 0), at(2, 1), at(2, 2)],
    // Columns
    [at(0, 0), at(1, 0), at(2, 0)],
    [at(0, 1), at(1, 1), at(2, 1)],
    [at(0, 2), at(1, 2), at(2, 2)],
    // Diagonals
    [at(0, 0), at(1, 1), at(2, 2)],
    [at(0, 2), at(1, 1), at(2, 0)],
];

/// Returns the mark shared by all three cells, if they are equal and non-empty.
pub fn owner(cells: [Cell; SIZE]) -> Option<Mark> {
    let [a, b, c] = cells;
    match a {
        Cell::Occupied(mark) if a == b && b == c => Some(mark),
        _ => None,
    }
}

fn cell(board: &Board, row: usize, col: usize) -> Cell {
    board.get(Move::new(row, col)).unwrap_or_default()
}

/// Returns the owner of an arbitrary line on the board.
pub fn line_owner(board: &Board, line: &Line) -> Option<Mark> {
    owner(line.map(|mv| cell(board, mv.row, mv.col)))
}

/// Returns the owner of row `row`.
pub fn row(board: &Board, row: usize) -> Option<Mark> {
    owner([0, 1, 2].map(|col| cell(board, row, col)))
}

/// Returns the owner of column `col`.
pub fn column(board: &Board, col: usize) -> Option<Mark> {
    owner([0, 1, 2].map(|row| cell(board, row, col)))
}

/// Returns the owner of the top-left to bottom-right diagonal.
pub fn diagonal(board: &Board) -> Option<Mark> {
    owner([0, 1, 2].map(|i| cell(board, i, i)))
}

/// Returns the owner of the top-right to bottom-left diagonal.
pub fn anti_diagonal(board: &Board) -> Option<Mark> {
    owner([0, 1, 2].map(|i| cell(board, i, SIZE - 1 - i)))
}
