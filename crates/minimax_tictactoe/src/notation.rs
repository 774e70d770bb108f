//! Text notation for boards.
//!
//! A board is written as nine cells in row-major order: `X` and `O` for
//! marks, `.`, `-` or `_` for empty cells. Slashes, pipes and whitespace
//! are separators and ignored, so `"XX./OO./..."` and `"XX.OO...."` name
//! the same board.

use crate::types::{Board, CELLS, Cell, Mark, SIZE};
use derive_more::{Display, Error};
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// Notation error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Notation error: {} at {}:{}", message, file, line)]
pub struct NotationError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl NotationError {
    /// Creates a new notation error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl Board {
    /// Writes the board in compact notation, rows separated by `/`.
    pub fn notation(&self) -> String {
        self.rows()
            .iter()
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl FromStr for Board {
    type Err = NotationError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(CELLS);
        for (offset, ch) in s.chars().enumerate() {
            let cell = match ch {
                'X' | 'x' => Cell::Occupied(Mark::X),
                'O' | 'o' => Cell::Occupied(Mark::O),
                '.' | '-' | '_' => Cell::Empty,
                '/' | '|' => continue,
                c if c.is_whitespace() => continue,
                other => {
                    return Err(NotationError::new(format!(
                        "unexpected character '{}' at offset {}",
                        other, offset
                    )));
                }
            };
            cells.push(cell);
        }

        if cells.len() != CELLS {
            return Err(NotationError::new(format!(
                "expected {} cells, found {}",
                CELLS,
                cells.len()
            )));
        }

        let mut rows = [[Cell::Empty; SIZE]; SIZE];
        for (index, cell) in cells.into_iter().enumerate() {
            rows[index / SIZE][index % SIZE] = cell;
        }

        Board::from_rows(rows).map_err(|e| NotationError::new(e.kind.to_string()))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows().iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, "|")?;
                }
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Move;

    #[test]
    fn test_parse_with_separators() {
        let board: Board = "XX./OO./...".parse().unwrap();
        assert_eq!(board.get(Move::new(0, 1)), Some(Cell::Occupied(Mark::X)));
        assert_eq!(board.get(Move::new(1, 0)), Some(Cell::Occupied(Mark::O)));
        assert_eq!(board.get(Move::new(2, 2)), Some(Cell::Empty));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let upper: Board = "X-- -O- ---".parse().unwrap();
        let lower: Board = "x__|_o_|___".parse().unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_parse_rejects_bad_character() {
        let err = "XX?/OO./...".parse::<Board>().unwrap_err();
        assert!(err.message.contains("'?'"));
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        let err = "XO./...".parse::<Board>().unwrap_err();
        assert!(err.message.contains("found 6"));
    }

    #[test]
    fn test_parse_rejects_malformed_board() {
        let err = "OOO/.../...".parse::<Board>().unwrap_err();
        assert!(err.message.contains("Invalid player"));
    }

    #[test]
    fn test_notation() {
        let board: Board = "x.o x.. ...".parse().unwrap();
        assert_eq!(board.notation(), "X.O/X../...");
    }

    #[test]
    fn test_display_grid() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        assert_eq!(board.to_string(), "X|O|.\n-+-+-\n.|X|.\n-+-+-\n.|.|O");
    }
}
