//! Errors raised while building a puzzle.

use crate::Direction;

/// Errors that can occur when constructing a [`Puzzle`](crate::Puzzle).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PuzzleError {
    /// The layout has no rows or no columns.
    #[display("puzzle layout is empty")]
    EmptyGrid,
    /// A row's length differs from the first row.
    #[display("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// A layout character is neither `#`, `.` nor an ASCII letter.
    #[display("invalid character {ch:?} at row {row}, column {col}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
    },
    /// A clue line does not match `<number><A|D>: <text>`.
    #[display("malformed clue line {line:?}")]
    MalformedClue {
        /// The offending line.
        line: String,
    },
    /// A clue refers to an entry that does not exist in the grid.
    #[display("no {direction} entry numbered {number}")]
    UnknownEntry {
        /// Clue number given by the clue line.
        number: u16,
        /// Direction given by the clue line.
        direction: Direction,
    },
    /// The grid has more entry starts than clue numbers can count.
    #[display("puzzle has more than {} clue numbers", u16::MAX)]
    TooManyEntries,
}
