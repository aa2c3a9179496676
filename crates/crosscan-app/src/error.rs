use std::io;

use crosscan_core::PuzzleError;

/// Errors that end a terminal session.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum AppError {
    /// Reading the puzzle file or talking to the terminal failed.
    #[display("i/o error: {_0}")]
    Io(io::Error),
    /// The puzzle file could not be parsed.
    #[display("invalid puzzle: {_0}")]
    Puzzle(PuzzleError),
    /// The puzzle has no white cell to start from.
    #[display("puzzle has no white cells")]
    #[from(ignore)]
    NoWhiteCells,
}

