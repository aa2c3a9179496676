//! Core data structures for crossword applications.
//!
//! This crate provides the puzzle model consumed by navigation and game logic:
//!
//! - [`position`]: Zero-based `(row, column)` grid coordinates
//! - [`direction`]: Across/down writing direction
//! - [`cell`] and [`entry`]: Grid squares and the word slots they form
//! - [`puzzle`]: The grid itself, its clue numbering, and layout parsing
//! - [`model`]: The read-only [`PuzzleModel`] trait navigation depends on
//!
//! Cells and entries refer to each other by index rather than by reference, so
//! a [`Puzzle`] is a plain owned value that can be cloned and compared.
//!
//! # Examples
//!
//! ```
//! use crosscan_core::{Direction, Position, Puzzle, PuzzleModel};
//!
//! let puzzle = Puzzle::from_layout(&["..#", "...", "#.."]).unwrap();
//!
//! let cell = puzzle.cell(Position::new(1, 1)).unwrap();
//! let across = cell.entry(Direction::Across).unwrap();
//! assert_eq!(puzzle.entry(across).unwrap().clue_number(), 3);
//! ```

pub mod cell;
pub mod direction;
pub mod entry;
pub mod error;
pub mod model;
pub mod position;
pub mod puzzle;

pub use self::{
    cell::Cell,
    direction::Direction,
    entry::{Entry, EntryId},
    error::PuzzleError,
    model::PuzzleModel,
    position::Position,
    puzzle::Puzzle,
};
