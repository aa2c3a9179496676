//! Game state and grid navigation for crossword play.
//!
//! - [`CrosswordGame`] owns the puzzle and is the only place letters are written.
//! - [`Navigator`] tracks the selected cell and writing direction and computes
//!   where the selection goes after typing, deleting, moving, or jumping clues.
//! - [`Session`] is the input layer that routes [`Command`]s to both.
//!
//! Navigation never draws anything; renderers learn about selection changes
//! through a [`SelectionListener`].
//!
//! # Example
//!
//! ```
//! use crosscan_core::{Position, Puzzle};
//! use crosscan_game::{Command, CrosswordGame, Session};
//!
//! let puzzle = Puzzle::from_layout(&["CAT", "A#O", "BEE"]).unwrap();
//! let mut session = Session::new();
//! session.load(CrosswordGame::new(puzzle));
//!
//! for letter in "CAT".chars() {
//!     session.handle(Command::TypeLetter(letter));
//! }
//! // 1-Across is done; the cursor moved on to 3-Across.
//! assert_eq!(session.selected_cell(), Some(Position::new(2, 0)));
//! ```

pub use self::{
    error::GameError,
    game::{CrosswordGame, InputOperation},
    listener::{Selection, SelectionListener},
    navigator::{Navigator, adjacent_entry},
    session::{Command, MoveDirection, Session},
};

mod error;
mod game;
mod listener;
mod navigator;
mod session;
