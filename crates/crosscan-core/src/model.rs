//! Read-only puzzle access used by navigation.

use crate::{Cell, Direction, Entry, EntryId, Position};

/// Read-only view of a crossword grid.
///
/// Navigation only ever reads through this trait, so any puzzle store that
/// can answer these queries can drive a navigator. [`Puzzle`](crate::Puzzle)
/// is the standard implementation.
pub trait PuzzleModel {
    /// Number of columns.
    fn width(&self) -> usize;

    /// Number of rows.
    fn height(&self) -> usize;

    /// Returns the cell at `pos`, or `None` if `pos` is out of bounds.
    fn cell(&self, pos: Position) -> Option<&Cell>;

    /// Returns the entry with the given id.
    fn entry(&self, id: EntryId) -> Option<&Entry>;

    /// Looks up the entry with the given clue number and direction.
    fn find_entry(&self, clue_number: u16, direction: Direction) -> Option<EntryId>;

    /// Returns the highest clue number in the grid.
    ///
    /// Clue numbers run from 1 to this value without gaps, though not every
    /// number has an entry in both directions.
    fn num_entries(&self) -> usize;

    /// Returns the row-major first white cell.
    fn first_white_cell(&self) -> Option<Position>;

    /// Returns `true` if `pos` is in bounds and white.
    fn is_white(&self, pos: Position) -> bool {
        self.cell(pos).is_some_and(Cell::is_white)
    }

    /// Returns `true` if `pos` holds no letter.
    ///
    /// Out-of-bounds positions are reported as empty.
    fn is_empty(&self, pos: Position) -> bool {
        self.cell(pos).is_none_or(Cell::is_empty)
    }

    /// Returns the entry containing `pos` in `direction`.
    fn entry_at(&self, pos: Position, direction: Direction) -> Option<EntryId> {
        self.cell(pos).and_then(|cell| cell.entry(direction))
    }
}
