//! Grid cell representation.

use crate::{Direction, EntryId, Position};

/// A single square of a crossword grid.
///
/// White cells are playable and may belong to an across entry, a down entry,
/// or both. Black cells never belong to an entry and never hold a value.
/// Entry membership is stored as [`EntryId`]s into the owning puzzle's entry
/// table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    position: Position,
    white: bool,
    value: Option<char>,
    solution: Option<char>,
    clue_number: Option<u16>,
    across: Option<EntryId>,
    down: Option<EntryId>,
}

impl Cell {
    pub(crate) fn black(position: Position) -> Self {
        Self {
            position,
            white: false,
            value: None,
            solution: None,
            clue_number: None,
            across: None,
            down: None,
        }
    }

    pub(crate) fn white(position: Position, solution: Option<char>) -> Self {
        Self {
            white: true,
            solution,
            ..Self::black(position)
        }
    }

    /// Returns the position of this cell.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns `true` if this cell is playable.
    #[must_use]
    pub fn is_white(&self) -> bool {
        self.white
    }

    /// Returns the letter currently entered in this cell.
    #[must_use]
    pub fn value(&self) -> Option<char> {
        self.value
    }

    /// Returns `true` if no letter is entered in this cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Returns the solution letter, if the puzzle carries one.
    #[must_use]
    pub fn solution(&self) -> Option<char> {
        self.solution
    }

    /// Returns the clue number printed on this cell.
    ///
    /// Only cells that start an entry carry a number.
    #[must_use]
    pub fn clue_number(&self) -> Option<u16> {
        self.clue_number
    }

    /// Returns the entry containing this cell in the given direction.
    #[must_use]
    pub fn entry(&self, direction: Direction) -> Option<EntryId> {
        match direction {
            Direction::Across => self.across,
            Direction::Down => self.down,
        }
    }

    pub(crate) fn set_value(&mut self, value: Option<char>) {
        debug_assert!(self.white || value.is_none());
        self.value = value;
    }

    pub(crate) fn set_clue_number(&mut self, number: u16) {
        self.clue_number = Some(number);
    }

    pub(crate) fn set_entry(&mut self, direction: Direction, id: EntryId) {
        match direction {
            Direction::Across => self.across = Some(id),
            Direction::Down => self.down = Some(id),
        }
    }
}
