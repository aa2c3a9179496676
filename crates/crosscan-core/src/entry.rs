//! Entry (answer slot) representation.

use crate::{Direction, Position};

/// Index of an [`Entry`] in its puzzle's entry table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("#{_0}")]
pub struct EntryId(usize);

impl EntryId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw table index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A word slot: a maximal run of contiguous white cells in one direction.
///
/// Cells are ordered by increasing column (across) or row (down).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    direction: Direction,
    clue_number: u16,
    cells: Vec<Position>,
    clue: Option<String>,
}

impl Entry {
    pub(crate) fn new(direction: Direction, clue_number: u16, cells: Vec<Position>) -> Self {
        debug_assert!(cells.len() >= 2);
        Self {
            direction,
            clue_number,
            cells,
            clue: None,
        }
    }

    /// Returns the direction of this entry.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the clue number shared with the entry's first cell.
    #[must_use]
    pub fn clue_number(&self) -> u16 {
        self.clue_number
    }

    /// Returns the cell positions of this entry in writing order.
    #[must_use]
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    /// Returns the position of the `index`-th cell.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<Position> {
        self.cells.get(index).copied()
    }

    /// Returns the first cell of the entry.
    #[must_use]
    pub fn first_cell(&self) -> Position {
        self.cells[0]
    }

    /// Returns the last cell of the entry.
    #[must_use]
    pub fn last_cell(&self) -> Position {
        self.cells[self.cells.len() - 1]
    }

    /// Returns the number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; entries span at least two cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the clue text, if one was supplied.
    #[must_use]
    pub fn clue(&self) -> Option<&str> {
        self.clue.as_deref()
    }

    pub(crate) fn set_clue(&mut self, clue: String) {
        self.clue = Some(clue);
    }
}
