//! Grid position representation.

use std::fmt::{self, Display};

/// A cell position in a crossword grid.
///
/// Positions are zero-based and ordered row-major, so comparing two positions
/// matches the reading order of the grid.
///
/// # Examples
///
/// ```
/// use crosscan_core::Position;
///
/// let pos = Position::new(2, 3);
/// assert_eq!(pos.row(), 2);
/// assert_eq!(pos.col(), 3);
///
/// // Offsets that would leave the positive quadrant yield `None`.
/// assert_eq!(pos.offset(1, 0), Some(Position::new(2, 4)));
/// assert_eq!(Position::new(0, 0).offset(0, -1), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position from a row and a column index.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row index.
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column index.
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Returns the position `dx` columns right and `dy` rows down.
    ///
    /// Negative offsets move left/up. Returns `None` if the result would have a
    /// negative coordinate; the upper bound is checked by the puzzle.
    #[must_use]
    pub fn offset(self, dx: isize, dy: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(dy)?;
        let col = self.col.checked_add_signed(dx)?;
        Some(Self { row, col })
    }

    /// Returns the row-major index of this position in a grid of the given width.
    #[must_use]
    pub const fn index_in(self, width: usize) -> usize {
        self.row * width + self.col
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
