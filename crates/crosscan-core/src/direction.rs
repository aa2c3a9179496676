//! Writing direction of an entry.

/// The direction an entry runs in, and the writing mode of the player.
///
/// # Examples
///
/// ```
/// use crosscan_core::Direction;
///
/// assert_eq!(Direction::Across.toggled(), Direction::Down);
/// assert_eq!(Direction::Down.step(), (0, 1));
/// assert_eq!(Direction::Across.to_string(), "across");
/// ```
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::Display,
    derive_more::IsVariant,
)]
pub enum Direction {
    /// Left to right along a row.
    #[default]
    #[display("across")]
    Across,
    /// Top to bottom along a column.
    #[display("down")]
    Down,
}

impl Direction {
    /// Both directions, across first.
    pub const ALL: [Self; 2] = [Self::Across, Self::Down];

    /// Returns the other direction.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Across => Self::Down,
            Self::Down => Self::Across,
        }
    }

    /// Returns the unit offset `(dx, dy)` of one step forward in this direction.
    #[must_use]
    pub const fn step(self) -> (isize, isize) {
        match self {
            Self::Across => (1, 0),
            Self::Down => (0, 1),
        }
    }

    /// Returns the single-letter suffix used in clue listings (`A` or `D`).
    #[must_use]
    pub const fn suffix(self) -> char {
        match self {
            Self::Across => 'A',
            Self::Down => 'D',
        }
    }
}
