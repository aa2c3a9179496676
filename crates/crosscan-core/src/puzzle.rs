//! Crossword puzzle grid with numbered entries.

use std::{
    collections::HashMap,
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Cell, Direction, Entry, EntryId, Position, PuzzleError, PuzzleModel};

/// A crossword grid together with its entries and clue numbering.
///
/// Cells and entries live in two tables that refer to each other by index:
/// a [`Cell`] stores the [`EntryId`]s of the entries it belongs to, and an
/// [`Entry`] stores the [`Position`]s of its cells. The shape of the puzzle is
/// fixed after construction; only cell values change during play.
///
/// # Layout format
///
/// Each line of the grid section is one row. `#` is a black cell, `.` is a
/// white cell with an unknown solution, and an ASCII letter is a white cell
/// whose solution is that letter. An optional clue section follows the grid
/// after a blank line, one `<number><A|D>: <text>` per line.
///
/// # Examples
///
/// ```
/// use crosscan_core::{Direction, Position, Puzzle, PuzzleModel};
///
/// let puzzle: Puzzle = "\
/// CAT
/// A#O
/// BEE
///
/// 1A: Feline
/// 1D: Taxi
/// "
/// .parse()
/// .unwrap();
///
/// assert_eq!(puzzle.num_entries(), 3);
/// let id = puzzle.find_entry(1, Direction::Across).unwrap();
/// let entry = puzzle.entry(id).unwrap();
/// assert_eq!(entry.len(), 3);
/// assert_eq!(entry.clue(), Some("Feline"));
/// assert_eq!(puzzle.first_white_cell(), Some(Position::new(0, 0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    entries: Vec<Entry>,
    entry_index: HashMap<(u16, Direction), EntryId>,
    num_entries: usize,
    first_white: Option<Position>,
}

impl Puzzle {
    /// Builds a puzzle from grid rows.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::EmptyGrid`] if there are no rows or the rows are empty,
    /// [`PuzzleError::RaggedRow`] if rows differ in length, and
    /// [`PuzzleError::InvalidCharacter`] for characters outside the layout alphabet,
    /// and [`PuzzleError::TooManyEntries`] if clue numbers would exceed `u16::MAX`.
    pub fn from_layout<S>(rows: &[S]) -> Result<Self, PuzzleError>
    where
        S: AsRef<str>,
    {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().chars().count());
        if height == 0 || width == 0 {
            return Err(PuzzleError::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(width * height);
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != width {
                return Err(PuzzleError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let pos = Position::new(row, col);
                let cell = match ch {
                    '#' => Cell::black(pos),
                    '.' => Cell::white(pos, None),
                    ch if ch.is_ascii_alphabetic() => {
                        Cell::white(pos, Some(ch.to_ascii_uppercase()))
                    }
                    ch => return Err(PuzzleError::InvalidCharacter { ch, row, col }),
                };
                cells.push(cell);
            }
        }

        let mut puzzle = Self {
            width,
            height,
            cells,
            entries: Vec::new(),
            entry_index: HashMap::new(),
            num_entries: 0,
            first_white: None,
        };
        puzzle.assign_entries()?;
        Ok(puzzle)
    }

    fn assign_entries(&mut self) -> Result<(), PuzzleError> {
        let mut clue_number = 0u16;
        for row in 0..self.height {
            for col in 0..self.width {
                let pos = Position::new(row, col);
                if !self.is_white(pos) {
                    continue;
                }
                if self.first_white.is_none() {
                    self.first_white = Some(pos);
                }

                let starts = Direction::ALL.map(|direction| self.starts_entry(pos, direction));
                if !starts.contains(&true) {
                    continue;
                }
                clue_number = clue_number
                    .checked_add(1)
                    .ok_or(PuzzleError::TooManyEntries)?;
                self.cell_mut(pos).set_clue_number(clue_number);

                for (direction, starts) in Direction::ALL.into_iter().zip(starts) {
                    if starts {
                        self.push_entry(pos, direction, clue_number);
                    }
                }
            }
        }
        self.num_entries = usize::from(clue_number);
        Ok(())
    }

    fn starts_entry(&self, pos: Position, direction: Direction) -> bool {
        let (dx, dy) = direction.step();
        let before_open = pos
            .offset(-dx, -dy)
            .is_some_and(|before| self.is_white(before));
        let after_open = pos
            .offset(dx, dy)
            .is_some_and(|after| self.is_white(after));
        !before_open && after_open
    }

    fn push_entry(&mut self, start: Position, direction: Direction, clue_number: u16) {
        let (dx, dy) = direction.step();
        let mut positions = vec![start];
        let mut pos = start;
        while let Some(next) = pos.offset(dx, dy).filter(|next| self.is_white(*next)) {
            positions.push(next);
            pos = next;
        }

        let id = EntryId::new(self.entries.len());
        for &pos in &positions {
            self.cell_mut(pos).set_entry(direction, id);
        }
        self.entries
            .push(Entry::new(direction, clue_number, positions));
        self.entry_index.insert((clue_number, direction), id);
    }

    fn cell_mut(&mut self, pos: Position) -> &mut Cell {
        let index = pos.index_in(self.width);
        &mut self.cells[index]
    }

    fn contains(&self, pos: Position) -> bool {
        pos.row() < self.height && pos.col() < self.width
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Returns all white cells in row-major order.
    pub fn white_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|cell| cell.is_white())
    }

    /// Returns the number of white cells.
    #[must_use]
    pub fn white_cell_count(&self) -> usize {
        self.white_cells().count()
    }

    /// Returns all entries with their ids, ordered by clue number and then
    /// across before down.
    pub fn entries(&self) -> impl Iterator<Item = (EntryId, &Entry)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (EntryId::new(index), entry))
    }

    /// Returns the entries running in `direction`, ordered by clue number.
    pub fn entries_in(&self, direction: Direction) -> impl Iterator<Item = (EntryId, &Entry)> {
        self.entries()
            .filter(move |(_, entry)| entry.direction() == direction)
    }

    /// Attaches clue text to an entry.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::UnknownEntry`] if no entry has this number and direction.
    pub fn set_clue(
        &mut self,
        number: u16,
        direction: Direction,
        text: impl Into<String>,
    ) -> Result<(), PuzzleError> {
        let id = self
            .find_entry(number, direction)
            .ok_or(PuzzleError::UnknownEntry { number, direction })?;
        self.entries[id.index()].set_clue(text.into());
        Ok(())
    }

    /// Stores `value` in the white cell at `pos`.
    ///
    /// Returns `false` and leaves the grid untouched if `pos` is out of bounds
    /// or black. Letters are stored as given; validation is the caller's job.
    pub fn set_value(&mut self, pos: Position, value: Option<char>) -> bool {
        if !self.is_white(pos) {
            return false;
        }
        self.cell_mut(pos).set_value(value);
        true
    }

    /// Clears every entered letter.
    pub fn clear_values(&mut self) {
        for cell in &mut self.cells {
            cell.set_value(None);
        }
    }

    fn parse_clue_line(&mut self, line: &str) -> Result<(), PuzzleError> {
        let malformed = || PuzzleError::MalformedClue {
            line: line.to_owned(),
        };
        let (label, text) = line.split_once(':').ok_or_else(malformed)?;
        let label = label.trim();
        let split = label.len().checked_sub(1).ok_or_else(malformed)?;
        let (number, suffix) = label.split_at_checked(split).ok_or_else(malformed)?;
        let number = number.parse::<u16>().map_err(|_| malformed())?;
        let direction = match suffix {
            "A" | "a" => Direction::Across,
            "D" | "d" => Direction::Down,
            _ => return Err(malformed()),
        };
        self.set_clue(number, direction, text.trim())
    }
}

impl PuzzleModel for Puzzle {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn cell(&self, pos: Position) -> Option<&Cell> {
        if !self.contains(pos) {
            return None;
        }
        self.cells.get(pos.index_in(self.width))
    }

    fn entry(&self, id: EntryId) -> Option<&Entry> {
        self.entries.get(id.index())
    }

    fn find_entry(&self, clue_number: u16, direction: Direction) -> Option<EntryId> {
        self.entry_index.get(&(clue_number, direction)).copied()
    }

    fn num_entries(&self) -> usize {
        self.num_entries
    }

    fn first_white_cell(&self) -> Option<Position> {
        self.first_white
    }
}

impl FromStr for Puzzle {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines().map(str::trim).skip_while(|line| line.is_empty());
        let rows = lines
            .by_ref()
            .take_while(|line| !line.is_empty())
            .collect::<Vec<_>>();
        let mut puzzle = Self::from_layout(&rows)?;
        for line in lines.filter(|line| !line.is_empty()) {
            puzzle.parse_clue_line(line)?;
        }
        Ok(puzzle)
    }
}

impl Display for Puzzle {
    /// Writes the current values: `#` for black, `.` for empty white cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            for cell in row {
                let ch = match (cell.is_white(), cell.value()) {
                    (false, _) => '#',
                    (true, None) => '.',
                    (true, Some(ch)) => ch,
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
