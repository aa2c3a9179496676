use std::fmt;

use crosscan_core::{Direction, Entry, EntryId, Position, PuzzleModel};

use crate::{Selection, SelectionListener};

/// Cell-selection and navigation state machine for a crossword grid.
///
/// The navigator owns only the selected cell, the previously selected cell
/// and the writing direction. The puzzle is passed to every operation, so the
/// game can mutate cell values between calls without sharing ownership.
/// Every selection change is announced synchronously to the installed
/// [`SelectionListener`].
///
/// All movement operations return `true` on success and leave the selection
/// untouched on failure; none of them panic.
///
/// # Example
///
/// ```
/// use crosscan_core::{Direction, Position, Puzzle};
/// use crosscan_game::Navigator;
///
/// let puzzle = Puzzle::from_layout(&["...", "#.#", "..."]).unwrap();
/// let mut nav = Navigator::new();
///
/// assert!(nav.reset_to_start(&puzzle));
/// assert_eq!(nav.selected_cell(), Some(Position::new(0, 0)));
///
/// assert!(nav.advance_after_input(&puzzle));
/// assert_eq!(nav.selected_cell(), Some(Position::new(0, 1)));
///
/// // Stepping off the right edge jumps to the next across entry.
/// nav.advance_after_input(&puzzle);
/// assert!(nav.advance_after_input(&puzzle));
/// assert_eq!(nav.selected_cell(), Some(Position::new(2, 0)));
/// assert_eq!(nav.direction(), Direction::Across);
/// ```
#[derive(Default)]
pub struct Navigator {
    selected: Option<Position>,
    previous: Option<Position>,
    direction: Direction,
    listener: Option<Box<dyn SelectionListener>>,
}

impl fmt::Debug for Navigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator")
            .field("selected", &self.selected)
            .field("previous", &self.previous)
            .field("direction", &self.direction)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

impl Navigator {
    /// Creates a navigator with nothing selected, writing across.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the selection listener, replacing any previous one.
    pub fn set_listener<L>(&mut self, listener: L)
    where
        L: SelectionListener + 'static,
    {
        self.listener = Some(Box::new(listener));
    }

    /// Removes the selection listener.
    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Returns the selected cell.
    #[must_use]
    pub fn selected_cell(&self) -> Option<Position> {
        self.selected
    }

    /// Returns the cell that was selected before the current one.
    #[must_use]
    pub fn previous_cell(&self) -> Option<Position> {
        self.previous
    }

    /// Returns the writing direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Forgets the selection, as when the puzzle is detached.
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.previous = None;
    }

    fn announce(&mut self, selection: Selection) -> bool {
        match &mut self.listener {
            Some(listener) => listener.on_cell_selected(selection),
            None => true,
        }
    }

    fn notify(&mut self) -> bool {
        match self.selected {
            Some(position) => self.announce(Selection {
                position,
                direction: self.direction,
            }),
            None => false,
        }
    }

    fn set_selected(&mut self, pos: Position) {
        log::trace!("selection {:?} -> {pos}", self.selected);
        self.previous = self.selected;
        self.selected = Some(pos);
    }

    /// Selects the cell at `pos` and announces it.
    ///
    /// Fails if `pos` is out of bounds or a black cell.
    pub fn select_cell<P>(&mut self, puzzle: &P, pos: Position) -> bool
    where
        P: PuzzleModel + ?Sized,
    {
        if !puzzle.is_white(pos) {
            return false;
        }
        self.set_selected(pos);
        self.notify();
        true
    }

    /// Selects the cell at `row`, `col`. Same as [`Navigator::select_cell`].
    pub fn move_to<P>(&mut self, puzzle: &P, row: usize, col: usize) -> bool
    where
        P: PuzzleModel + ?Sized,
    {
        self.select_cell(puzzle, Position::new(row, col))
    }

    /// Sets the writing direction and re-announces the selection.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.direction != direction {
            log::debug!("direction {} -> {direction}", self.direction);
        }
        self.direction = direction;
        self.notify();
    }

    /// Switches between across and down.
    pub fn toggle_direction(&mut self) {
        self.set_direction(self.direction.toggled());
    }

    /// Returns the direction navigation will use for the selected cell.
    ///
    /// If the selected cell has no entry in the current direction but has one
    /// in the other, the direction is flipped first. The flip is not announced.
    pub fn effective_direction<P>(&mut self, puzzle: &P) -> Direction
    where
        P: PuzzleModel + ?Sized,
    {
        if let Some(pos) = self.selected {
            let other = self.direction.toggled();
            if puzzle.entry_at(pos, self.direction).is_none()
                && puzzle.entry_at(pos, other).is_some()
            {
                log::debug!("no {} entry at {pos}, switching to {other}", self.direction);
                self.direction = other;
            }
        }
        self.direction
    }

    /// Returns the entry containing the selected cell in the effective direction.
    pub fn current_entry<P>(&mut self, puzzle: &P) -> Option<EntryId>
    where
        P: PuzzleModel + ?Sized,
    {
        let direction = self.effective_direction(puzzle);
        puzzle.entry_at(self.selected?, direction)
    }

    /// Returns the entry after the current one in the effective direction,
    /// wrapping from the last clue number to the first.
    pub fn next_entry<P>(&mut self, puzzle: &P) -> Option<EntryId>
    where
        P: PuzzleModel + ?Sized,
    {
        self.adjacent_entry(puzzle, true)
    }

    /// Returns the entry before the current one in the effective direction,
    /// wrapping from the first clue number to the last.
    pub fn previous_entry<P>(&mut self, puzzle: &P) -> Option<EntryId>
    where
        P: PuzzleModel + ?Sized,
    {
        self.adjacent_entry(puzzle, false)
    }

    fn adjacent_entry<P>(&mut self, puzzle: &P, forward: bool) -> Option<EntryId>
    where
        P: PuzzleModel + ?Sized,
    {
        let current = self.current_entry(puzzle)?;
        let clue_number = puzzle.entry(current)?.clue_number();
        adjacent_entry(puzzle, clue_number, self.direction, forward)
    }

    /// Moves the selection `dx` columns right and `dy` rows down.
    ///
    /// Fails if nothing is selected or the target is out of bounds or black.
    pub fn move_by<P>(&mut self, puzzle: &P, dx: isize, dy: isize) -> bool
    where
        P: PuzzleModel + ?Sized,
    {
        self.selected
            .and_then(|pos| pos.offset(dx, dy))
            .is_some_and(|target| self.select_cell(puzzle, target))
    }

    fn select_in_entry<P, F>(&mut self, puzzle: &P, id: Option<EntryId>, pick: F) -> bool
    where
        P: PuzzleModel + ?Sized,
        F: FnOnce(&P, &Entry) -> Position,
    {
        let Some(entry) = id.and_then(|id| puzzle.entry(id)) else {
            return false;
        };
        log::debug!("jump to {} {}", entry.clue_number(), entry.direction());
        let target = pick(puzzle, entry);
        self.select_cell(puzzle, target)
    }

    /// Advances the selection after a letter was typed.
    ///
    /// Steps one cell forward in the effective direction, or to the first
    /// cell of the next entry at an edge or black cell. Filled cells are
    /// skipped until an empty cell is reached or the walk returns to the
    /// starting cell. The walk is bounded by the grid size, so a fully
    /// filled grid stops where it started.
    pub fn advance_after_input<P>(&mut self, puzzle: &P) -> bool
    where
        P: PuzzleModel + ?Sized,
    {
        let Some(original) = self.selected else {
            return false;
        };
        let direction = self.effective_direction(puzzle);
        let (dx, dy) = direction.step();

        let mut moved = false;
        for _ in 0..=puzzle.width() * puzzle.height() {
            let stepped = self.move_by(puzzle, dx, dy) || {
                let next = self.next_entry(puzzle);
                self.select_in_entry(puzzle, next, |_, entry| entry.first_cell())
            };
            if !stepped {
                break;
            }
            moved = true;

            match self.selected {
                Some(pos) if pos != original && !puzzle.is_empty(pos) => {}
                _ => break,
            }
        }
        moved
    }

    /// Moves the selection back after delete was pressed on an empty cell.
    ///
    /// Steps one cell backward in the effective direction, or to the last
    /// cell of the previous entry at the start of an entry. Does nothing if
    /// the selected cell holds a letter; that letter is cleared in place.
    pub fn retreat_after_delete<P>(&mut self, puzzle: &P) -> bool
    where
        P: PuzzleModel + ?Sized,
    {
        let Some(pos) = self.selected else {
            return false;
        };
        if !puzzle.is_empty(pos) {
            return false;
        }
        let direction = self.effective_direction(puzzle);
        let (dx, dy) = direction.step();

        self.move_by(puzzle, -dx, -dy) || {
            let previous = self.previous_entry(puzzle);
            self.select_in_entry(puzzle, previous, |_, entry| entry.last_cell())
        }
    }

    /// Jumps to the next (`forward`) or previous entry in the effective
    /// direction, landing on its first empty cell, or its first cell if it
    /// is full.
    pub fn jump_to_clue<P>(&mut self, puzzle: &P, forward: bool) -> bool
    where
        P: PuzzleModel + ?Sized,
    {
        let target = self.adjacent_entry(puzzle, forward);
        self.select_in_entry(puzzle, target, |puzzle, entry| {
            entry
                .cells()
                .iter()
                .copied()
                .find(|&pos| puzzle.is_empty(pos))
                .unwrap_or_else(|| entry.first_cell())
        })
    }

    /// Selects the puzzle's first white cell and announces it.
    ///
    /// Clears the selection and fails if the puzzle has no white cells.
    pub fn reset_to_start<P>(&mut self, puzzle: &P) -> bool
    where
        P: PuzzleModel + ?Sized,
    {
        self.clear_selection();
        match puzzle.first_white_cell() {
            Some(pos) => self.select_cell(puzzle, pos),
            None => false,
        }
    }

    /// Handles a tap on the cell at `pos`.
    ///
    /// The listener is asked first and may reject the tap. An accepted tap on
    /// the selected cell toggles the direction instead of moving; a tap on any
    /// other white cell selects it.
    pub fn tap<P>(&mut self, puzzle: &P, pos: Position) -> bool
    where
        P: PuzzleModel + ?Sized,
    {
        if !puzzle.is_white(pos) {
            return false;
        }
        let accepted = self.announce(Selection {
            position: pos,
            direction: self.direction,
        });
        if !accepted {
            return false;
        }
        if self.selected == Some(pos) {
            self.toggle_direction();
        } else {
            self.set_selected(pos);
        }
        true
    }
}

/// Finds the entry after (`forward`) or before `clue_number` in `direction`.
///
/// Clue numbers are scanned cyclically modulo `num_entries + 1`, skipping
/// numbers without an entry in `direction`. The scan inspects at most
/// `num_entries + 1` candidates and comes back to `clue_number` itself when it
/// is the only entry in that direction. Returns `None` if `direction` has no
/// entries at all.
pub fn adjacent_entry<P>(
    puzzle: &P,
    clue_number: u16,
    direction: Direction,
    forward: bool,
) -> Option<EntryId>
where
    P: PuzzleModel + ?Sized,
{
    let modulus = puzzle.num_entries() + 1;
    let start = usize::from(clue_number) % modulus;
    (1..=modulus).find_map(|step| {
        let candidate = if forward {
            (start + step) % modulus
        } else {
            (start + modulus - step) % modulus
        };
        let candidate = u16::try_from(candidate).ok()?;
        puzzle.find_entry(candidate, direction)
    })
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use crosscan_core::Puzzle;
    use proptest::prelude::*;

    use super::*;

    fn recorder(nav: &mut Navigator) -> Rc<RefCell<Vec<Selection>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        nav.set_listener(move |selection: Selection| {
            sink.borrow_mut().push(selection);
            true
        });
        log
    }

    //  1  2  3  #  4
    //  5  .  .  #  .
    //  .  #  6  7  .
    //  8  9  .  .  #
    // 10  .  # 11  .
    fn grid() -> Puzzle {
        Puzzle::from_layout(&["...#.", "...#.", ".#...", "....#", "..#.."]).unwrap()
    }

    fn entry_of(puzzle: &Puzzle, number: u16, direction: Direction) -> EntryId {
        puzzle.find_entry(number, direction).unwrap()
    }

    #[test]
    fn test_select_cell_white_and_black() {
        let puzzle = grid();
        let mut nav = Navigator::new();
        let log = recorder(&mut nav);

        assert!(nav.select_cell(&puzzle, Position::new(1, 1)));
        assert_eq!(nav.selected_cell(), Some(Position::new(1, 1)));

        assert!(!nav.select_cell(&puzzle, Position::new(0, 3)));
        assert!(!nav.select_cell(&puzzle, Position::new(9, 9)));
        assert_eq!(nav.selected_cell(), Some(Position::new(1, 1)));

        assert_eq!(log.borrow().len(), 1);
        assert_eq!(log.borrow()[0].position, Position::new(1, 1));
    }

    #[test]
    fn test_move_by_fails_on_edges_and_black_cells() {
        let puzzle = grid();
        let mut nav = Navigator::new();
        assert!(!nav.move_by(&puzzle, 1, 0));

        nav.select_cell(&puzzle, Position::new(0, 2));
        assert!(!nav.move_by(&puzzle, 1, 0));
        assert!(!nav.move_by(&puzzle, 0, -1));
        assert_eq!(nav.selected_cell(), Some(Position::new(0, 2)));

        assert!(nav.move_by(&puzzle, -1, 1));
        assert_eq!(nav.selected_cell(), Some(Position::new(1, 1)));
        assert_eq!(nav.previous_cell(), Some(Position::new(0, 2)));
    }

    #[test]
    fn test_set_direction_reannounces_selection() {
        let puzzle = grid();
        let mut nav = Navigator::new();
        let log = recorder(&mut nav);

        nav.set_direction(Direction::Down);
        assert!(log.borrow().is_empty());

        nav.select_cell(&puzzle, Position::new(0, 0));
        nav.toggle_direction();
        assert_eq!(
            log.borrow().last(),
            Some(&Selection {
                position: Position::new(0, 0),
                direction: Direction::Across,
            })
        );
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn test_single_entry_advance_wraps() {
        let puzzle = Puzzle::from_layout(&["ABC", "###", "###"]).unwrap();
        let mut nav = Navigator::new();
        nav.select_cell(&puzzle, Position::new(0, 0));

        assert!(nav.advance_after_input(&puzzle));
        assert_eq!(nav.selected_cell(), Some(Position::new(0, 1)));
        assert!(nav.advance_after_input(&puzzle));
        assert_eq!(nav.selected_cell(), Some(Position::new(0, 2)));
        assert!(nav.advance_after_input(&puzzle));
        assert_eq!(nav.selected_cell(), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_advance_skips_filled_cells() {
        let mut puzzle = grid();
        let mut nav = Navigator::new();
        nav.select_cell(&puzzle, Position::new(0, 0));
        puzzle.set_value(Position::new(0, 1), Some('X'));

        assert!(nav.advance_after_input(&puzzle));
        assert_eq!(nav.selected_cell(), Some(Position::new(0, 2)));

        // Rest of 1-Across and all of 5-Across filled: continue in 6-Across.
        for col in 0..3 {
            puzzle.set_value(Position::new(1, col), Some('X'));
        }
        puzzle.set_value(Position::new(0, 2), Some('X'));
        assert!(nav.advance_after_input(&puzzle));
        assert_eq!(nav.selected_cell(), Some(Position::new(2, 2)));
    }

    #[test]
    fn test_advance_on_full_grid_returns_to_start() {
        let mut puzzle = grid();
        let whites = puzzle
            .white_cells()
            .map(|cell| cell.position())
            .collect::<Vec<_>>();
        for pos in whites {
            puzzle.set_value(pos, Some('X'));
        }
        let mut nav = Navigator::new();
        nav.select_cell(&puzzle, Position::new(3, 1));

        assert!(nav.advance_after_input(&puzzle));
        assert_eq!(nav.selected_cell(), Some(Position::new(3, 1)));
    }

    #[test]
    fn test_advance_stops_on_isolated_cell() {
        let puzzle = Puzzle::from_layout(&[".#", "#."]).unwrap();
        let mut nav = Navigator::new();
        nav.select_cell(&puzzle, Position::new(0, 0));
        assert!(!nav.advance_after_input(&puzzle));
        assert!(!nav.retreat_after_delete(&puzzle));
        assert!(!nav.jump_to_clue(&puzzle, true));
        assert_eq!(nav.selected_cell(), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_down_only_cell_flips_direction() {
        let puzzle = grid();
        let mut nav = Navigator::new();
        // (0, 4) only belongs to 4-Down.
        nav.select_cell(&puzzle, Position::new(0, 4));
        assert_eq!(nav.direction(), Direction::Across);

        assert_eq!(
            nav.next_entry(&puzzle),
            Some(entry_of(&puzzle, 7, Direction::Down))
        );
        assert_eq!(nav.direction(), Direction::Down);
    }

    #[test]
    fn test_entry_lookup_skips_gaps_and_wraps() {
        let puzzle = grid();
        let mut nav = Navigator::new();

        // Across entries: 1, 5, 6, 8, 10, 11
        nav.select_cell(&puzzle, Position::new(1, 0));
        assert_eq!(
            nav.next_entry(&puzzle),
            Some(entry_of(&puzzle, 6, Direction::Across))
        );
        assert_eq!(
            nav.previous_entry(&puzzle),
            Some(entry_of(&puzzle, 1, Direction::Across))
        );

        nav.select_cell(&puzzle, Position::new(4, 3));
        assert_eq!(
            nav.next_entry(&puzzle),
            Some(entry_of(&puzzle, 1, Direction::Across))
        );
        nav.select_cell(&puzzle, Position::new(0, 0));
        assert_eq!(
            nav.previous_entry(&puzzle),
            Some(entry_of(&puzzle, 11, Direction::Across))
        );
    }

    #[test]
    fn test_delete_on_first_cell_moves_to_previous_entry_end() {
        let puzzle = grid();
        let mut nav = Navigator::new();
        nav.select_cell(&puzzle, Position::new(1, 0));

        assert!(nav.retreat_after_delete(&puzzle));
        assert_eq!(nav.selected_cell(), Some(Position::new(0, 2)));

        assert!(nav.retreat_after_delete(&puzzle));
        assert_eq!(nav.selected_cell(), Some(Position::new(0, 1)));
    }

    #[test]
    fn test_delete_does_not_move_from_filled_cell() {
        let mut puzzle = grid();
        puzzle.set_value(Position::new(1, 1), Some('X'));
        let mut nav = Navigator::new();
        nav.select_cell(&puzzle, Position::new(1, 1));

        assert!(!nav.retreat_after_delete(&puzzle));
        assert_eq!(nav.selected_cell(), Some(Position::new(1, 1)));
    }

    #[test]
    fn test_jump_to_clue_lands_on_first_empty_cell() {
        let mut puzzle = grid();
        let mut nav = Navigator::new();
        nav.select_cell(&puzzle, Position::new(0, 0));

        puzzle.set_value(Position::new(1, 0), Some('X'));
        assert!(nav.jump_to_clue(&puzzle, true));
        assert_eq!(nav.selected_cell(), Some(Position::new(1, 1)));

        puzzle.set_value(Position::new(2, 2), Some('X'));
        puzzle.set_value(Position::new(2, 3), Some('X'));
        puzzle.set_value(Position::new(2, 4), Some('X'));
        assert!(nav.jump_to_clue(&puzzle, true));
        assert_eq!(nav.selected_cell(), Some(Position::new(2, 2)));

        assert!(nav.jump_to_clue(&puzzle, false));
        assert_eq!(nav.selected_cell(), Some(Position::new(1, 1)));
    }

    #[test]
    fn test_reset_to_start() {
        let puzzle = Puzzle::from_layout(&["#..", "..."]).unwrap();
        let mut nav = Navigator::new();
        let log = recorder(&mut nav);
        nav.select_cell(&puzzle, Position::new(1, 2));

        assert!(nav.reset_to_start(&puzzle));
        assert_eq!(nav.selected_cell(), Some(Position::new(0, 1)));
        assert_eq!(nav.previous_cell(), None);
        assert_eq!(log.borrow().len(), 2);

        let empty = Puzzle::from_layout(&["##"]).unwrap();
        assert!(!nav.reset_to_start(&empty));
        assert_eq!(nav.selected_cell(), None);
        assert!(!nav.advance_after_input(&empty));
    }

    #[test]
    fn test_tap_selected_cell_toggles_direction() {
        let puzzle = grid();
        let mut nav = Navigator::new();
        let log = recorder(&mut nav);

        assert!(nav.tap(&puzzle, Position::new(1, 1)));
        assert_eq!(nav.selected_cell(), Some(Position::new(1, 1)));
        assert_eq!(nav.direction(), Direction::Across);

        assert!(nav.tap(&puzzle, Position::new(1, 1)));
        assert_eq!(nav.direction(), Direction::Down);
        assert_eq!(
            log.borrow().as_slice(),
            &[
                Selection {
                    position: Position::new(1, 1),
                    direction: Direction::Across,
                },
                Selection {
                    position: Position::new(1, 1),
                    direction: Direction::Across,
                },
                Selection {
                    position: Position::new(1, 1),
                    direction: Direction::Down,
                },
            ]
        );

        assert!(!nav.tap(&puzzle, Position::new(0, 3)));
    }

    #[test]
    fn test_rejected_tap_changes_nothing() {
        let puzzle = grid();
        let mut nav = Navigator::new();
        nav.select_cell(&puzzle, Position::new(0, 0));
        nav.set_listener(|_: Selection| false);

        assert!(!nav.tap(&puzzle, Position::new(0, 0)));
        assert!(!nav.tap(&puzzle, Position::new(1, 1)));
        assert_eq!(nav.selected_cell(), Some(Position::new(0, 0)));
        assert_eq!(nav.direction(), Direction::Across);
    }

    fn layout_strategy() -> impl Strategy<Value = Puzzle> {
        (2usize..8, 2usize..8).prop_flat_map(|(width, height)| {
            prop::collection::vec(prop::bool::weighted(0.7), width * height).prop_map(
                move |bits| {
                    let rows = bits
                        .chunks(width)
                        .map(|row| row.iter().map(|&w| if w { '.' } else { '#' }).collect())
                        .collect::<Vec<String>>();
                    Puzzle::from_layout(&rows).unwrap()
                },
            )
        })
    }

    proptest! {
        #[test]
        fn prop_select_white_cell_round_trips(puzzle in layout_strategy()) {
            let mut nav = Navigator::new();
            for cell in puzzle.cells() {
                let before = nav.selected_cell();
                let selected = nav.select_cell(&puzzle, cell.position());
                prop_assert_eq!(selected, cell.is_white());
                if cell.is_white() {
                    prop_assert_eq!(nav.selected_cell(), Some(cell.position()));
                } else {
                    prop_assert_eq!(nav.selected_cell(), before);
                }
            }
        }

        #[test]
        fn prop_next_then_previous_round_trips(puzzle in layout_strategy()) {
            for (id, entry) in puzzle.entries() {
                let direction = entry.direction();
                let next = adjacent_entry(&puzzle, entry.clue_number(), direction, true).unwrap();
                let next_number = puzzle.entry(next).unwrap().clue_number();
                let back = adjacent_entry(&puzzle, next_number, direction, false).unwrap();
                prop_assert_eq!(back, id);
            }
        }

        #[test]
        fn prop_advance_stays_on_white_cells(puzzle in layout_strategy(), steps in 1usize..40) {
            let mut nav = Navigator::new();
            nav.reset_to_start(&puzzle);
            for _ in 0..steps {
                nav.advance_after_input(&puzzle);
                if let Some(pos) = nav.selected_cell() {
                    prop_assert!(puzzle.is_white(pos));
                }
            }
        }

        #[test]
        fn prop_advance_visits_each_cell_of_single_entry(length in 2usize..12) {
            let puzzle = Puzzle::from_layout(&[".".repeat(length)]).unwrap();
            let mut nav = Navigator::new();
            nav.reset_to_start(&puzzle);
            let mut visited = vec![nav.selected_cell().unwrap()];
            for _ in 1..length {
                nav.advance_after_input(&puzzle);
                visited.push(nav.selected_cell().unwrap());
            }
            let expected = (0..length).map(|col| Position::new(0, col)).collect::<Vec<_>>();
            prop_assert_eq!(visited, expected);

            nav.advance_after_input(&puzzle);
            prop_assert_eq!(nav.selected_cell(), Some(Position::new(0, 0)));
        }
    }
}
