use crosscan_core::{Cell, Direction, Entry, Position, PuzzleModel as _};

use crate::{CrosswordGame, Navigator, SelectionListener};

/// Arrow-key movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum MoveDirection {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

impl MoveDirection {
    /// Returns the `(dx, dy)` offset of this move.
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// A discrete user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Enter a letter in the selected cell and advance.
    TypeLetter(char),
    /// Clear the selected cell, stepping back first if it is already empty.
    Delete,
    /// Tap a cell: select it, or toggle direction if it is already selected.
    Tap(Position),
    /// Pointer down on a cell.
    Press(Position),
    /// Pointer up on a cell; taps if it matches the preceding press.
    Release(Position),
    /// Move the selection one cell.
    Move(MoveDirection),
    /// Toggle between across and down.
    SwitchDirection,
    /// Jump to the next clue in the current direction.
    NextClue,
    /// Jump to the previous clue in the current direction.
    PreviousClue,
    /// Select the first white cell.
    Reset,
}

/// Input layer tying a [`CrosswordGame`] to a [`Navigator`].
///
/// Letters and deletions go to the game; selection changes go to the
/// navigator. Without a loaded game every command is a no-op returning
/// `false`.
#[derive(Debug, Default)]
pub struct Session {
    game: Option<CrosswordGame>,
    navigator: Navigator,
    pressed: Option<Position>,
}

impl Session {
    /// Creates a session with no game loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the selection listener.
    pub fn set_listener<L>(&mut self, listener: L)
    where
        L: SelectionListener + 'static,
    {
        self.navigator.set_listener(listener);
    }

    /// Loads a game, replacing the current one, and selects its first white cell.
    pub fn load(&mut self, game: CrosswordGame) {
        self.pressed = None;
        let game = self.game.insert(game);
        self.navigator.reset_to_start(game.puzzle());
    }

    /// Detaches and returns the current game.
    pub fn unload(&mut self) -> Option<CrosswordGame> {
        self.pressed = None;
        self.navigator.clear_selection();
        self.game.take()
    }

    /// Returns the loaded game.
    #[must_use]
    pub fn game(&self) -> Option<&CrosswordGame> {
        self.game.as_ref()
    }

    /// Returns the selected cell.
    #[must_use]
    pub fn selected_cell(&self) -> Option<Position> {
        self.navigator.selected_cell()
    }

    /// Returns the writing direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.navigator.direction()
    }

    /// Sets the writing direction and re-announces the selection.
    pub fn set_direction(&mut self, direction: Direction) {
        self.navigator.set_direction(direction);
    }

    /// Returns the entry highlighted for the current selection.
    pub fn current_entry(&mut self) -> Option<&Entry> {
        let game = self.game.as_ref()?;
        let id = self.navigator.current_entry(game.puzzle())?;
        game.puzzle().entry(id)
    }

    /// Handles one input command and returns whether it took effect.
    pub fn handle(&mut self, command: Command) -> bool {
        log::trace!("handle {command:?}");
        match command {
            Command::TypeLetter(letter) => self.type_letter(letter),
            Command::Delete => self.delete(),
            Command::Tap(pos) => self.tap(pos),
            Command::Press(pos) => self.press(pos),
            Command::Release(pos) => self.release(pos),
            Command::Move(direction) => {
                let (dx, dy) = direction.offset();
                self.game
                    .as_ref()
                    .is_some_and(|game| self.navigator.move_by(game.puzzle(), dx, dy))
            }
            Command::SwitchDirection => self.switch_direction(),
            Command::NextClue => self.jump_to_clue(true),
            Command::PreviousClue => self.jump_to_clue(false),
            Command::Reset => self
                .game
                .as_ref()
                .is_some_and(|game| self.navigator.reset_to_start(game.puzzle())),
        }
    }

    fn type_letter(&mut self, letter: char) -> bool {
        let Some(game) = self.game.as_mut() else {
            return false;
        };
        let Some(pos) = self.navigator.selected_cell() else {
            return false;
        };
        if let Err(err) = game.set_cell_value(pos, letter) {
            log::debug!("input rejected: {err}");
            return false;
        }
        self.navigator.advance_after_input(game.puzzle());
        true
    }

    fn delete(&mut self) -> bool {
        let Some(game) = self.game.as_mut() else {
            return false;
        };
        let Some(pos) = self.navigator.selected_cell() else {
            return false;
        };
        let moved = self.navigator.retreat_after_delete(game.puzzle());
        let pos = self.navigator.selected_cell().unwrap_or(pos);
        let removed = game
            .clear_cell(pos)
            .is_ok_and(|operation| operation.is_removed());
        moved || removed
    }

    fn tap(&mut self, pos: Position) -> bool {
        self.game
            .as_ref()
            .is_some_and(|game| self.navigator.tap(game.puzzle(), pos))
    }

    fn press(&mut self, pos: Position) -> bool {
        self.pressed = self
            .game
            .as_ref()
            .and_then(|game| game.puzzle().cell(pos))
            .map(Cell::position);
        self.pressed.is_some()
    }

    fn release(&mut self, pos: Position) -> bool {
        let pressed = self.pressed.take();
        pressed == Some(pos) && self.tap(pos)
    }

    fn switch_direction(&mut self) -> bool {
        if self.game.is_none() || self.navigator.selected_cell().is_none() {
            return false;
        }
        self.navigator.toggle_direction();
        true
    }

    fn jump_to_clue(&mut self, forward: bool) -> bool {
        self.game
            .as_ref()
            .is_some_and(|game| self.navigator.jump_to_clue(game.puzzle(), forward))
    }
}
