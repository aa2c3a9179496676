use crosscan_core::{Cell, Position, Puzzle, PuzzleModel as _};

use crate::GameError;

/// Result of a cell input operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum InputOperation {
    /// The cell already held the requested state.
    NoOp,
    /// A letter was written.
    Set,
    /// A letter was removed.
    Removed,
}

/// A crossword game session.
///
/// Owns the puzzle and is the only place cell values change. Navigation
/// reads the puzzle through [`CrosswordGame::puzzle`] but never writes to it.
///
/// # Example
///
/// ```
/// use crosscan_core::{Position, Puzzle};
/// use crosscan_game::CrosswordGame;
///
/// let puzzle = Puzzle::from_layout(&["HI", "O#"]).unwrap();
/// let mut game = CrosswordGame::new(puzzle);
///
/// game.set_cell_value(Position::new(0, 0), 'h').unwrap();
/// game.set_cell_value(Position::new(0, 1), 'i').unwrap();
/// game.set_cell_value(Position::new(1, 0), 'o').unwrap();
/// assert!(game.is_solved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrosswordGame {
    puzzle: Puzzle,
}

impl CrosswordGame {
    /// Creates a new game from a puzzle, keeping any values it already holds.
    #[must_use]
    pub fn new(puzzle: Puzzle) -> Self {
        Self { puzzle }
    }

    /// Returns the puzzle, including the letters entered so far.
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Consumes the game and returns its puzzle.
    #[must_use]
    pub fn into_puzzle(self) -> Puzzle {
        self.puzzle
    }

    fn white_cell(&self, pos: Position) -> Result<&Cell, GameError> {
        let cell = self.puzzle.cell(pos).ok_or(GameError::OutOfBounds(pos))?;
        if !cell.is_white() {
            return Err(GameError::BlackCell(pos));
        }
        Ok(cell)
    }

    /// Writes a letter into the cell at `pos`.
    ///
    /// Letters are stored uppercase. Writing the letter a cell already holds
    /// is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] or [`GameError::BlackCell`] if `pos`
    /// is not a white cell, and [`GameError::InvalidLetter`] if `letter` is not
    /// an ASCII letter.
    pub fn set_cell_value(
        &mut self,
        pos: Position,
        letter: char,
    ) -> Result<InputOperation, GameError> {
        let cell = self.white_cell(pos)?;
        if !letter.is_ascii_alphabetic() {
            return Err(GameError::InvalidLetter(letter));
        }
        let letter = letter.to_ascii_uppercase();
        if cell.value() == Some(letter) {
            return Ok(InputOperation::NoOp);
        }
        self.puzzle.set_value(pos, Some(letter));
        Ok(InputOperation::Set)
    }

    /// Removes the letter from the cell at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] or [`GameError::BlackCell`] if `pos`
    /// is not a white cell.
    pub fn clear_cell(&mut self, pos: Position) -> Result<InputOperation, GameError> {
        let cell = self.white_cell(pos)?;
        if cell.is_empty() {
            return Ok(InputOperation::NoOp);
        }
        self.puzzle.set_value(pos, None);
        Ok(InputOperation::Removed)
    }

    /// Clears every entered letter.
    pub fn reset_inputs(&mut self) {
        self.puzzle.clear_values();
    }

    /// Returns `true` if every white cell holds a letter.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.puzzle.white_cells().all(|cell| !cell.is_empty())
    }

    /// Returns `true` if the grid is complete and agrees with every known
    /// solution letter.
    ///
    /// Cells without a solution accept any letter.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.is_complete() && self.incorrect_cells().is_empty()
    }

    /// Returns the filled cells whose letter differs from the solution.
    #[must_use]
    pub fn incorrect_cells(&self) -> Vec<Position> {
        self.puzzle
            .white_cells()
            .filter(|cell| match (cell.value(), cell.solution()) {
                (Some(value), Some(solution)) => value != solution,
                _ => false,
            })
            .map(Cell::position)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crosscan_core::PuzzleModel as _;

    use super::*;

    fn test_game() -> CrosswordGame {
        CrosswordGame::new(Puzzle::from_layout(&["CAT", "A#O", "BEE"]).unwrap())
    }

    #[test]
    fn test_set_cell_value_basic_operations() {
        let mut game = test_game();
        let pos = Position::new(0, 1);

        assert_eq!(game.set_cell_value(pos, 'a'), Ok(InputOperation::Set));
        assert_eq!(game.puzzle().cell(pos).unwrap().value(), Some('A'));

        // Re-entering the same letter is a no-op
        assert_eq!(game.set_cell_value(pos, 'A'), Ok(InputOperation::NoOp));

        // Replacing is a set
        assert_eq!(game.set_cell_value(pos, 'Z'), Ok(InputOperation::Set));
        assert_eq!(game.puzzle().cell(pos).unwrap().value(), Some('Z'));
    }

    #[test]
    fn test_set_cell_value_rejects_invalid_targets() {
        let mut game = test_game();
        assert_eq!(
            game.set_cell_value(Position::new(1, 1), 'A'),
            Err(GameError::BlackCell(Position::new(1, 1)))
        );
        assert_eq!(
            game.set_cell_value(Position::new(3, 0), 'A'),
            Err(GameError::OutOfBounds(Position::new(3, 0)))
        );
        assert_eq!(
            game.set_cell_value(Position::new(0, 0), '7'),
            Err(GameError::InvalidLetter('7'))
        );
        assert!(game.puzzle().is_empty(Position::new(0, 0)));
    }

    #[test]
    fn test_clear_cell_operations() {
        let mut game = test_game();
        let pos = Position::new(2, 2);

        assert_eq!(game.clear_cell(pos), Ok(InputOperation::NoOp));
        game.set_cell_value(pos, 'E').unwrap();
        assert_eq!(game.clear_cell(pos), Ok(InputOperation::Removed));
        assert!(game.puzzle().is_empty(pos));
        assert_eq!(
            game.clear_cell(Position::new(1, 1)),
            Err(GameError::BlackCell(Position::new(1, 1)))
        );
    }

    #[test]
    fn test_is_solved_with_complete_solution() {
        let mut game = test_game();
        let solution = game
            .puzzle()
            .white_cells()
            .map(|cell| (cell.position(), cell.solution().unwrap()))
            .collect::<Vec<_>>();

        for (pos, letter) in solution {
            assert!(!game.is_complete());
            game.set_cell_value(pos, letter).unwrap();
        }
        assert!(game.is_complete());
        assert!(game.is_solved());
        assert!(game.incorrect_cells().is_empty());
    }

    #[test]
    fn test_is_solved_with_mistakes() {
        let mut game = test_game();
        let positions = game
            .puzzle()
            .white_cells()
            .map(Cell::position)
            .collect::<Vec<_>>();
        for pos in positions {
            game.set_cell_value(pos, 'X').unwrap();
        }
        assert!(game.is_complete());
        assert!(!game.is_solved());
        assert_eq!(game.incorrect_cells().len(), 8);

        game.reset_inputs();
        assert!(!game.is_complete());
        assert!(game.incorrect_cells().is_empty());
    }

    #[test]
    fn test_unknown_solution_accepts_any_letter() {
        let mut game = CrosswordGame::new(Puzzle::from_layout(&[".."]).unwrap());
        game.set_cell_value(Position::new(0, 0), 'Q').unwrap();
        game.set_cell_value(Position::new(0, 1), 'Z').unwrap();
        assert!(game.is_solved());
    }
}
