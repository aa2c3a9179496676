use crosscan_core::Position;

/// Errors that can occur during game operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The position lies outside the grid.
    #[display("position {_0} is outside the grid")]
    OutOfBounds(#[error(not(source))] Position),
    /// Black cells cannot hold letters.
    #[display("cell {_0} is a black cell")]
    BlackCell(#[error(not(source))] Position),
    /// Only ASCII letters may be entered.
    #[display("{_0:?} is not a letter")]
    InvalidLetter(#[error(not(source))] char),
}
