use crosscan_core::{Direction, Position};

/// A selection announcement delivered to the [`SelectionListener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// The selected cell.
    pub position: Position,
    /// The writing direction at the time of the announcement.
    pub direction: Direction,
}

/// Receiver of selection changes.
///
/// Called synchronously, in order, before the triggering operation returns.
/// The return value matters only for taps: returning `false` rejects the tap
/// so that neither the selection nor the direction changes.
///
/// Closures of type `FnMut(Selection) -> bool` implement this trait.
pub trait SelectionListener {
    /// Handles a selection announcement.
    fn on_cell_selected(&mut self, selection: Selection) -> bool;
}

impl<F> SelectionListener for F
where
    F: FnMut(Selection) -> bool,
{
    fn on_cell_selected(&mut self, selection: Selection) -> bool {
        self(selection)
    }
}
