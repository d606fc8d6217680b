//! Session command errors.

use ninefold_core::Cell;

/// Error from a session command that could not be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SessionError {
    /// No game has been started.
    #[display("no active game")]
    NoGame,
    /// The targeted cell is a given of the puzzle.
    #[display("cell {cell} is a given and cannot be changed")]
    FixedCell {
        /// The targeted cell.
        cell: Cell,
    },
    /// The undo stack holds nothing undoable.
    #[display("nothing to undo")]
    NothingToUndo,
    /// The redo stack is empty.
    #[display("nothing to redo")]
    NothingToRedo,
    /// The board still has empty cells.
    #[display("the board is not completely filled")]
    Incomplete,
    /// Every cell already matches the solution.
    #[display("no hint available")]
    NoHint,
    /// Pencil marks cannot be edited on a filled cell.
    #[display("cell {cell} holds a value, clear it before editing pencil marks")]
    MarksOnFilledCell {
        /// The targeted cell.
        cell: Cell,
    },
}
