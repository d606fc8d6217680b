//! Interactive sudoku game sessions.
//!
//! [`Session`] wraps a generated puzzle with everything a front end needs:
//! value entry with soft conflict feedback, pencil marks, undo and redo,
//! hints, completion tracking, a play clock, and save files. The
//! [`background`] module generates new puzzles off-thread so a UI can keep
//! rendering while the search runs.
//!
//! # Examples
//!
//! ```
//! use ninefold_game::{Session, SessionState};
//! use ninefold_generator::{GenerationConfig, PuzzleGenerator};
//!
//! let generated = PuzzleGenerator::new(GenerationConfig::default())
//!     .generate()
//!     .unwrap();
//! let mut session = Session::new();
//! session.start(generated);
//! assert_eq!(session.state(), SessionState::Playing);
//!
//! let hint = session.hint().unwrap();
//! assert_eq!(session.value_at(hint.cell), hint.digit);
//! session.undo().unwrap();
//! assert_eq!(session.value_at(hint.cell), 0);
//! ```

pub mod background;
mod clock;
mod error;
mod save;
mod session;

pub use self::{
    error::SessionError,
    save::CorruptSaveError,
    session::{CheckVerdict, Hint, Placement, Session, SessionState},
};
