//! Interactive game session.

use std::time::Duration;

use log::debug;
use ninefold_core::{Cell, DigitSet, FixedMask, Grid, House};
use ninefold_generator::GeneratedPuzzle;

use crate::{CorruptSaveError, SessionError, clock::SessionClock, save::SaveGame};

/// Lifecycle state of a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    /// No game has been started.
    Idle,
    /// A game is underway.
    Playing,
    /// Every cell on the board holds a digit.
    Complete,
}

/// Outcome of a successful [`Session::set_value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Placement {
    /// The digit does not clash with any peer.
    Clean,
    /// The digit duplicates a peer in its row, column, or block.
    Conflicting,
}

/// Outcome of a [`Session::check`] on a fully filled board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckVerdict {
    /// The board equals the stored solution.
    MatchesSolution,
    /// The board is a valid solved grid different from the stored solution.
    AlternateSolution,
    /// A house contains a duplicated digit.
    Violation(House),
}

/// A revealed cell, as returned by [`Session::hint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    /// The cell that was filled.
    pub cell: Cell,
    /// The digit written there.
    pub digit: u8,
}

/// One entry of the undo history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    /// A single cell changed value.
    SetCell { cell: Cell, previous: u8, value: u8 },
    /// The board was reset to the puzzle. Acts as an undo barrier.
    ResetToPuzzle,
}

#[derive(Debug, Clone)]
struct GameState {
    solution: Grid,
    puzzle: Grid,
    board: Grid,
    fixed: FixedMask,
    marks: [[DigitSet; 9]; 9],
    undo: Vec<Action>,
    redo: Vec<Action>,
    clock: SessionClock,
    complete: bool,
}

impl GameState {
    fn marks_at(&self, cell: Cell) -> DigitSet {
        self.marks[usize::from(cell.row())][usize::from(cell.col())]
    }

    fn marks_mut(&mut self, cell: Cell) -> &mut DigitSet {
        &mut self.marks[usize::from(cell.row())][usize::from(cell.col())]
    }

    /// Recomputes completion after a board mutation and keeps the clock in
    /// step: entering the completed state stops it, leaving resumes it.
    ///
    /// Complete means every cell holds a digit, right or wrong.
    fn refresh_completion(&mut self) {
        let complete = self.board.is_full();
        if complete == self.complete {
            return;
        }
        self.complete = complete;
        if complete {
            self.clock.stop();
        } else {
            self.clock.resume();
        }
    }

    /// Cell the next hint would fill: the first empty cell, or on a full
    /// board the first cell disagreeing with the solution.
    fn hint_target(&self) -> Option<Cell> {
        self.board.first_empty().or_else(|| {
            Cell::ALL
                .into_iter()
                .find(|&cell| self.board.get(cell) != self.solution.get(cell))
        })
    }
}

/// An interactive game around one generated puzzle.
///
/// The session owns the player's board and everything attached to it: value
/// entry with soft conflict feedback, pencil marks, undo and redo, hints, a
/// play clock, and save files. A session starts idle; [`Session::start`]
/// installs a puzzle and play begins.
///
/// Mistakes are allowed. Writing a conflicting or wrong digit succeeds and
/// is merely reported, and the session flips between [`SessionState::Playing`]
/// and [`SessionState::Complete`] as mutations and undos fill the board and
/// reopen it. Completion says nothing about correctness; [`Session::check`]
/// judges the filled board.
#[derive(Debug)]
pub struct Session {
    game: Option<GameState>,
    cursor: Cell,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates an idle session.
    #[must_use]
    pub fn new() -> Self {
        Self {
            game: None,
            cursor: Cell::new(0, 0),
        }
    }

    /// Starts a new game from a generated puzzle, replacing any game in
    /// progress.
    pub fn start(&mut self, puzzle: GeneratedPuzzle) {
        let GeneratedPuzzle {
            solution,
            puzzle,
            fixed,
            seed,
        } = puzzle;
        debug!("starting game for seed {seed}");
        let board = puzzle.clone();
        let complete = board.is_full();
        self.game = Some(GameState {
            solution,
            puzzle,
            board,
            fixed,
            marks: [[DigitSet::EMPTY; 9]; 9],
            undo: Vec::new(),
            redo: Vec::new(),
            clock: if complete {
                SessionClock::stopped()
            } else {
                SessionClock::running()
            },
            complete,
        });
        self.cursor = Cell::new(0, 0);
    }

    /// Lifecycle state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        match &self.game {
            None => SessionState::Idle,
            Some(game) if game.complete => SessionState::Complete,
            Some(_) => SessionState::Playing,
        }
    }

    /// Value on the board at `cell`: `0` if empty or no game is active.
    #[must_use]
    pub fn value_at(&self, cell: Cell) -> u8 {
        self.game.as_ref().map_or(0, |game| game.board.get(cell))
    }

    /// Returns whether `cell` is a given of the current puzzle.
    #[must_use]
    pub fn is_fixed(&self, cell: Cell) -> bool {
        self.game
            .as_ref()
            .is_some_and(|game| game.fixed.is_fixed(cell))
    }

    /// Pencil marks at `cell`, empty if no game is active.
    #[must_use]
    pub fn pencil_marks(&self, cell: Cell) -> DigitSet {
        self.game
            .as_ref()
            .map_or(DigitSet::EMPTY, |game| game.marks_at(cell))
    }

    /// Returns whether the digit at `cell` duplicates one of its peers.
    ///
    /// Empty cells are never conflicted.
    #[must_use]
    pub fn is_conflicted(&self, cell: Cell) -> bool {
        self.game.as_ref().is_some_and(|game| {
            let value = game.board.get(cell);
            value != 0 && !game.board.is_placement_valid(cell, value)
        })
    }

    /// How many cells on the board hold `digit`.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is not in the range 1-9.
    #[must_use]
    pub fn digit_count(&self, digit: u8) -> usize {
        assert!(
            (1..=9).contains(&digit),
            "digit must be between 1 and 9, got {digit}"
        );
        self.game.as_ref().map_or(0, |game| {
            Cell::ALL
                .iter()
                .filter(|&&cell| game.board.get(cell) == digit)
                .count()
        })
    }

    /// The selected cell.
    #[must_use]
    pub fn cursor(&self) -> Cell {
        self.cursor
    }

    /// Moves the selection. Selection is independent of the game lifecycle
    /// and never fails.
    pub fn select(&mut self, cell: Cell) {
        self.cursor = cell;
    }

    /// Play time accumulated so far.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.game
            .as_ref()
            .map_or(Duration::ZERO, |game| game.clock.elapsed())
    }

    /// Play time formatted as `MM:SS` for display.
    #[must_use]
    pub fn format_elapsed(&self) -> String {
        let total = self.elapsed().as_secs();
        format!("{:02}:{:02}", total / 60, total % 60)
    }

    /// Writes `digit` into `cell`.
    ///
    /// The write is recorded for undo, wipes the cell's pencil marks, and
    /// empties the redo stack. A conflicting digit is still written; the
    /// returned [`Placement`] reports the clash.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoGame`] if no game is active and
    /// [`SessionError::FixedCell`] if `cell` is a given.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is not in the range 1-9. Use
    /// [`Session::clear_value`] to empty a cell.
    pub fn set_value(&mut self, cell: Cell, digit: u8) -> Result<Placement, SessionError> {
        assert!(
            (1..=9).contains(&digit),
            "digit must be between 1 and 9, got {digit}"
        );
        let game = self.game.as_mut().ok_or(SessionError::NoGame)?;
        if game.fixed.is_fixed(cell) {
            return Err(SessionError::FixedCell { cell });
        }
        let previous = game.board.get(cell);
        let conflicting = !game.board.is_placement_valid(cell, digit);
        game.board.set(cell, digit);
        *game.marks_mut(cell) = DigitSet::EMPTY;
        game.undo.push(Action::SetCell {
            cell,
            previous,
            value: digit,
        });
        game.redo.clear();
        game.refresh_completion();
        Ok(if conflicting {
            Placement::Conflicting
        } else {
            Placement::Clean
        })
    }

    /// Empties `cell`.
    ///
    /// Clearing an already empty cell records nothing and leaves the redo
    /// stack alone.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoGame`] if no game is active and
    /// [`SessionError::FixedCell`] if `cell` is a given.
    pub fn clear_value(&mut self, cell: Cell) -> Result<(), SessionError> {
        let game = self.game.as_mut().ok_or(SessionError::NoGame)?;
        if game.fixed.is_fixed(cell) {
            return Err(SessionError::FixedCell { cell });
        }
        let previous = game.board.get(cell);
        if previous == 0 {
            return Ok(());
        }
        game.board.set(cell, 0);
        game.undo.push(Action::SetCell {
            cell,
            previous,
            value: 0,
        });
        game.redo.clear();
        game.refresh_completion();
        Ok(())
    }

    /// Toggles pencil mark `digit` at `cell`, returning whether the mark is
    /// now present.
    ///
    /// Pencil marks live outside the undo history: toggling records nothing
    /// and does not disturb the redo stack.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoGame`] if no game is active,
    /// [`SessionError::FixedCell`] if `cell` is a given, and
    /// [`SessionError::MarksOnFilledCell`] if `cell` currently holds a value.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is not in the range 1-9.
    pub fn toggle_pencil_mark(&mut self, cell: Cell, digit: u8) -> Result<bool, SessionError> {
        let game = self.game.as_mut().ok_or(SessionError::NoGame)?;
        if game.fixed.is_fixed(cell) {
            return Err(SessionError::FixedCell { cell });
        }
        if game.board.get(cell) != 0 {
            return Err(SessionError::MarksOnFilledCell { cell });
        }
        Ok(game.marks_mut(cell).toggle(digit))
    }

    /// Fills the pencil marks of every empty cell with its current
    /// candidates, overwriting whatever marks were there.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoGame`] if no game is active.
    pub fn auto_fill_marks(&mut self) -> Result<(), SessionError> {
        let game = self.game.as_mut().ok_or(SessionError::NoGame)?;
        for cell in Cell::ALL {
            if game.board.get(cell) != 0 {
                continue;
            }
            let candidates = game.board.candidates_at(cell);
            *game.marks_mut(cell) = candidates;
        }
        Ok(())
    }

    /// Undoes the most recent board mutation.
    ///
    /// A [`Session::reset_to_puzzle`] acts as a barrier: history from before
    /// the reset stays recorded but cannot be undone past.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoGame`] if no game is active and
    /// [`SessionError::NothingToUndo`] if there is no mutation to undo.
    pub fn undo(&mut self) -> Result<(), SessionError> {
        let game = self.game.as_mut().ok_or(SessionError::NoGame)?;
        if !matches!(game.undo.last(), Some(Action::SetCell { .. })) {
            return Err(SessionError::NothingToUndo);
        }
        let Some(action @ Action::SetCell { cell, previous, .. }) = game.undo.pop() else {
            unreachable!("guarded by the check above");
        };
        game.board.set(cell, previous);
        game.redo.push(action);
        game.refresh_completion();
        Ok(())
    }

    /// Replays the most recently undone mutation.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoGame`] if no game is active and
    /// [`SessionError::NothingToRedo`] if there is no mutation to replay.
    pub fn redo(&mut self) -> Result<(), SessionError> {
        let game = self.game.as_mut().ok_or(SessionError::NoGame)?;
        match game.redo.pop() {
            Some(action @ Action::SetCell { cell, value, .. }) => {
                game.board.set(cell, value);
                game.undo.push(action);
                game.refresh_completion();
                Ok(())
            }
            Some(Action::ResetToPuzzle) => {
                unreachable!("reset markers never enter the redo stack")
            }
            None => Err(SessionError::NothingToRedo),
        }
    }

    /// Restores the board to the original puzzle and wipes all pencil marks.
    ///
    /// The reset is pushed onto the undo history as a barrier, so earlier
    /// moves stay recorded but cannot be undone past it. The redo stack is
    /// emptied.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoGame`] if no game is active.
    pub fn reset_to_puzzle(&mut self) -> Result<(), SessionError> {
        let game = self.game.as_mut().ok_or(SessionError::NoGame)?;
        game.board = game.puzzle.clone();
        game.marks = [[DigitSet::EMPTY; 9]; 9];
        game.undo.push(Action::ResetToPuzzle);
        game.redo.clear();
        game.refresh_completion();
        Ok(())
    }

    /// Fills the whole board with the stored solution.
    ///
    /// Pencil marks are wiped and the game becomes complete. The undo
    /// history is left as it is.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoGame`] if no game is active.
    pub fn reveal_solution(&mut self) -> Result<(), SessionError> {
        let game = self.game.as_mut().ok_or(SessionError::NoGame)?;
        game.board = game.solution.clone();
        game.marks = [[DigitSet::EMPTY; 9]; 9];
        game.refresh_completion();
        Ok(())
    }

    /// Reveals the correct digit for one cell and plays it as a regular
    /// move.
    ///
    /// The first empty cell in row-major order is preferred; when the board
    /// is full, the first cell disagreeing with the solution is corrected
    /// instead. The write goes through [`Session::set_value`], so it is
    /// undoable and clears the redo stack.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoGame`] if no game is active and
    /// [`SessionError::NoHint`] if every cell already matches the solution.
    pub fn hint(&mut self) -> Result<Hint, SessionError> {
        let game = self.game.as_ref().ok_or(SessionError::NoGame)?;
        let cell = game.hint_target().ok_or(SessionError::NoHint)?;
        let digit = game.solution.get(cell);
        self.set_value(cell, digit)?;
        Ok(Hint { cell, digit })
    }

    /// Judges a completely filled board.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoGame`] if no game is active and
    /// [`SessionError::Incomplete`] while the board still has empty cells.
    pub fn check(&self) -> Result<CheckVerdict, SessionError> {
        let game = self.game.as_ref().ok_or(SessionError::NoGame)?;
        if !game.board.is_full() {
            return Err(SessionError::Incomplete);
        }
        if let Some(house) = game.board.house_violation() {
            return Ok(CheckVerdict::Violation(house));
        }
        if game.board == game.solution {
            Ok(CheckVerdict::MatchesSolution)
        } else {
            Ok(CheckVerdict::AlternateSolution)
        }
    }

    /// Serializes the game for persistence.
    ///
    /// Undo and redo history is not part of the snapshot; a loaded game
    /// starts with empty stacks.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoGame`] if no game is active.
    pub fn save(&self) -> Result<Vec<u8>, SessionError> {
        let game = self.game.as_ref().ok_or(SessionError::NoGame)?;
        let mut pencil_marks = [[0u16; 9]; 9];
        for cell in Cell::ALL {
            pencil_marks[usize::from(cell.row())][usize::from(cell.col())] =
                game.marks_at(cell).bits();
        }
        let snapshot = SaveGame {
            solution: game.solution.clone(),
            puzzle: game.puzzle.clone(),
            board: game.board.clone(),
            fixed: game.fixed.clone(),
            pencil_marks,
            elapsed_seconds: game.clock.elapsed().as_secs(),
        };
        Ok(snapshot.to_bytes())
    }

    /// Rebuilds a session from bytes produced by [`Session::save`].
    ///
    /// The loaded game has empty undo and redo stacks. Its clock holds the
    /// persisted total and resumes counting unless the board is already
    /// full.
    ///
    /// # Errors
    ///
    /// Returns [`CorruptSaveError`] if the payload cannot be decoded or its
    /// contents are internally inconsistent.
    pub fn load(bytes: &[u8]) -> Result<Self, CorruptSaveError> {
        let snapshot = SaveGame::from_bytes(bytes)?;
        let marks = snapshot.validate()?;
        let SaveGame {
            solution,
            puzzle,
            board,
            fixed,
            elapsed_seconds,
            ..
        } = snapshot;
        let complete = board.is_full();
        Ok(Self {
            game: Some(GameState {
                solution,
                puzzle,
                board,
                fixed,
                marks,
                undo: Vec::new(),
                redo: Vec::new(),
                clock: SessionClock::restored(Duration::from_secs(elapsed_seconds), !complete),
                complete,
            }),
            cursor: Cell::new(0, 0),
        })
    }

    /// Replaces this session with one loaded from `bytes`.
    ///
    /// On failure the current session is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CorruptSaveError`] if the payload cannot be decoded or its
    /// contents are internally inconsistent.
    pub fn restore(&mut self, bytes: &[u8]) -> Result<(), CorruptSaveError> {
        *self = Self::load(bytes)?;
        Ok(())
    }
}
