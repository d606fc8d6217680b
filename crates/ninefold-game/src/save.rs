//! Save-file snapshot and validation.

use ninefold_core::{Cell, DigitSet, FixedMask, Grid};
use serde::{Deserialize, Serialize};

/// Serialized form of a game in progress.
///
/// Pencil marks travel as raw bit masks. Undo and redo history is not part
/// of the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct SaveGame {
    pub(crate) solution: Grid,
    pub(crate) puzzle: Grid,
    pub(crate) board: Grid,
    pub(crate) fixed: FixedMask,
    pub(crate) pencil_marks: [[u16; 9]; 9],
    pub(crate) elapsed_seconds: u64,
}

/// Error from loading a save that is malformed or internally inconsistent.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum CorruptSaveError {
    /// The payload is not a decodable save game.
    #[display("malformed save payload: {source}")]
    Malformed {
        /// The underlying decode error.
        source: serde_json::Error,
    },
    /// A stored grid holds a value outside 0-9.
    #[display("cell {cell} holds out-of-range value {value}")]
    ValueOutOfRange {
        /// The offending cell.
        cell: Cell,
        /// The stored value.
        value: u8,
    },
    /// The stored solution is not a solved grid.
    #[display("stored solution is not a solved grid")]
    IncompleteSolution,
    /// The given mask disagrees with the puzzle grid.
    #[display("given mask disagrees with the puzzle at {cell}")]
    MaskMismatch {
        /// The offending cell.
        cell: Cell,
    },
    /// A puzzle given disagrees with the solution.
    #[display("puzzle given at {cell} disagrees with the solution")]
    GivenMismatch {
        /// The offending cell.
        cell: Cell,
    },
    /// The board disagrees with the puzzle on a given cell.
    #[display("board disagrees with the puzzle given at {cell}")]
    BoardMismatch {
        /// The offending cell.
        cell: Cell,
    },
    /// Stored pencil marks are invalid for a cell.
    #[display("invalid pencil marks {bits:#05x} at {cell}")]
    BadPencilMarks {
        /// The offending cell.
        cell: Cell,
        /// The stored mark bits.
        bits: u16,
    },
}

impl SaveGame {
    pub(crate) fn from_bytes(bytes: &[u8]) -> Result<Self, CorruptSaveError> {
        serde_json::from_slice(bytes).map_err(|source| CorruptSaveError::Malformed { source })
    }

    pub(crate) fn to_bytes(&self) -> Vec<u8> {
        serde_json::to_vec(self).expect("save snapshot serializes")
    }

    /// Checks the snapshot's internal consistency and decodes its pencil
    /// marks.
    pub(crate) fn validate(&self) -> Result<[[DigitSet; 9]; 9], CorruptSaveError> {
        // Range checks come first so the later grid queries cannot panic.
        for cell in Cell::ALL {
            for grid in [&self.solution, &self.puzzle, &self.board] {
                let value = grid.get(cell);
                if value > 9 {
                    return Err(CorruptSaveError::ValueOutOfRange { cell, value });
                }
            }
        }
        if !self.solution.is_solved() {
            return Err(CorruptSaveError::IncompleteSolution);
        }
        for cell in Cell::ALL {
            let given = self.puzzle.get(cell);
            if self.fixed.is_fixed(cell) != (given != 0) {
                return Err(CorruptSaveError::MaskMismatch { cell });
            }
            if given != 0 {
                if given != self.solution.get(cell) {
                    return Err(CorruptSaveError::GivenMismatch { cell });
                }
                if self.board.get(cell) != given {
                    return Err(CorruptSaveError::BoardMismatch { cell });
                }
            }
        }
        let mut marks = [[DigitSet::EMPTY; 9]; 9];
        for cell in Cell::ALL {
            let bits = self.pencil_marks[usize::from(cell.row())][usize::from(cell.col())];
            let Some(set) = DigitSet::try_from_bits(bits) else {
                return Err(CorruptSaveError::BadPencilMarks { cell, bits });
            };
            if self.board.get(cell) != 0 && !set.is_empty() {
                return Err(CorruptSaveError::BadPencilMarks { cell, bits });
            }
            marks[usize::from(cell.row())][usize::from(cell.col())] = set;
        }
        Ok(marks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED: &str = "\
        123456789\
        456789123\
        789123456\
        234567891\
        567891234\
        891234567\
        345678912\
        678912345\
        912345678";

    const PUZZLE: &str = "\
        .23456789\
        4.6789123\
        78.123456\
        234.67891\
        5678.1234\
        89123.567\
        345678.12\
        6789123.5\
        91234567.";

    fn fixture() -> SaveGame {
        let solution: Grid = SOLVED.parse().expect("valid grid");
        let puzzle: Grid = PUZZLE.parse().expect("valid grid");
        let fixed = FixedMask::of_givens(&puzzle);
        SaveGame {
            solution,
            board: puzzle.clone(),
            puzzle,
            fixed,
            pencil_marks: [[0; 9]; 9],
            elapsed_seconds: 0,
        }
    }

    #[test]
    fn test_valid_snapshot_round_trips() {
        let save = fixture();
        let bytes = save.to_bytes();
        let loaded = SaveGame::from_bytes(&bytes).expect("valid payload");
        assert_eq!(loaded, save);
        assert!(loaded.validate().is_ok());
    }

    #[test]
    fn test_garbage_payload_is_malformed() {
        assert!(matches!(
            SaveGame::from_bytes(b"not a save"),
            Err(CorruptSaveError::Malformed { .. })
        ));
    }

    #[test]
    fn test_out_of_range_value_is_rejected() {
        let bytes = fixture().to_bytes();
        let mut value: serde_json::Value = serde_json::from_slice(&bytes).expect("valid json");
        value["board"][0][0] = serde_json::Value::from(12);
        let bytes = serde_json::to_vec(&value).expect("json serializes");
        let save = SaveGame::from_bytes(&bytes).expect("still decodable");
        assert!(matches!(
            save.validate(),
            Err(CorruptSaveError::ValueOutOfRange { value: 12, .. })
        ));
    }

    #[test]
    fn test_unsolved_solution_is_rejected() {
        let mut save = fixture();
        save.solution.set(Cell::new(0, 0), 0);
        assert!(matches!(
            save.validate(),
            Err(CorruptSaveError::IncompleteSolution)
        ));
    }

    #[test]
    fn test_mask_mismatch_is_rejected() {
        let mut save = fixture();
        save.puzzle.set(Cell::new(0, 1), 0);
        assert!(matches!(
            save.validate(),
            Err(CorruptSaveError::MaskMismatch { cell }) if cell == Cell::new(0, 1)
        ));
    }

    #[test]
    fn test_given_disagreeing_with_solution_is_rejected() {
        let mut save = fixture();
        save.puzzle.set(Cell::new(0, 1), 9);
        assert!(matches!(
            save.validate(),
            Err(CorruptSaveError::GivenMismatch { cell }) if cell == Cell::new(0, 1)
        ));
    }

    #[test]
    fn test_board_disagreeing_with_a_given_is_rejected() {
        let mut save = fixture();
        save.board.set(Cell::new(0, 1), 5);
        assert!(matches!(
            save.validate(),
            Err(CorruptSaveError::BoardMismatch { cell }) if cell == Cell::new(0, 1)
        ));
    }

    #[test]
    fn test_bad_pencil_mark_bits_are_rejected() {
        let mut save = fixture();
        save.pencil_marks[0][0] = 0x8000;
        assert!(matches!(
            save.validate(),
            Err(CorruptSaveError::BadPencilMarks { bits: 0x8000, .. })
        ));
    }

    #[test]
    fn test_pencil_marks_on_filled_cells_are_rejected() {
        let mut save = fixture();
        save.pencil_marks[0][1] = 0b1;
        assert!(matches!(
            save.validate(),
            Err(CorruptSaveError::BadPencilMarks { bits: 0b1, .. })
        ));
    }

    #[test]
    fn test_pencil_marks_on_empty_cells_are_decoded() {
        let mut save = fixture();
        save.pencil_marks[0][0] = 0b101;
        let marks = save.validate().expect("valid snapshot");
        assert_eq!(marks[0][0], DigitSet::from_iter([1, 3]));
    }
}
