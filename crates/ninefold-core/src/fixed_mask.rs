//! Given-cell mask.

use serde::{Deserialize, Serialize};

use crate::{Cell, Grid};

/// Marks which cells of a puzzle are givens.
///
/// Given cells are fixed for the lifetime of a game and cannot be edited by
/// the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FixedMask([[bool; 9]; 9]);

impl FixedMask {
    /// Builds a mask marking every non-empty cell of `puzzle` as fixed.
    #[must_use]
    pub fn of_givens(puzzle: &Grid) -> Self {
        let mut mask = [[false; 9]; 9];
        for cell in Cell::ALL {
            mask[usize::from(cell.row())][usize::from(cell.col())] = puzzle.get(cell) != 0;
        }
        Self(mask)
    }

    /// Returns whether `cell` is a given.
    #[must_use]
    pub fn is_fixed(&self, cell: Cell) -> bool {
        self.0[usize::from(cell.row())][usize::from(cell.col())]
    }

    /// Number of given cells.
    #[must_use]
    pub fn given_count(&self) -> usize {
        Cell::ALL
            .iter()
            .filter(|&&cell| self.is_fixed(cell))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_givens_marks_filled_cells() {
        let puzzle: Grid = format!("5{}", ".".repeat(80)).parse().expect("valid grid");
        let mask = FixedMask::of_givens(&puzzle);
        assert!(mask.is_fixed(Cell::new(0, 0)));
        assert!(!mask.is_fixed(Cell::new(0, 1)));
        assert_eq!(mask.given_count(), 1);
    }

    #[test]
    fn test_empty_grid_has_no_givens() {
        let mask = FixedMask::of_givens(&Grid::new());
        assert_eq!(mask.given_count(), 0);
        assert!(Cell::ALL.iter().all(|&cell| !mask.is_fixed(cell)));
    }
}
