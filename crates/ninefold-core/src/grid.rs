//! The 9×9 board.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Cell, DIGITS, DigitSet, House};

/// The 9×9 sudoku board.
///
/// Cells hold `0` for empty or a digit `1`-`9`. The board is stored
/// row-major.
///
/// A grid parses from and displays as an 81-character string in row-major
/// order, with `.` (or `0`) for empty cells and whitespace ignored:
///
/// ```
/// use ninefold_core::Grid;
///
/// let grid: Grid =
///     "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
///         .parse()
///         .unwrap();
/// assert_eq!(grid.empty_count(), 51);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid([[u8; 9]; 9]);

impl Grid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self([[0; 9]; 9])
    }

    /// Value at a cell: `0` if empty, otherwise the digit.
    #[must_use]
    pub fn get(&self, cell: Cell) -> u8 {
        self.0[usize::from(cell.row())][usize::from(cell.col())]
    }

    /// Writes a value to a cell. `0` clears the cell.
    ///
    /// # Panics
    ///
    /// Panics if `value` is greater than 9.
    pub fn set(&mut self, cell: Cell, value: u8) {
        assert!(value <= 9, "cell value must be between 0 and 9, got {value}");
        self.0[usize::from(cell.row())][usize::from(cell.col())] = value;
    }

    /// Returns whether every cell holds a digit.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.first_empty().is_none()
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        Cell::ALL
            .iter()
            .filter(|&&cell| self.get(cell) == 0)
            .count()
    }

    /// First empty cell in row-major order, if any.
    #[must_use]
    pub fn first_empty(&self) -> Option<Cell> {
        Cell::ALL.into_iter().find(|&cell| self.get(cell) == 0)
    }

    /// Returns whether `value` could sit at `cell` without duplicating a
    /// digit in the cell's row, column, or block.
    ///
    /// The content of `cell` itself is ignored, so a digit already placed at
    /// `cell` is still a valid placement there.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::{Cell, Grid};
    ///
    /// let mut grid = Grid::new();
    /// grid.set(Cell::new(0, 0), 5);
    ///
    /// assert!(!grid.is_placement_valid(Cell::new(0, 8), 5));
    /// assert!(grid.is_placement_valid(Cell::new(8, 8), 5));
    /// // The probed cell's own digit does not conflict with itself.
    /// assert!(grid.is_placement_valid(Cell::new(0, 0), 5));
    /// ```
    #[must_use]
    pub fn is_placement_valid(&self, cell: Cell, value: u8) -> bool {
        assert!(
            (1..=9).contains(&value),
            "placement value must be between 1 and 9, got {value}"
        );
        for i in 0..9 {
            let row_peer = Cell::new(cell.row(), i);
            if row_peer != cell && self.get(row_peer) == value {
                return false;
            }
            let col_peer = Cell::new(i, cell.col());
            if col_peer != cell && self.get(col_peer) == value {
                return false;
            }
            let block_peer = Cell::from_block(cell.block(), i);
            if block_peer != cell && self.get(block_peer) == value {
                return false;
            }
        }
        true
    }

    /// Set of digits that could sit at `cell` without conflict.
    #[must_use]
    pub fn candidates_at(&self, cell: Cell) -> DigitSet {
        let mut candidates = DigitSet::FULL;
        for digit in DIGITS {
            if !self.is_placement_valid(cell, digit) {
                candidates.remove(digit);
            }
        }
        candidates
    }

    /// First house containing a duplicated digit, if any.
    ///
    /// Rows are scanned first, then columns, then blocks. Empty cells never
    /// count as duplicates.
    #[must_use]
    pub fn house_violation(&self) -> Option<House> {
        House::ALL
            .into_iter()
            .find(|&house| self.has_duplicate(house))
    }

    fn has_duplicate(&self, house: House) -> bool {
        let mut seen = DigitSet::new();
        for cell in house.cells() {
            let value = self.get(cell);
            if value == 0 {
                continue;
            }
            if seen.contains(value) {
                return true;
            }
            seen.insert(value);
        }
        false
    }

    /// Returns whether the grid is completely and correctly filled.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.is_full() && self.house_violation().is_none()
    }

    /// Renders the grid with block separators for terminal output.
    #[must_use]
    pub fn pretty(&self) -> String {
        let mut out = String::new();
        for row in 0u8..9 {
            if row > 0 && row % 3 == 0 {
                out.push_str("------+-------+------\n");
            }
            for col in 0u8..9 {
                if col > 0 {
                    out.push(' ');
                    if col % 3 == 0 {
                        out.push_str("| ");
                    }
                }
                match self.get(Cell::new(row, col)) {
                    0 => out.push('.'),
                    value => out.push(char::from(b'0' + value)),
                }
            }
            out.push('\n');
        }
        out
    }
}

/// Error from parsing a [`Grid`] from a string.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The input did not contain exactly 81 cell characters.
    #[display("expected 81 cells, found {count}")]
    BadLength {
        /// Number of cell characters found.
        count: usize,
    },
    /// A character was neither a digit nor an empty-cell marker.
    #[display("invalid cell character {character:?}")]
    BadCharacter {
        /// The offending character.
        character: char,
    },
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut cells = Cell::ALL.into_iter();
        let mut count = 0;
        for &byte in s.as_bytes() {
            if byte.is_ascii_whitespace() {
                continue;
            }
            let value = match byte {
                b'.' | b'0' => 0,
                b'1'..=b'9' => byte - b'0',
                _ => {
                    return Err(ParseGridError::BadCharacter {
                        character: char::from(byte),
                    });
                }
            };
            let Some(cell) = cells.next() else {
                return Err(ParseGridError::BadLength { count: count + 1 });
            };
            grid.set(cell, value);
            count += 1;
        }
        if cells.next().is_some() {
            return Err(ParseGridError::BadLength { count });
        }
        Ok(grid)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in Cell::ALL {
            match self.get(cell) {
                0 => f.write_str(".")?,
                value => write!(f, "{value}")?,
            }
        }
        Ok(())
    }
}
