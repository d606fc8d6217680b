//! Rows, columns, and blocks.

use std::fmt::{self, Display};

use crate::Cell;

/// A sudoku house (row, column, or 3×3 block).
///
/// Every digit appears exactly once per house in a solved grid. Houses are
/// scanned in the order of [`House::ALL`] when a grid is checked for
/// duplicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its index (0-8, top to bottom).
    Row {
        /// Row index (0-8).
        index: u8,
    },
    /// A column identified by its index (0-8, left to right).
    Column {
        /// Column index (0-8).
        index: u8,
    },
    /// A 3×3 block identified by its index (0-8, left to right, top to
    /// bottom).
    Block {
        /// Block index (0-8).
        index: u8,
    },
}

impl House {
    /// Array containing all houses in row, column, block order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { index: 0 }; 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { index: i as u8 };
            all[i + 9] = Self::Column { index: i as u8 };
            all[i + 18] = Self::Block { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Converts a cell index within the house (0-8) into a board [`Cell`].
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    pub fn cell_at(self, i: u8) -> Cell {
        assert!(i < 9);
        match self {
            House::Row { index } => Cell::new(index, i),
            House::Column { index } => Cell::new(i, index),
            House::Block { index } => Cell::from_block(index, i),
        }
    }

    /// Returns the nine cells of this house in order.
    #[must_use]
    pub fn cells(self) -> [Cell; 9] {
        std::array::from_fn(|i| {
            #[expect(clippy::cast_possible_truncation)]
            let i = i as u8;
            self.cell_at(i)
        })
    }
}

impl Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            House::Row { index } => write!(f, "row {}", index + 1),
            House::Column { index } => write!(f, "column {}", index + 1),
            House::Block { index } => write!(f, "block {}", index + 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_order() {
        assert_eq!(House::ALL.len(), 27);
        assert_eq!(House::ALL[0], House::Row { index: 0 });
        assert_eq!(House::ALL[9], House::Column { index: 0 });
        assert_eq!(House::ALL[18], House::Block { index: 0 });
        assert_eq!(House::ALL[26], House::Block { index: 8 });
    }

    #[test]
    fn test_row_cells() {
        let cells = House::Row { index: 3 }.cells();
        for (col, cell) in cells.into_iter().enumerate() {
            assert_eq!(cell, Cell::new(3, u8::try_from(col).unwrap()));
        }
    }

    #[test]
    fn test_column_cells() {
        let cells = House::Column { index: 7 }.cells();
        for (row, cell) in cells.into_iter().enumerate() {
            assert_eq!(cell, Cell::new(u8::try_from(row).unwrap(), 7));
        }
    }

    #[test]
    fn test_block_cells() {
        let cells = House::Block { index: 4 }.cells();
        assert_eq!(cells[0], Cell::new(3, 3));
        assert_eq!(cells[4], Cell::new(4, 4));
        assert_eq!(cells[8], Cell::new(5, 5));
        for cell in cells {
            assert_eq!(cell.block(), 4);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(House::Row { index: 0 }.to_string(), "row 1");
        assert_eq!(House::Column { index: 4 }.to_string(), "column 5");
        assert_eq!(House::Block { index: 8 }.to_string(), "block 9");
    }
}
