//! Board coordinates.

use std::fmt::{self, Display};

/// A cell coordinate on the 9×9 board.
///
/// Rows and columns are numbered 0-8 from the top-left corner.
///
/// # Examples
///
/// ```
/// use ninefold_core::Cell;
///
/// let cell = Cell::new(4, 7);
/// assert_eq!(cell.row(), 4);
/// assert_eq!(cell.col(), 7);
/// assert_eq!(cell.block(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    /// Array containing all cells in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ninefold_core::Cell;
    ///
    /// assert_eq!(Cell::ALL.len(), 81);
    /// assert_eq!(Cell::ALL[0], Cell::new(0, 0));
    /// assert_eq!(Cell::ALL[80], Cell::new(8, 8));
    /// ```
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, col: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                row: (i / 9) as u8,
                col: (i % 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a cell from row and column indices.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9, "row must be between 0 and 8");
        assert!(col < 9, "column must be between 0 and 8");
        Self { row, col }
    }

    /// Creates a cell from a block index and a cell index within the block.
    ///
    /// Both indices run 0-8; cells within a block are ordered row-major.
    ///
    /// # Panics
    ///
    /// Panics if `block` or `i` is not in the range 0-8.
    #[must_use]
    pub const fn from_block(block: u8, i: u8) -> Self {
        assert!(block < 9, "block must be between 0 and 8");
        assert!(i < 9, "cell index must be between 0 and 8");
        Self::new((block / 3) * 3 + i / 3, (block % 3) * 3 + i % 3)
    }

    /// Row index (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Column index (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Index of the 3×3 block containing this cell (0-8, left to right,
    /// top to bottom).
    #[must_use]
    pub const fn block(self) -> u8 {
        (self.row / 3) * 3 + self.col / 3
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row + 1, self.col + 1)
    }
}
