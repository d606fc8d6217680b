//! Core board types for the ninefold Sudoku engine.
//!
//! This crate provides the value types shared by the solver, generator, and
//! session crates:
//!
//! - [`Grid`]: the 9×9 board, storing `0` for empty cells and `1`-`9` for
//!   placed digits
//! - [`Cell`]: a row/column coordinate on the board
//! - [`House`]: a row, column, or 3×3 block
//! - [`DigitSet`]: a set of digits 1-9 backed by a 16-bit mask
//! - [`FixedMask`]: the given (unmodifiable) cells of a puzzle
//!
//! # Examples
//!
//! ```
//! use ninefold_core::{Cell, Grid};
//!
//! let mut grid = Grid::new();
//! grid.set(Cell::new(0, 0), 5);
//!
//! assert_eq!(grid.get(Cell::new(0, 0)), 5);
//! // A digit already present in a row is not a valid placement elsewhere
//! // in that row.
//! assert!(!grid.is_placement_valid(Cell::new(0, 8), 5));
//! ```

pub mod cell;
pub mod digit_set;
pub mod fixed_mask;
pub mod grid;
pub mod house;

pub use self::{
    cell::Cell,
    digit_set::DigitSet,
    fixed_mask::FixedMask,
    grid::{Grid, ParseGridError},
    house::House,
};

/// All sudoku digits in ascending order.
pub const DIGITS: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
