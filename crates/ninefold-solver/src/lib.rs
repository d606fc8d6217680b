//! Backtracking sudoku solver.
//!
//! All entry points share one depth-first search: find the first empty cell
//! in row-major order, place a candidate digit, recurse, and unplace on
//! failure. Filled cells are taken as-is and never revisited, so solving and
//! counting are always over the completions of the empty cells.
//!
//! The candidate order is supplied by the caller, which makes the same
//! search serve three jobs:
//!
//! - [`solve`] tries digits in ascending order and finds one solution.
//! - [`fill_randomized`] shuffles candidates with a caller-supplied RNG to
//!   produce a random completion, which turns an empty grid into a random
//!   full solution.
//! - [`count_solutions`] enumerates completions up to a limit, which is how
//!   [`has_unique_solution`] decides uniqueness without exhausting the whole
//!   search space.
//!
//! # Examples
//!
//! ```
//! use ninefold_core::Grid;
//!
//! let mut grid: Grid =
//!     "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
//!         .parse()
//!         .unwrap();
//! assert!(ninefold_solver::solve(&mut grid));
//! assert!(grid.is_solved());
//! ```

use ninefold_core::{DIGITS, Grid};
use rand::{Rng, seq::SliceRandom as _};

/// Fills every empty cell, trying digits in ascending order.
///
/// Returns `true` and leaves `grid` solved if a completion exists. Returns
/// `false` and leaves `grid` untouched if the filled cells admit no
/// completion.
pub fn solve(grid: &mut Grid) -> bool {
    solve_with(grid, &mut |_| {})
}

/// Fills every empty cell, trying digits in an order shuffled by `rng`.
///
/// Starting from an empty grid this produces a uniformly scrambled full
/// solution, which is the first step of puzzle generation. The same seed
/// yields the same grid.
pub fn fill_randomized<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> bool {
    solve_with(grid, &mut |candidates: &mut [u8; 9]| candidates.shuffle(rng))
}

/// Backtracking search with a caller-supplied candidate order.
///
/// `order` is invoked once per visited cell and may permute the candidate
/// digits in place before they are tried.
pub fn solve_with<F>(grid: &mut Grid, order: &mut F) -> bool
where
    F: FnMut(&mut [u8; 9]),
{
    let Some(cell) = grid.first_empty() else {
        return true;
    };
    let mut candidates = DIGITS;
    order(&mut candidates);
    for digit in candidates {
        if grid.is_placement_valid(cell, digit) {
            grid.set(cell, digit);
            if solve_with(grid, order) {
                return true;
            }
            grid.set(cell, 0);
        }
    }
    false
}

/// Counts completions of `grid`, stopping as soon as `limit` are found.
///
/// The return value is `min(limit, total completions)`. A full grid with no
/// violations counts as its own single completion. `limit == 0` returns 0
/// without searching.
#[must_use]
pub fn count_solutions(grid: &Grid, limit: usize) -> usize {
    if limit == 0 {
        return 0;
    }
    let mut scratch = grid.clone();
    let mut found = 0;
    count_into(&mut scratch, limit, &mut found);
    found
}

fn count_into(grid: &mut Grid, limit: usize, found: &mut usize) {
    let Some(cell) = grid.first_empty() else {
        *found += 1;
        return;
    };
    for digit in DIGITS {
        if grid.is_placement_valid(cell, digit) {
            grid.set(cell, digit);
            count_into(grid, limit, found);
            grid.set(cell, 0);
            if *found >= limit {
                return;
            }
        }
    }
}

/// Returns whether `grid` completes to exactly one solution.
///
/// Searches for at most two completions, so a grid with many solutions is
/// rejected quickly.
#[must_use]
pub fn has_unique_solution(grid: &Grid) -> bool {
    count_solutions(grid, 2) == 1
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    const CANONICAL: &str = "\
        123456789\
        456789123\
        789123456\
        234567891\
        567891234\
        891234567\
        345678912\
        678912345\
        912345678";

    /// The canonical grid with its main diagonal cleared. Every cleared cell
    /// is forced by its row and column, so the solution is unique.
    const DIAGONAL_PUZZLE: &str = "\
        .23456789\
        4.6789123\
        78.123456\
        234.67891\
        5678.1234\
        89123.567\
        345678.12\
        6789123.5\
        91234567.";

    const WIKIPEDIA_PUZZLE: &str = "\
        53..7....\
        6..195...\
        .98....6.\
        8...6...3\
        4..8.3..1\
        7...2...6\
        .6....28.\
        ...419..5\
        ....8..79";

    const WIKIPEDIA_SOLUTION: &str = "\
        534678912\
        672195348\
        198342567\
        859761423\
        426853791\
        713924856\
        961537284\
        287419635\
        345286179";

    #[test]
    fn test_solve_forced_puzzle() {
        let mut grid: Grid = DIAGONAL_PUZZLE.parse().expect("valid grid");
        assert!(solve(&mut grid));
        assert_eq!(grid, CANONICAL.parse().expect("valid grid"));
    }

    #[test]
    fn test_solve_known_puzzle() {
        let mut grid: Grid = WIKIPEDIA_PUZZLE.parse().expect("valid grid");
        assert!(solve(&mut grid));
        assert!(grid.is_solved());
        assert_eq!(grid, WIKIPEDIA_SOLUTION.parse().expect("valid grid"));
    }

    #[test]
    fn test_solve_leaves_contradiction_untouched() {
        // Row 0 holds 1-8, and the 9 that would finish it is blocked from
        // (0, 8) by its column.
        let mut grid = Grid::new();
        for col in 0..8u8 {
            grid.set(ninefold_core::Cell::new(0, col), col + 1);
        }
        grid.set(ninefold_core::Cell::new(1, 8), 9);
        let before = grid.clone();
        assert!(!solve(&mut grid));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_fill_randomized_is_deterministic_per_seed() {
        let mut first = Grid::new();
        assert!(fill_randomized(&mut first, &mut Pcg64::seed_from_u64(42)));
        assert!(first.is_solved());

        let mut second = Grid::new();
        assert!(fill_randomized(&mut second, &mut Pcg64::seed_from_u64(42)));
        assert_eq!(first, second);

        let mut other = Grid::new();
        assert!(fill_randomized(&mut other, &mut Pcg64::seed_from_u64(43)));
        assert!(other.is_solved());
        assert_ne!(first, other);
    }

    #[test]
    fn test_count_solutions_respects_limit() {
        let empty = Grid::new();
        assert_eq!(count_solutions(&empty, 2), 2);
        assert_eq!(count_solutions(&empty, 5), 5);
        assert_eq!(count_solutions(&empty, 0), 0);
    }

    #[test]
    fn test_count_solutions_on_full_grid() {
        let grid: Grid = CANONICAL.parse().expect("valid grid");
        assert_eq!(count_solutions(&grid, 2), 1);
    }

    #[test]
    fn test_has_unique_solution() {
        let forced: Grid = DIAGONAL_PUZZLE.parse().expect("valid grid");
        assert!(has_unique_solution(&forced));
        assert!(!has_unique_solution(&Grid::new()));
    }
}
