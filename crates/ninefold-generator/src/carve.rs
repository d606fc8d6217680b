//! Full-grid generation and cell carving.

use log::debug;
use ninefold_core::{Cell, FixedMask, Grid};
use ninefold_solver as solver;
use rand::{Rng, seq::SliceRandom as _};

/// Produces a random complete solution grid.
#[must_use]
pub fn generate_full_grid<R: Rng + ?Sized>(rng: &mut R) -> Grid {
    let mut grid = Grid::new();
    let filled = solver::fill_randomized(&mut grid, rng);
    debug_assert!(filled, "an empty grid always has a completion");
    grid
}

/// Carves up to `target_empties` cells out of a full solution.
///
/// Cells are visited in an order shuffled by `rng`. With `ensure_unique` set,
/// a removal that would leave more than one solution is undone and the cell
/// keeps its digit, so the final puzzle may hold fewer empty cells than
/// requested. Cells already empty in `solution` are skipped and do not count
/// toward the target.
///
/// Returns the puzzle and the mask of its givens.
#[must_use]
pub fn carve<R: Rng + ?Sized>(
    solution: &Grid,
    target_empties: u8,
    ensure_unique: bool,
    rng: &mut R,
) -> (Grid, FixedMask) {
    let mut puzzle = solution.clone();
    let mut order = Cell::ALL;
    order.shuffle(rng);

    let mut emptied: u8 = 0;
    let mut rejected: u32 = 0;
    for cell in order {
        if emptied >= target_empties {
            break;
        }
        let digit = puzzle.get(cell);
        if digit == 0 {
            continue;
        }
        puzzle.set(cell, 0);
        if ensure_unique && !solver::has_unique_solution(&puzzle) {
            puzzle.set(cell, digit);
            rejected += 1;
            continue;
        }
        emptied += 1;
    }
    debug!("carved {emptied} of {target_empties} cells ({rejected} removals rejected)");

    let fixed = FixedMask::of_givens(&puzzle);
    (puzzle, fixed)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    fn full_grid(seed: u64) -> Grid {
        generate_full_grid(&mut Pcg64::seed_from_u64(seed))
    }

    #[test]
    fn test_generate_full_grid_is_solved_and_seeded() {
        let first = full_grid(1);
        assert!(first.is_solved());
        assert_eq!(first, full_grid(1));
        assert_ne!(first, full_grid(2));
    }

    #[test]
    fn test_carve_keeps_a_unique_puzzle() {
        let solution = full_grid(3);
        let (puzzle, fixed) = carve(&solution, 45, true, &mut Pcg64::seed_from_u64(4));

        let empties = puzzle.empty_count();
        assert!(empties >= 1);
        assert!(empties <= 45);
        assert!(solver::has_unique_solution(&puzzle));

        let mut completed = puzzle.clone();
        assert!(solver::solve(&mut completed));
        assert_eq!(completed, solution);

        for cell in Cell::ALL {
            let digit = puzzle.get(cell);
            if digit != 0 {
                assert_eq!(digit, solution.get(cell));
            }
            assert_eq!(fixed.is_fixed(cell), digit != 0);
        }
    }

    #[test]
    fn test_carve_target_zero_leaves_solution_intact() {
        let solution = full_grid(5);
        let (puzzle, fixed) = carve(&solution, 0, true, &mut Pcg64::seed_from_u64(6));
        assert_eq!(puzzle, solution);
        assert_eq!(fixed.given_count(), 81);
    }

    #[test]
    fn test_carve_without_uniqueness_check_empties_everything() {
        let solution = full_grid(7);
        let (puzzle, fixed) = carve(&solution, 81, false, &mut Pcg64::seed_from_u64(8));
        assert_eq!(puzzle.empty_count(), 81);
        assert_eq!(fixed.given_count(), 0);
    }
}
