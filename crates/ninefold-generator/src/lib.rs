//! Sudoku puzzle generation.
//!
//! Generation runs in two phases. First a random complete solution is built
//! by solving an empty grid with shuffled candidate order. Then cells are
//! carved out one by one in random order, undoing any removal that would
//! leave the puzzle with more than one solution.
//!
//! Every run is driven by a [`PuzzleSeed`], so a puzzle can be regenerated
//! from its seed alone.
//!
//! # Examples
//!
//! ```
//! use ninefold_generator::{GenerationConfig, PuzzleGenerator};
//!
//! let generator = PuzzleGenerator::new(GenerationConfig::default());
//! let generated = generator.generate().unwrap();
//! assert!(generated.solution.is_solved());
//! assert!(generated.puzzle.empty_count() > 0);
//! ```

pub mod carve;
pub mod difficulty;
pub mod seed;

use log::warn;
use ninefold_core::{FixedMask, Grid};

pub use self::{
    carve::{carve, generate_full_grid},
    difficulty::{Difficulty, GenerationConfig, ParseDifficultyError},
    seed::{ParseSeedError, PuzzleSeed},
};

/// A generated puzzle together with its solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The complete solution grid.
    pub solution: Grid,
    /// The puzzle grid, equal to the solution with the carved cells empty.
    pub puzzle: Grid,
    /// Mask marking the puzzle's givens.
    pub fixed: FixedMask,
    /// Seed that reproduces this puzzle.
    pub seed: PuzzleSeed,
}

/// Error from a generation run that exhausted its retry budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("failed to generate a puzzle after {attempts} attempts")]
pub struct GenerationError {
    /// Number of attempts made.
    pub attempts: u32,
}

/// Puzzle generator configured once and reusable across runs.
#[derive(Debug, Clone, Default)]
pub struct PuzzleGenerator {
    config: GenerationConfig,
}

impl PuzzleGenerator {
    const MAX_ATTEMPTS: u32 = 16;

    /// Creates a generator with the given settings.
    #[must_use]
    pub const fn new(config: GenerationConfig) -> Self {
        Self { config }
    }

    /// Generates a puzzle from a freshly drawn random seed.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if every attempt produced a puzzle with no
    /// empty cells despite a nonzero target.
    pub fn generate(&self) -> Result<GeneratedPuzzle, GenerationError> {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// The same seed and configuration always produce the same puzzle.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if every attempt produced a puzzle with no
    /// empty cells despite a nonzero target.
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> Result<GeneratedPuzzle, GenerationError> {
        let target = self.config.difficulty.target_empties();
        for attempt in 0..Self::MAX_ATTEMPTS {
            let solution = generate_full_grid(&mut seed.phase_rng("solution", attempt));
            let (puzzle, fixed) = carve(
                &solution,
                target,
                self.config.ensure_unique,
                &mut seed.phase_rng("carve", attempt),
            );
            if target > 0 && puzzle.empty_count() == 0 {
                warn!("generation attempt {attempt} carved no cells, retrying");
                continue;
            }
            return Ok(GeneratedPuzzle {
                solution,
                puzzle,
                fixed,
                seed,
            });
        }
        Err(GenerationError {
            attempts: Self::MAX_ATTEMPTS,
        })
    }
}
