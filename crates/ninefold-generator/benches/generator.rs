//! Benchmarks for sudoku puzzle generation.
//!
//! This benchmark suite measures the complete generation pipeline: building a
//! random full solution, then carving cells under the uniqueness check.
//!
//! # Benchmarks
//!
//! - **`generator_medium`**: Generates puzzles with the medium preset
//!   (45 empty cells).
//! - **`generator_high`**: Generates puzzles with the high preset (55 empty
//!   cells), where the uniqueness check rejects far more removals.
//!
//! # Test Data
//!
//! Uses three fixed seeds to ensure reproducibility while testing multiple cases:
//!
//! - **`seed_0`**: `7f3a9c0e5b2d84f1a6c47e90b3d15f28c9e06a4b7d2f8135e0a9c6b4d7f21e83`
//! - **`seed_1`**: `2b8e4d0a6c19f3757e512890abc4de6f013579bdf02468ace1357b9d8f0a2c4e`
//! - **`seed_2`**: `d4c3b2a1f0e9d8c7b6a5948382716069f5e4d3c2b1a09876543210fedcba9876`
//!
//! Each seed produces a different puzzle, allowing measurement across various
//! cases while maintaining reproducibility.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use ninefold_generator::{Difficulty, GenerationConfig, PuzzleGenerator, PuzzleSeed};

const SEEDS: [&str; 3] = [
    "7f3a9c0e5b2d84f1a6c47e90b3d15f28c9e06a4b7d2f8135e0a9c6b4d7f21e83",
    "2b8e4d0a6c19f3757e512890abc4de6f013579bdf02468ace1357b9d8f0a2c4e",
    "d4c3b2a1f0e9d8c7b6a5948382716069f5e4d3c2b1a09876543210fedcba9876",
];

fn bench_generator_medium(c: &mut Criterion) {
    let generator = PuzzleGenerator::new(GenerationConfig {
        difficulty: Difficulty::Medium,
        ensure_unique: true,
    });

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = PuzzleSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("generator_medium", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_with_seed(seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_generator_high(c: &mut Criterion) {
    let generator = PuzzleGenerator::new(GenerationConfig {
        difficulty: Difficulty::High,
        ensure_unique: true,
    });

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = PuzzleSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("generator_high", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_with_seed(seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(12));
    targets =
        bench_generator_medium,
        bench_generator_high
);
criterion_main!(benches);
