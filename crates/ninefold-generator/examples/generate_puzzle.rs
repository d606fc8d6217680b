//! Example demonstrating sudoku puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` with a difficulty preset
//! - Generate a random puzzle or regenerate one from its seed
//! - Display the puzzle, solution, and seed
//! - Sample many puzzles in parallel and summarize them
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick a difficulty preset or an exact empty-cell count:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty high
//! cargo run --example generate_puzzle -- --difficulty 60 --allow-multiple-solutions
//! ```
//!
//! Regenerate a known puzzle from its seed (64 hex digits):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed 7f3a9c0e5b2d84f1a6c47e90b3d15f28c9e06a4b7d2f8135e0a9c6b4d7f21e83
//! ```
//!
//! Sample a batch in parallel and report empty-cell statistics:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty high --batch 100
//! ```

use std::process;

use clap::Parser;
use ninefold_generator::{
    Difficulty, GeneratedPuzzle, GenerationConfig, PuzzleGenerator, PuzzleSeed,
};
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty preset (low, medium, high) or an exact empty-cell count.
    #[arg(long, value_name = "DIFFICULTY", default_value = "medium")]
    difficulty: Difficulty,

    /// Seed to regenerate a specific puzzle (64 hex digits).
    #[arg(long, value_name = "SEED")]
    seed: Option<PuzzleSeed>,

    /// Skip the uniqueness check while carving.
    #[arg(long)]
    allow_multiple_solutions: bool,

    /// Generate this many puzzles in parallel and report statistics.
    #[arg(long, value_name = "COUNT")]
    batch: Option<usize>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = GenerationConfig {
        difficulty: args.difficulty,
        ensure_unique: !args.allow_multiple_solutions,
    };
    let generator = PuzzleGenerator::new(config);

    if let Some(count) = args.batch {
        run_batch(&generator, count);
        return;
    }

    let result = match args.seed {
        Some(seed) => generator.generate_with_seed(seed),
        None => generator.generate(),
    };
    match result {
        Ok(generated) => print_puzzle(&generated),
        Err(error) => {
            eprintln!("{error}");
            process::exit(1);
        }
    }
}

fn run_batch(generator: &PuzzleGenerator, count: usize) {
    if count == 0 {
        eprintln!("--batch must be at least 1.");
        process::exit(1);
    }

    let empties = (0..count)
        .into_par_iter()
        .filter_map(|_| generator.generate().ok())
        .map(|generated| generated.puzzle.empty_count())
        .collect::<Vec<_>>();

    if empties.is_empty() {
        eprintln!("No puzzle could be generated.");
        process::exit(1);
    }

    let min = empties.iter().copied().min().unwrap();
    let max = empties.iter().copied().max().unwrap();
    let total: usize = empties.iter().sum();
    #[expect(clippy::cast_precision_loss)]
    let mean = total as f64 / empties.len() as f64;

    println!("Batch:");
    println!("  Puzzles: {}", empties.len());
    println!("  Empty cells: min {min}, mean {mean:.1}, max {max}");
}

fn print_puzzle(generated: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", generated.seed);
    println!();

    println!("Puzzle ({} empty cells):", generated.puzzle.empty_count());
    println!("{}", indent(&generated.puzzle.pretty()));
    println!();
    println!("  {}", generated.puzzle);
    println!();

    println!("Solution:");
    println!("  {}", generated.solution);
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("  {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
