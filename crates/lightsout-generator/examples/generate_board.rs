//! Example demonstrating Lights Out board generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` with a `Solver`
//! - Generate a board from a random or given seed
//! - Print the board in board-file layout, its minimal solution, and its seed
//! - Sample many boards in parallel and report how many presses they need
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_board
//! ```
//!
//! Reproduce a board from its seed:
//!
//! ```sh
//! cargo run --example generate_board -- --seed 1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef
//! ```
//!
//! Require harder boards, and write the result as a `.lob` file:
//!
//! ```sh
//! cargo run --example generate_board -- --min-presses 10 > boards/hard.lob
//! ```
//!
//! Print the distribution of minimal press counts over many random boards:
//!
//! ```sh
//! cargo run --example generate_board -- --sample 100000
//! ```

use std::process;

use clap::Parser;
use lightsout_generator::{PuzzleGenerator, PuzzleSeed};
use lightsout_solver::Solver;
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed to generate from (64 hex digits). A random seed is used if omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<String>,

    /// Minimum number of presses the minimal solution must need.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    min_presses: usize,

    /// Generate this many random boards and print press-count statistics instead.
    #[arg(long, value_name = "COUNT")]
    sample: Option<usize>,
}

fn main() {
    let args = Args::parse();
    let solver = Solver::new();
    let generator = PuzzleGenerator::new(&solver).with_min_presses(args.min_presses);

    if let Some(count) = args.sample {
        print_statistics(&generator, count);
        return;
    }

    let seed = match args.seed.as_deref().map(str::parse::<PuzzleSeed>) {
        None => PuzzleSeed::random(),
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            eprintln!("Invalid seed: {e}");
            process::exit(1);
        }
    };

    let puzzle = generator.generate_with_seed(seed);
    println!("# seed: {}", puzzle.seed);
    let presses = puzzle
        .solution
        .presses()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    println!("# solution ({} presses): {presses}", puzzle.solution.len());
    println!("{}", puzzle.board);
}

fn print_statistics(generator: &PuzzleGenerator<'_>, count: usize) {
    let histogram = (0..count)
        .into_par_iter()
        .map(|_| generator.generate().solution.len())
        .fold(
            || [0_usize; 16],
            |mut acc, len| {
                acc[len] += 1;
                acc
            },
        )
        .reduce(
            || [0_usize; 16],
            |mut a, b| {
                for (x, y) in a.iter_mut().zip(b) {
                    *x += y;
                }
                a
            },
        );

    println!("Sampled {count} boards (min presses: {})", generator.min_presses());
    for (presses, &boards) in histogram.iter().enumerate() {
        if boards > 0 {
            println!("  {presses:>2} presses: {boards}");
        }
    }
}
