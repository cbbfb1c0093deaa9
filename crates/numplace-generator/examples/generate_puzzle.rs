//! Example demonstrating puzzle generation.
//!
//! This example shows how to:
//! - Generate a random puzzle at a chosen difficulty
//! - Reproduce a puzzle from its seed or from a seed phrase
//! - Display the puzzle, solution, and seed
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Choose a difficulty (easy, medium, hard):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty hard
//! ```
//!
//! Reproduce a puzzle from a printed seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <64-char-hex>
//! ```
//!
//! Derive the seed from a memorable phrase instead:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --phrase "daily #412"
//! ```

use std::time::Instant;

use clap::Parser;
use numplace_core::{DigitGrid, Position};
use numplace_generator::{BoardGenerator, Difficulty, PuzzleSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty preset controlling the number of holes.
    #[arg(long, value_name = "DIFFICULTY", default_value = "medium")]
    difficulty: Difficulty,

    /// Seed to reproduce, as 64 hex characters.
    #[arg(long, value_name = "HEX", conflicts_with = "phrase")]
    seed: Option<PuzzleSeed>,

    /// Text to derive the seed from.
    #[arg(long, value_name = "TEXT")]
    phrase: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let seed = match (&args.seed, &args.phrase) {
        (Some(seed), _) => *seed,
        (None, Some(phrase)) => PuzzleSeed::from_phrase(phrase),
        (None, None) => PuzzleSeed::random(),
    };

    let start = Instant::now();
    let puzzle = BoardGenerator::new().generate_with_seed(args.difficulty, seed);
    log::info!("generation took {:?}", start.elapsed());

    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Difficulty:");
    println!(
        "  {} ({} holes, {} givens)",
        args.difficulty,
        args.difficulty.holes_to_poke(),
        puzzle.problem.filled_count()
    );
    println!();
    println!("Problem:");
    println!("  {}", puzzle.problem);
    print_rows(&puzzle.problem);
    println!();
    println!("Solution:");
    println!("  {}", puzzle.solution);
    print_rows(&puzzle.solution);
}

fn print_rows(grid: &DigitGrid) {
    for row in 0..9 {
        print!("  ");
        for col in 0..9 {
            match grid[Position::new(row, col)] {
                Some(digit) => print!("{digit}"),
                None => print!("."),
            }
            if col == 2 || col == 5 {
                print!(" ");
            }
        }
        println!();
        if row == 2 || row == 5 {
            println!();
        }
    }
}
