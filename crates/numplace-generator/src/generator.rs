//! Solved-board generation and puzzle derivation.

use numplace_core::{Digit, DigitGrid, PeerScan, Position, placement_fits};
use rand::{Rng, SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64;

use crate::{Difficulty, PuzzleSeed};

/// A generated puzzle: the playable problem grid, the solved grid it was
/// derived from, and the seed that produced both.
///
/// Every non-empty problem cell equals the solution cell at the same
/// position; the solution is fully populated. The solution is kept for the
/// session's lifetime and used only for completion checks, never shown to
/// the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The playable grid; empty cells are the holes the player fills.
    pub problem: DigitGrid,
    /// The solved grid the problem was derived from.
    pub solution: DigitGrid,
    /// The seed that reproduces this puzzle.
    pub seed: PuzzleSeed,
}

/// Generates solved boards and derives playable puzzles from them.
///
/// Generation is randomized backtracking: cells are visited in row-major
/// order and the candidate digits 1-9 are tried in a freshly shuffled order
/// at each empty cell, undoing placements on dead branches. A full valid
/// 9×9 board always exists down some branch, so generation cannot fail.
///
/// Deriving a puzzle then clears a difficulty-determined number of randomly
/// chosen cells. No uniqueness check is performed; the derived puzzle may
/// admit solutions other than the recorded one, and the engine only ever
/// measures progress against the recorded solution.
///
/// All randomness comes from the seed: [`BoardGenerator::generate_with_seed`]
/// is deterministic, and [`BoardGenerator::generate`] just draws a fresh
/// random seed first.
///
/// # Examples
///
/// ```
/// use numplace_generator::{BoardGenerator, Difficulty, PuzzleSeed};
///
/// let generator = BoardGenerator::new();
/// let seed = PuzzleSeed::from_phrase("doc example");
/// let puzzle = generator.generate_with_seed(Difficulty::Medium, seed);
///
/// assert!(puzzle.solution.is_full());
/// assert_eq!(puzzle.problem.empty_count(), 45);
///
/// // Same seed, same puzzle
/// let replay = generator.generate_with_seed(Difficulty::Medium, seed);
/// assert_eq!(replay, puzzle);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardGenerator;

impl BoardGenerator {
    /// Creates a generator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Generates a puzzle from a fresh random seed.
    ///
    /// The seed is recorded in the returned [`GeneratedPuzzle`], so any
    /// puzzle handed out can later be reproduced exactly.
    #[must_use]
    pub fn generate(&self, difficulty: Difficulty) -> GeneratedPuzzle {
        self.generate_with_seed(difficulty, PuzzleSeed::random())
    }

    /// Generates the puzzle identified by `seed`.
    ///
    /// This is a pure function of `(difficulty, seed)`: the same inputs
    /// always produce the same problem and solution.
    #[must_use]
    pub fn generate_with_seed(&self, difficulty: Difficulty, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = Pcg64::from_seed(*seed.as_bytes());

        let mut grid = DigitGrid::new();
        let filled = fill_grid(&mut grid, &mut rng);
        debug_assert!(filled, "a 9x9 board is always satisfiable");
        let solution = grid.clone();

        let problem = poke_holes(grid, difficulty, &mut rng);
        log::debug!(
            "generated {difficulty} puzzle with {} holes from seed {seed}",
            problem.empty_count()
        );

        GeneratedPuzzle {
            problem,
            solution,
            seed,
        }
    }
}

/// Fills every empty cell of `grid` by backtracking, visiting cells in
/// row-major order and trying candidate digits in a shuffled order.
///
/// Returns `true` when the grid is completely filled. A `false` return only
/// happens on dead branches inside the recursion; the outermost call always
/// succeeds for an initially empty grid.
fn fill_grid<R: Rng>(grid: &mut DigitGrid, rng: &mut R) -> bool {
    let Some(pos) = Position::ALL.into_iter().find(|&pos| grid[pos].is_none()) else {
        return true;
    };

    let mut candidates = Digit::ALL;
    candidates.shuffle(rng);
    for digit in candidates {
        if placement_fits(grid, pos, digit, PeerScan::IncludeSelf) {
            grid.set(pos, Some(digit));
            if fill_grid(grid, rng) {
                return true;
            }
            grid.set(pos, None);
        }
    }
    false
}

/// Clears `difficulty.holes_to_poke()` cells of a solved grid, chosen by
/// shuffling the 81 linear cell indices and clearing the leading ones.
fn poke_holes<R: Rng>(mut grid: DigitGrid, difficulty: Difficulty, rng: &mut R) -> DigitGrid {
    let mut indices: Vec<usize> = (0..81).collect();
    indices.shuffle(rng);
    for &index in &indices[..difficulty.holes_to_poke()] {
        grid.set(Position::from_index(index), None);
    }
    grid
}
