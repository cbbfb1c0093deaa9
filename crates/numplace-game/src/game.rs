//! The live puzzle session.

use numplace_core::{Digit, DigitGrid, PeerScan, Position, placement_fits};
use numplace_generator::{BoardGenerator, Difficulty, GeneratedPuzzle};

use crate::{CellState, GameError};

/// A puzzle game session.
///
/// Owns the current board, the solution snapshot recorded at generation
/// time, and the per-cell error mask. Provides the mutation and query
/// surface the presentation layer drives: writing player values, wholesale
/// revalidation, per-subgrid completion, and win detection.
///
/// Two distinct notions of "wrong" coexist here and must not be conflated:
///
/// - the error mask reports **rule violations** among currently visible
///   cells; a value can differ from the solution yet show no error as long
///   as it conflicts with nothing it can see;
/// - completion checks ([`Game::is_subgrid_complete`], [`Game::is_solved`])
///   compare against the **recorded solution**, so a full, internally
///   consistent board that diverges from it does not win.
///
/// # Example
///
/// ```
/// use numplace_game::Game;
/// use numplace_generator::Difficulty;
///
/// let mut game = Game::new_random(Difficulty::Easy);
/// assert!(!game.is_solved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    cells: [CellState; 81],
    solution: DigitGrid,
    errors: [bool; 81],
}

impl Game {
    /// Creates a session from a generated puzzle.
    ///
    /// All non-empty cells of the puzzle's problem grid become given
    /// (immutable) cells; its solution grid is recorded for completion
    /// checks.
    ///
    /// # Example
    ///
    /// ```
    /// use numplace_core::Position;
    /// use numplace_game::Game;
    /// use numplace_generator::{BoardGenerator, Difficulty, PuzzleSeed};
    ///
    /// let puzzle = BoardGenerator::new()
    ///     .generate_with_seed(Difficulty::Medium, PuzzleSeed::from_phrase("doc"));
    /// let game = Game::new(puzzle);
    ///
    /// let givens = Position::ALL
    ///     .into_iter()
    ///     .filter(|&pos| game.cell(pos).is_given())
    ///     .count();
    /// assert_eq!(givens, 81 - Difficulty::Medium.holes_to_poke());
    /// ```
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle {
            problem,
            solution,
            seed: _,
        } = puzzle;
        let mut cells = [CellState::Empty; 81];
        for pos in Position::ALL {
            if let Some(digit) = problem[pos] {
                cells[pos.index()] = CellState::Given(digit);
            }
        }
        Self {
            cells,
            solution,
            errors: [false; 81],
        }
    }

    /// Creates a session by running the generator end-to-end at the given
    /// difficulty.
    #[must_use]
    pub fn new_random(difficulty: Difficulty) -> Self {
        Self::new(BoardGenerator::new().generate(difficulty))
    }

    /// Returns the state of the cell at `pos`.
    #[must_use]
    pub fn cell(&self, pos: Position) -> &CellState {
        &self.cells[pos.index()]
    }

    /// Returns the recorded solution grid.
    #[must_use]
    pub fn solution(&self) -> &DigitGrid {
        &self.solution
    }

    /// Writes a player value at `pos`; `None` clears the cell.
    ///
    /// The error mask is not updated here; callers run
    /// [`Game::revalidate`] once per edit batch, after every committed
    /// input event.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotModifyGivenCell`] if the cell is a given;
    /// the board is left untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use numplace_core::{Digit, Position};
    /// use numplace_game::Game;
    /// use numplace_generator::{BoardGenerator, Difficulty, PuzzleSeed};
    ///
    /// let puzzle = BoardGenerator::new()
    ///     .generate_with_seed(Difficulty::Medium, PuzzleSeed::from_phrase("doc"));
    /// let mut game = Game::new(puzzle);
    ///
    /// let empty_pos = Position::ALL
    ///     .into_iter()
    ///     .find(|&pos| game.cell(pos).is_empty())
    ///     .expect("puzzle has empty cells");
    ///
    /// game.set_value(empty_pos, Some(Digit::D5)).unwrap();
    /// assert_eq!(game.cell(empty_pos).as_digit(), Some(Digit::D5));
    ///
    /// game.set_value(empty_pos, None).unwrap();
    /// assert!(game.cell(empty_pos).is_empty());
    /// ```
    pub fn set_value(&mut self, pos: Position, value: Option<Digit>) -> Result<(), GameError> {
        let cell = &mut self.cells[pos.index()];
        if cell.is_given() {
            return Err(GameError::CannotModifyGivenCell);
        }
        *cell = match value {
            Some(digit) => CellState::Filled(digit),
            None => CellState::Empty,
        };
        Ok(())
    }

    /// Clears every player-filled cell, keeping givens and the solution.
    ///
    /// The error mask is recomputed; since only given cells remain and
    /// givens come from a valid solution, it comes back all clear.
    pub fn restart(&mut self) {
        for cell in &mut self.cells {
            if cell.is_filled() {
                *cell = CellState::Empty;
            }
        }
        self.revalidate();
    }

    /// Returns the current board as a plain digit grid, givens and player
    /// values combined.
    #[must_use]
    pub fn current_grid(&self) -> DigitGrid {
        let mut grid = DigitGrid::new();
        for pos in Position::ALL {
            grid.set(pos, self.cells[pos.index()].as_digit());
        }
        grid
    }

    /// Recomputes the error mask from scratch against the current board.
    ///
    /// A non-empty cell is flagged iff its digit occurs in another cell of
    /// its row, column, or subgrid. The solution plays no part here: a
    /// value that differs from the solution but conflicts with nothing
    /// visible shows no error.
    pub fn revalidate(&mut self) {
        let grid = self.current_grid();
        for pos in Position::ALL {
            self.errors[pos.index()] = match grid[pos] {
                Some(digit) => !placement_fits(&grid, pos, digit, PeerScan::ExcludeSelf),
                None => false,
            };
        }
    }

    /// Returns whether the cell at `pos` was flagged by the last
    /// [`Game::revalidate`].
    #[must_use]
    pub fn error_at(&self, pos: Position) -> bool {
        self.errors[pos.index()]
    }

    /// Returns the full error mask as a row-major 9×9 boolean grid, as of
    /// the last [`Game::revalidate`].
    #[must_use]
    pub fn error_mask(&self) -> [[bool; 9]; 9] {
        let mut mask = [[false; 9]; 9];
        for pos in Position::ALL {
            mask[usize::from(pos.row())][usize::from(pos.col())] = self.errors[pos.index()];
        }
        mask
    }

    /// Returns `true` if every cell of the 3×3 subgrid at
    /// (`subgrid_row`, `subgrid_col`) is non-empty and equals the solution.
    ///
    /// Internal consistency is not enough: a subgrid filled with rule-valid
    /// digits that diverge from the solution is not complete.
    ///
    /// # Panics
    ///
    /// Panics if `subgrid_row` or `subgrid_col` is not in the range 0-2.
    #[must_use]
    pub fn is_subgrid_complete(&self, subgrid_row: u8, subgrid_col: u8) -> bool {
        assert!(subgrid_row < 3 && subgrid_col < 3);
        let box_index = subgrid_row * 3 + subgrid_col;
        Position::ALL
            .into_iter()
            .filter(|pos| pos.box_index() == box_index)
            .all(|pos| {
                let digit = self.cells[pos.index()].as_digit();
                digit.is_some() && digit == self.solution[pos]
            })
    }

    /// Returns `true` if the board is completely full and matches the
    /// recorded solution cell-for-cell.
    ///
    /// A full board that diverges from the solution anywhere is not solved,
    /// even if it breaks no rule.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        Position::ALL
            .into_iter()
            .all(|pos| self.cells[pos.index()].as_digit() == self.solution[pos])
    }
}
