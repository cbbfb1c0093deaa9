//! Game session management for the numplace engine.
//!
//! This crate holds one live puzzle session: the [`Game`] type owns the
//! board, the fixed-cell structure, the solution snapshot, and the error
//! mask, while [`MoveLog`] gives the caller a last-in-first-out undo record.
//! The presentation layer drives both and renders what they report.
//!
//! # Examples
//!
//! A complete edit/undo round-trip:
//!
//! ```
//! use numplace_core::{Digit, Position};
//! use numplace_game::{Game, Move, MoveLog};
//! use numplace_generator::{BoardGenerator, Difficulty, PuzzleSeed};
//!
//! let puzzle = BoardGenerator::new()
//!     .generate_with_seed(Difficulty::Easy, PuzzleSeed::from_phrase("docs"));
//! let mut game = Game::new(puzzle);
//! let mut log = MoveLog::new();
//!
//! let pos = Position::ALL
//!     .into_iter()
//!     .find(|&pos| game.cell(pos).is_empty())
//!     .expect("puzzle has empty cells");
//!
//! // Commit a value and record it.
//! let old_value = game.cell(pos).as_digit();
//! game.set_value(pos, Some(Digit::D5)).unwrap();
//! game.revalidate();
//! log.record(Move {
//!     pos,
//!     old_value,
//!     new_value: Some(Digit::D5),
//! });
//!
//! // Undo restores the old value without re-recording.
//! let undone = log.undo().expect("one move recorded");
//! game.set_value(undone.pos, undone.old_value).unwrap();
//! game.revalidate();
//! assert!(game.cell(pos).is_empty());
//! ```

pub mod cell_state;
pub mod error;
pub mod game;
pub mod move_log;

pub use self::{
    cell_state::CellState,
    error::GameError,
    game::Game,
    move_log::{Move, MoveLog},
};
