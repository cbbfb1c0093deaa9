//! Core data structures for the numplace engine.
//!
//! This crate provides the fundamental types shared by puzzle generation and
//! game management: type-safe digits, board positions, houses, the 9×9 grid
//! container, and the one-rule constraint checker.
//!
//! # Overview
//!
//! - [`digit`]: type-safe representation of digits 1-9; empty cells are
//!   `Option::<Digit>::None` throughout the engine
//! - [`position`]: `(row, col)` board coordinates with linear and box
//!   indexing
//! - [`house`]: rows, columns, and 3×3 boxes as first-class values
//! - [`grid`]: the [`DigitGrid`] container with an 81-character text format
//! - [`rules`]: pure placement and whole-grid validity checks
//!
//! # Examples
//!
//! ```
//! use numplace_core::{Digit, DigitGrid, PeerScan, Position, placement_fits};
//!
//! let mut grid = DigitGrid::new();
//! grid.set(Position::new(0, 0), Some(Digit::D5));
//!
//! // 5 can no longer go anywhere else in row 0, column 0, or the top-left box
//! assert!(!placement_fits(
//!     &grid,
//!     Position::new(0, 4),
//!     Digit::D5,
//!     PeerScan::IncludeSelf,
//! ));
//! ```

pub mod digit;
pub mod grid;
pub mod house;
pub mod position;
pub mod rules;

pub use self::{
    digit::{Digit, InvalidDigit},
    grid::{DigitGrid, ParseGridError},
    house::House,
    position::Position,
    rules::{PeerScan, grid_obeys_rules, house_has_duplicates, placement_fits},
};
