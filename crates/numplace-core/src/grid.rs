//! The 9×9 digit grid container.

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use crate::{Digit, Position};

/// A 9×9 grid of cells, each holding a [`Digit`] or nothing.
///
/// This is the passive container shared by generation, validation, and the
/// game session: it stores values and answers indexing queries, nothing more.
/// `None` is an empty cell.
///
/// The text format used by [`FromStr`] and [`Display`] is 81 characters in
/// row-major order, `1`-`9` for filled cells and `.` for empty ones (`0` is
/// also accepted as empty on input).
///
/// # Examples
///
/// ```
/// use numplace_core::{Digit, DigitGrid, Position};
///
/// let mut grid = DigitGrid::new();
/// assert!(!grid.is_full());
///
/// let pos = Position::new(4, 4);
/// grid.set(pos, Some(Digit::D5));
/// assert_eq!(grid[pos], Some(Digit::D5));
/// assert_eq!(grid.filled_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

/// Error returned when parsing a [`DigitGrid`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The input did not contain exactly 81 cell characters.
    #[display("expected 81 cells, got {len}")]
    WrongLength {
        /// Number of cell characters found.
        len: usize,
    },
    /// The input contained a character that is not a digit or `.`.
    #[display("invalid cell character: {character:?}")]
    InvalidCharacter {
        /// The rejected character.
        character: char,
    },
}

impl DigitGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the value at `pos`, or `None` if the cell is empty.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Sets the value at `pos`; `None` clears the cell.
    pub const fn set(&mut self, pos: Position, value: Option<Digit>) {
        self.cells[pos.index()] = value;
    }

    /// Returns `true` if no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the number of non-empty cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        81 - self.filled_count()
    }
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.index()]
    }
}

impl FromStr for DigitGrid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut len = 0;
        for character in s.chars() {
            let value = match character {
                '1'..='9' => {
                    let value = u8::try_from(character).expect("ascii digit fits in u8") - b'0';
                    Some(Digit::from_value(value))
                }
                '.' | '0' => None,
                _ => return Err(ParseGridError::InvalidCharacter { character }),
            };
            if len < 81 {
                grid.set(Position::from_index(len), value);
            }
            len += 1;
        }
        if len != 81 {
            return Err(ParseGridError::WrongLength { len });
        }
        Ok(grid)
    }
}

impl Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => Display::fmt(digit, f)?,
                None => f.write_str(".")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED: &str =
        "123456789456789123789123456234567891567891234891234567345678912678912345912345678";

    #[test]
    fn test_set_get_round_trip() {
        let mut grid = DigitGrid::new();
        let pos = Position::new(2, 7);

        assert_eq!(grid.get(pos), None);
        grid.set(pos, Some(Digit::D3));
        assert_eq!(grid.get(pos), Some(Digit::D3));
        assert_eq!(grid[pos], Some(Digit::D3));
        grid.set(pos, None);
        assert_eq!(grid.get(pos), None);
    }

    #[test]
    fn test_text_round_trip() {
        let grid: DigitGrid = SOLVED.parse().expect("valid grid text");
        assert!(grid.is_full());
        assert_eq!(grid.to_string(), SOLVED);

        let sparse = format!("1.3{}", ".".repeat(78));
        let grid: DigitGrid = sparse.parse().expect("valid grid text");
        assert_eq!(grid[Position::new(0, 0)], Some(Digit::D1));
        assert_eq!(grid[Position::new(0, 1)], None);
        assert_eq!(grid[Position::new(0, 2)], Some(Digit::D3));
        assert_eq!(grid.filled_count(), 2);
        assert_eq!(grid.to_string(), sparse);
    }

    #[test]
    fn test_zero_parses_as_empty() {
        let text = format!("102{}", "0".repeat(78));
        let grid: DigitGrid = text.parse().expect("valid grid text");
        assert_eq!(grid.filled_count(), 2);
        assert_eq!(grid[Position::new(0, 1)], None);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "123".parse::<DigitGrid>(),
            Err(ParseGridError::WrongLength { len: 3 })
        );
        assert_eq!(
            format!("{SOLVED}1").parse::<DigitGrid>(),
            Err(ParseGridError::WrongLength { len: 82 })
        );
        let text = format!("x{}", ".".repeat(80));
        assert_eq!(
            text.parse::<DigitGrid>(),
            Err(ParseGridError::InvalidCharacter { character: 'x' })
        );
    }

    #[test]
    fn test_counts() {
        let mut grid = DigitGrid::new();
        assert_eq!(grid.filled_count(), 0);
        assert_eq!(grid.empty_count(), 81);

        for pos in Position::ALL.into_iter().take(5) {
            grid.set(pos, Some(Digit::D9));
        }
        assert_eq!(grid.filled_count(), 5);
        assert_eq!(grid.empty_count(), 76);
    }
}
