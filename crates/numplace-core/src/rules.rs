//! The one-rule constraint checker.
//!
//! Validity here means "no duplicate digit within a row, column, or 3×3
//! box". Checks are pure functions of a grid snapshot; nothing in this
//! module mutates or retains the grid it is handed.

use crate::{Digit, DigitGrid, House, Position};

/// Whether a placement scan considers the target cell itself.
///
/// During generation the candidate digit has not been written yet, so the
/// target cell is scanned like any other ([`PeerScan::IncludeSelf`]). When
/// validating a value that is already in the grid, the cell would always
/// collide with itself, so it must be skipped ([`PeerScan::ExcludeSelf`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeerScan {
    /// Scan every cell of the row, column, and box, the target included.
    IncludeSelf,
    /// Skip the target cell; its prior occupancy does not count.
    ExcludeSelf,
}

/// Returns `true` if placing `digit` at `pos` would not duplicate it within
/// the position's row, column, or 3×3 box.
///
/// The scan runs over the grid as-is and has no side effects. With
/// [`PeerScan::ExcludeSelf`] the cell at `pos` itself is skipped, which is
/// required when `digit` is already written there.
///
/// # Examples
///
/// ```
/// use numplace_core::{Digit, DigitGrid, PeerScan, Position, placement_fits};
///
/// let mut grid = DigitGrid::new();
/// grid.set(Position::new(0, 0), Some(Digit::D5));
///
/// // 5 is taken in row 0
/// assert!(!placement_fits(
///     &grid,
///     Position::new(0, 8),
///     Digit::D5,
///     PeerScan::IncludeSelf,
/// ));
/// // but fits in another row outside the box
/// assert!(placement_fits(
///     &grid,
///     Position::new(5, 8),
///     Digit::D5,
///     PeerScan::IncludeSelf,
/// ));
/// ```
#[must_use]
pub fn placement_fits(grid: &DigitGrid, pos: Position, digit: Digit, scan: PeerScan) -> bool {
    for house in House::of(pos) {
        for peer in house.positions() {
            if scan == PeerScan::ExcludeSelf && peer == pos {
                continue;
            }
            if grid[peer] == Some(digit) {
                return false;
            }
        }
    }
    true
}

/// Returns `true` if `house` contains the same digit more than once.
/// Empty cells are ignored.
#[must_use]
pub fn house_has_duplicates(grid: &DigitGrid, house: House) -> bool {
    let mut seen = [false; 9];
    for pos in house.positions() {
        if let Some(digit) = grid[pos] {
            let slot = &mut seen[usize::from(digit.value() - 1)];
            if *slot {
                return true;
            }
            *slot = true;
        }
    }
    false
}

/// Returns `true` if no row, column, or box of `grid` contains a duplicate
/// digit. Empty cells are ignored, so a partially filled grid can be valid.
#[must_use]
pub fn grid_obeys_rules(grid: &DigitGrid) -> bool {
    House::ALL
        .into_iter()
        .all(|house| !house_has_duplicates(grid, house))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(placements: &[(Position, Digit)]) -> DigitGrid {
        let mut grid = DigitGrid::new();
        for &(pos, digit) in placements {
            grid.set(pos, Some(digit));
        }
        grid
    }

    #[test]
    fn test_row_column_and_box_conflicts() {
        let grid = grid_with(&[(Position::new(4, 4), Digit::D7)]);

        // same row
        assert!(!placement_fits(
            &grid,
            Position::new(4, 0),
            Digit::D7,
            PeerScan::IncludeSelf
        ));
        // same column
        assert!(!placement_fits(
            &grid,
            Position::new(0, 4),
            Digit::D7,
            PeerScan::IncludeSelf
        ));
        // same box
        assert!(!placement_fits(
            &grid,
            Position::new(3, 3),
            Digit::D7,
            PeerScan::IncludeSelf
        ));
        // unrelated cell
        assert!(placement_fits(
            &grid,
            Position::new(0, 0),
            Digit::D7,
            PeerScan::IncludeSelf
        ));
        // different digit anywhere
        assert!(placement_fits(
            &grid,
            Position::new(4, 0),
            Digit::D3,
            PeerScan::IncludeSelf
        ));
    }

    #[test]
    fn test_exclude_self_skips_own_cell() {
        let pos = Position::new(2, 5);
        let grid = grid_with(&[(pos, Digit::D9)]);

        // The written value collides with itself when the scan includes it,
        // and fits when its own cell is skipped.
        assert!(!placement_fits(&grid, pos, Digit::D9, PeerScan::IncludeSelf));
        assert!(placement_fits(&grid, pos, Digit::D9, PeerScan::ExcludeSelf));
    }

    #[test]
    fn test_exclude_self_still_sees_real_conflicts() {
        let pos = Position::new(2, 5);
        let grid = grid_with(&[(pos, Digit::D9), (Position::new(2, 0), Digit::D9)]);

        assert!(!placement_fits(&grid, pos, Digit::D9, PeerScan::ExcludeSelf));
    }

    #[test]
    fn test_house_duplicates() {
        let grid = grid_with(&[
            (Position::new(0, 1), Digit::D4),
            (Position::new(0, 7), Digit::D4),
        ]);

        assert!(house_has_duplicates(&grid, House::Row { row: 0 }));
        assert!(!house_has_duplicates(&grid, House::Row { row: 1 }));
        assert!(!house_has_duplicates(&grid, House::Column { col: 1 }));
        assert!(!grid_obeys_rules(&grid));
    }

    #[test]
    fn test_valid_solved_grid_obeys_rules() {
        let grid: DigitGrid =
            "123456789456789123789123456234567891567891234891234567345678912678912345912345678"
                .parse()
                .expect("valid grid text");
        assert!(grid_obeys_rules(&grid));
    }

    #[test]
    fn test_empty_grid_obeys_rules() {
        assert!(grid_obeys_rules(&DigitGrid::new()));
    }
}
