//! Houses: rows, columns, and 3×3 boxes.

use crate::Position;

/// A house (row, column, or 3×3 box) on the board.
///
/// Every cell belongs to exactly one house of each kind, and the one-rule of
/// the game is per-house: no digit may occur twice within a house.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its row coordinate (0-8).
    Row {
        /// Row index (0-8).
        row: u8,
    },
    /// A column identified by its column coordinate (0-8).
    Column {
        /// Column index (0-8).
        col: u8,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl House {
    /// Array containing all rows (0-8).
    pub const ROWS: [Self; 9] = {
        let mut rows = [Self::Row { row: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            rows[i] = Self::Row { row: i as u8 };
            i += 1;
        }
        rows
    };

    /// Array containing all columns (0-8).
    pub const COLUMNS: [Self; 9] = {
        let mut columns = [Self::Column { col: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            columns[i] = Self::Column { col: i as u8 };
            i += 1;
        }
        columns
    };

    /// Array containing all boxes (0-8).
    pub const BOXES: [Self; 9] = {
        let mut boxes = [Self::Box { index: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            boxes[i] = Self::Box { index: i as u8 };
            i += 1;
        }
        boxes
    };

    /// Array containing all 27 houses in row, column, box order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { row: 0 }; 27];
        let mut i = 0;
        while i < 9 {
            all[i] = Self::ROWS[i];
            all[i + 9] = Self::COLUMNS[i];
            all[i + 18] = Self::BOXES[i];
            i += 1;
        }
        all
    };

    /// Returns the three houses containing `pos`: its row, its column, and
    /// its box, in that order.
    #[must_use]
    pub const fn of(pos: Position) -> [Self; 3] {
        [
            Self::Row { row: pos.row() },
            Self::Column { col: pos.col() },
            Self::Box {
                index: pos.box_index(),
            },
        ]
    }

    /// Converts a cell index within the house (0-8) into an absolute
    /// [`Position`].
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    pub const fn position_at(self, i: u8) -> Position {
        assert!(i < 9);
        match self {
            House::Row { row } => Position::new(row, i),
            House::Column { col } => Position::new(i, col),
            House::Box { index } => Position::from_box(index, i),
        }
    }

    /// Returns all nine positions contained in this house.
    #[must_use]
    pub const fn positions(self) -> [Position; 9] {
        let mut positions = [Position::new(0, 0); 9];
        let mut i = 0;
        while i < 9 {
            positions[i as usize] = self.position_at(i);
            i += 1;
        }
        positions
    }
}
