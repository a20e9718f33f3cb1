//! Board coordinates.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::PositionError;

/// Lowest valid row/column.
pub const MIN_COORD: i8 = 1;
/// Highest valid row/column.
pub const MAX_COORD: i8 = 8;

/// A (row, column) coordinate, both 1-based; row 1 is White's back row.
///
/// `Position::new` does not check bounds, so off-board values can exist.
/// Move generation only ever yields on-board positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    row: i8,
    col: i8,
}

impl Position {
    /// Create a position without bounds checking
    #[inline]
    #[must_use]
    pub const fn new(row: i8, col: i8) -> Self {
        Position { row, col }
    }

    /// Create a position, rejecting rows or columns outside 1..=8
    pub fn try_new(row: i8, col: i8) -> Result<Self, PositionError> {
        if !(MIN_COORD..=MAX_COORD).contains(&row) {
            return Err(PositionError::RowOutOfBounds { row });
        }
        if !(MIN_COORD..=MAX_COORD).contains(&col) {
            return Err(PositionError::ColumnOutOfBounds { col });
        }
        Ok(Position { row, col })
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> i8 {
        self.row
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> i8 {
        self.col
    }

    #[inline]
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.row >= MIN_COORD
            && self.row <= MAX_COORD
            && self.col >= MIN_COORD
            && self.col <= MAX_COORD
    }

    /// The position `(dr, dc)` away, or `None` if that falls off the board
    #[inline]
    #[must_use]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let target = Position::new(self.row.checked_add(dr)?, self.col.checked_add(dc)?);
        target.is_on_board().then_some(target)
    }

    /// Zero-based `(row, col)` array indices, or `None` when off-board
    #[inline]
    pub(crate) fn indices(self) -> Option<(usize, usize)> {
        if self.is_on_board() {
            Some(((self.row - MIN_COORD) as usize, (self.col - MIN_COORD) as usize))
        } else {
            None
        }
    }

    /// All 64 on-board positions, row-major from (1,1) to (8,8)
    pub fn all() -> impl Iterator<Item = Position> {
        (MIN_COORD..=MAX_COORD)
            .flat_map(|row| (MIN_COORD..=MAX_COORD).map(move |col| Position::new(row, col)))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl TryFrom<(i8, i8)> for Position {
    type Error = PositionError;

    fn try_from((row, col): (i8, i8)) -> Result<Self, Self::Error> {
        Position::try_new(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchecked_constructor_allows_off_board() {
        let pos = Position::new(0, 9);
        assert!(!pos.is_on_board());
        assert_eq!(pos.indices(), None);
    }

    #[test]
    fn test_try_new_bounds() {
        assert!(Position::try_new(1, 1).is_ok());
        assert!(Position::try_new(8, 8).is_ok());
        assert_eq!(
            Position::try_new(9, 1),
            Err(PositionError::RowOutOfBounds { row: 9 })
        );
        assert_eq!(
            Position::try_new(4, 0),
            Err(PositionError::ColumnOutOfBounds { col: 0 })
        );
    }

    #[test]
    fn test_offset_discards_off_board() {
        let corner = Position::new(1, 1);
        assert_eq!(corner.offset(1, 1), Some(Position::new(2, 2)));
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(Position::new(8, 8).offset(1, 0), None);
    }

    #[test]
    fn test_all_positions() {
        let all: Vec<Position> = Position::all().collect();
        assert_eq!(all.len(), 64);
        assert_eq!(all[0], Position::new(1, 1));
        assert_eq!(all[8], Position::new(2, 1));
        assert_eq!(all[63], Position::new(8, 8));
        assert!(all.iter().all(|p| p.is_on_board()));
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(2, 5).to_string(), "(2,5)");
    }
}
