//! Board coordinates and the geometric relation between two cells.

use serde::{Deserialize, Serialize};

use super::BOARD_SIZE;

/// A `(row, col)` position. Row 0 is White's home row.
///
/// Coordinates are not validated on construction; the board rejects
/// off-board positions with `RefereeError::InvalidCoordinates`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether both axes are within `0..8`.
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// The coordinate `(row + dr, col + dc)` if it lies on the board.
    #[must_use]
    pub fn offset(self, dr: isize, dc: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        let next = Self::new(row, col);
        next.is_on_board().then_some(next)
    }

    /// One step in `direction`, if it stays on the board.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dr, dc) = direction.delta();
        self.offset(dr, dc)
    }

    /// Iterate over every on-board coordinate, row by row.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord::new(row, col)))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Line direction between two cells. North is toward row 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    /// `(row, col)` delta of one step.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
            Direction::NorthEast => (-1, 1),
            Direction::NorthWest => (-1, -1),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (1, -1),
        }
    }

    /// Direction of the straight line from `from` to `to`.
    ///
    /// `None` when the cells coincide or are not on a common row, column
    /// or diagonal.
    #[must_use]
    pub fn between(from: Coord, to: Coord) -> Option<Self> {
        let dr = to.row as isize - from.row as isize;
        let dc = to.col as isize - from.col as isize;

        if dr == 0 && dc == 0 {
            return None;
        }
        if dr != 0 && dc != 0 && dr.abs() != dc.abs() {
            return None;
        }

        let direction = match (dr.signum(), dc.signum()) {
            (-1, 0) => Direction::North,
            (1, 0) => Direction::South,
            (0, 1) => Direction::East,
            (0, -1) => Direction::West,
            (-1, 1) => Direction::NorthEast,
            (-1, -1) => Direction::NorthWest,
            (1, 1) => Direction::SouthEast,
            _ => Direction::SouthWest,
        };
        Some(direction)
    }
}

/// Number of steps between two cells on a common line (Chebyshev distance).
#[must_use]
pub fn distance(from: Coord, to: Coord) -> usize {
    from.row.abs_diff(to.row).max(from.col.abs_diff(to.col))
}
