//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! The two players. Black moves first, starts on row 7 and advances toward
//! row 0; White starts on row 0 and advances toward row 7.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexable by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::coord::Direction;
use super::BOARD_SIZE;

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// First to move. Home row 7.
    Black,
    /// Second to move. Home row 0.
    White,
}

impl Side {
    /// Both sides, in turn order.
    pub const ALL: [Side; 2] = [Side::Black, Side::White];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// Storage slot for this side.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Black => 0,
            Side::White => 1,
        }
    }

    /// Row where this side's towers are placed at round start.
    #[must_use]
    pub const fn home_row(self) -> usize {
        match self {
            Side::Black => BOARD_SIZE - 1,
            Side::White => 0,
        }
    }

    /// Row this side must reach to win a round (the opponent's home row).
    #[must_use]
    pub const fn goal_row(self) -> usize {
        self.opponent().home_row()
    }

    /// Row delta of one forward step.
    #[must_use]
    pub const fn forward(self) -> isize {
        match self {
            Side::Black => -1,
            Side::White => 1,
        }
    }

    /// Straight, forward-left and forward-right directions for this side.
    #[must_use]
    pub const fn forward_directions(self) -> [Direction; 3] {
        match self {
            Side::Black => [Direction::North, Direction::NorthWest, Direction::NorthEast],
            Side::White => [Direction::South, Direction::SouthWest, Direction::SouthEast],
        }
    }

    /// Single-letter tag used in logs and board dumps.
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Side::Black => 'B',
            Side::White => 'W',
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Black => write!(f, "Black"),
            Side::White => write!(f, "White"),
        }
    }
}

/// Per-side data storage.
///
/// ## Example
///
/// ```
/// use kamisado::core::{Side, SideMap};
///
/// let mut score: SideMap<u32> = SideMap::with_value(0);
/// score[Side::White] += 1;
///
/// assert_eq!(score[Side::Black], 0);
/// assert_eq!(score[Side::White], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a new SideMap with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Black), factory(Side::White)],
        }
    }

    /// Create a new SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Side, &mut T) pairs in turn order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Side, &mut T)> {
        Side::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_basics() {
        assert_eq!(Side::Black.opponent(), Side::White);
        assert_eq!(Side::White.opponent(), Side::Black);
        assert_eq!(format!("{}", Side::Black), "Black");
        assert_eq!(Side::White.to_char(), 'W');
    }

    #[test]
    fn test_side_rows() {
        assert_eq!(Side::Black.home_row(), 7);
        assert_eq!(Side::Black.goal_row(), 0);
        assert_eq!(Side::White.home_row(), 0);
        assert_eq!(Side::White.goal_row(), 7);
        assert_eq!(Side::Black.forward(), -1);
        assert_eq!(Side::White.forward(), 1);
    }

    #[test]
    fn test_forward_directions_are_disjoint() {
        let black = Side::Black.forward_directions();
        let white = Side::White.forward_directions();
        assert!(black.iter().all(|d| !white.contains(d)));
    }

    #[test]
    fn test_side_map_new() {
        let map = SideMap::new(|s| s.index() * 10);
        assert_eq!(map[Side::Black], 0);
        assert_eq!(map[Side::White], 10);
    }

    #[test]
    fn test_side_map_mutation_and_iter() {
        let mut map: SideMap<Option<u8>> = SideMap::default();
        map[Side::White] = Some(3);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Side::Black, &None), (Side::White, &Some(3))]);

        for (_, v) in map.iter_mut() {
            *v = None;
        }
        assert_eq!(map, SideMap::default());
    }

    #[test]
    fn test_side_map_serialization() {
        let map = SideMap::new(|s| s.index() as u32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: SideMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
