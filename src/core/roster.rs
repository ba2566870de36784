//! The eight towers a side places at the start of each round.

use serde::{Deserialize, Serialize};

use super::color::CellColor;
use super::side::Side;
use super::tower::Tower;
use super::BOARD_SIZE;

/// A side's towers in placement order: `towers[c]` goes to column `c` of
/// the side's home row.
///
/// Holds exactly one tower per color. Promotion replaces a tower in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    side: Side,
    towers: [Tower; BOARD_SIZE],
}

impl Roster {
    /// Simple towers matching the colors of the side's home row.
    #[must_use]
    pub fn new(side: Side) -> Self {
        let row = side.home_row();
        let towers = std::array::from_fn(|col| Tower::simple(side, CellColor::at(row, col)));
        Self { side, towers }
    }

    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Towers in placement order.
    #[must_use]
    pub fn towers(&self) -> &[Tower; BOARD_SIZE] {
        &self.towers
    }

    /// The tower of the given color.
    #[must_use]
    pub fn get(&self, color: CellColor) -> Option<&Tower> {
        self.towers.iter().find(|t| t.color == color)
    }

    /// Number of promoted towers.
    #[must_use]
    pub fn promoted_count(&self) -> usize {
        self.towers.iter().filter(|t| t.is_promoted()).count()
    }

    /// Replace the tower of `color` by its promoted form.
    ///
    /// Returns false if no simple tower of that color exists.
    pub fn promote(&mut self, color: CellColor) -> bool {
        match self.towers.iter_mut().find(|t| t.color == color) {
            Some(tower) if !tower.is_promoted() => {
                *tower = tower.promoted();
                true
            }
            _ => false,
        }
    }
}
