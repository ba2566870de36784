//! Explicit starting positions.
//!
//! A `Setup` describes a position to load instead of the standard opening:
//! which towers stand where, the color memory of both sides, whose turn it
//! is, and the ply/round counters.
//!
//! ```
//! use kamisado::core::{CellColor, Coord, Setup, Side, Tower};
//!
//! let setup = Setup::new(Side::Black)
//!     .tower(Tower::simple(Side::Black, CellColor::Pink), Coord::new(1, 3))
//!     .tower(Tower::simple(Side::White, CellColor::Red), Coord::new(0, 0))
//!     .last_color(Side::White, CellColor::Pink)
//!     .ply(6);
//!
//! assert_eq!(setup.towers().len(), 2);
//! ```

use serde::{Deserialize, Serialize};

use super::color::CellColor;
use super::coord::Coord;
use super::side::{Side, SideMap};
use super::tower::Tower;

/// A position to load into a referee.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setup {
    towers: Vec<(Tower, Coord)>,
    last_colors: SideMap<Option<CellColor>>,
    last_moved: SideMap<Option<CellColor>>,
    turn: Side,
    ply: u32,
    round: u32,
}

impl Setup {
    /// Empty board, `turn` to move, ply 0 of round 1, no color memory.
    #[must_use]
    pub fn new(turn: Side) -> Self {
        Self {
            towers: Vec::new(),
            last_colors: SideMap::default(),
            last_moved: SideMap::default(),
            turn,
            ply: 0,
            round: 1,
        }
    }

    /// Add a tower.
    #[must_use]
    pub fn tower(mut self, tower: Tower, coord: Coord) -> Self {
        self.towers.push((tower, coord));
        self
    }

    /// Set the color of the cell `side` last moved onto.
    #[must_use]
    pub fn last_color(mut self, side: Side, color: CellColor) -> Self {
        self.last_colors[side] = Some(color);
        self
    }

    /// Set the color of the tower `side` moved last.
    #[must_use]
    pub fn last_moved(mut self, side: Side, color: CellColor) -> Self {
        self.last_moved[side] = Some(color);
        self
    }

    /// Set the ply counter.
    #[must_use]
    pub fn ply(mut self, ply: u32) -> Self {
        self.ply = ply;
        self
    }

    /// Set the round counter.
    #[must_use]
    pub fn round(mut self, round: u32) -> Self {
        assert!(round > 0, "Rounds are numbered from 1");
        self.round = round;
        self
    }

    #[must_use]
    pub fn towers(&self) -> &[(Tower, Coord)] {
        &self.towers
    }

    #[must_use]
    pub fn last_colors(&self) -> &SideMap<Option<CellColor>> {
        &self.last_colors
    }

    #[must_use]
    pub fn last_moved_towers(&self) -> &SideMap<Option<CellColor>> {
        &self.last_moved
    }

    #[must_use]
    pub fn turn(&self) -> Side {
        self.turn
    }

    #[must_use]
    pub fn ply_count(&self) -> u32 {
        self.ply
    }

    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round
    }
}
