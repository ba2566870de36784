//! Towers: the playing pieces.
//!
//! Every tower belongs to a side and a color. Simple towers slide any
//! distance; a tower that wins a round in the standard ruleset is promoted
//! to a sumo tower, which has a shorter reach, scores more and can push.

use serde::{Deserialize, Serialize};

use super::color::CellColor;
use super::side::Side;

/// Tower variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TowerKind {
    /// Starting tower.
    Simple,
    /// Promoted once ("sumo one"). Can push an adjacent simple tower.
    SumoOne,
}

impl TowerKind {
    /// Maximum move distance. `0` means unlimited along a line.
    #[must_use]
    pub const fn max_range(self) -> usize {
        match self {
            TowerKind::Simple => 0,
            TowerKind::SumoOne => 5,
        }
    }

    /// Points scored when this tower wins a round.
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            TowerKind::Simple => 1,
            TowerKind::SumoOne => 3,
        }
    }

    /// Sumo teeth.
    #[must_use]
    pub const fn teeth(self) -> u8 {
        match self {
            TowerKind::Simple => 0,
            TowerKind::SumoOne => 1,
        }
    }
}

/// A tower.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tower {
    pub side: Side,
    pub color: CellColor,
    pub kind: TowerKind,
}

impl Tower {
    /// Create a simple tower.
    #[must_use]
    pub const fn simple(side: Side, color: CellColor) -> Self {
        Self {
            side,
            color,
            kind: TowerKind::Simple,
        }
    }

    /// Create a sumo-one tower.
    #[must_use]
    pub const fn sumo_one(side: Side, color: CellColor) -> Self {
        Self {
            side,
            color,
            kind: TowerKind::SumoOne,
        }
    }

    #[must_use]
    pub const fn max_range(&self) -> usize {
        self.kind.max_range()
    }

    #[must_use]
    pub const fn points(&self) -> u32 {
        self.kind.points()
    }

    #[must_use]
    pub const fn teeth(&self) -> u8 {
        self.kind.teeth()
    }

    /// Whether the tower has been promoted at least once.
    #[must_use]
    pub const fn is_promoted(&self) -> bool {
        self.teeth() > 0
    }

    /// Whether the tower can cover `distance` steps in one move.
    #[must_use]
    pub const fn can_reach(&self, distance: usize) -> bool {
        let range = self.max_range();
        range == 0 || distance <= range
    }

    /// The promoted form of this tower, keeping side and color.
    #[must_use]
    pub const fn promoted(&self) -> Self {
        Self::sumo_one(self.side, self.color)
    }
}

impl std::fmt::Display for Tower {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TowerKind::Simple => write!(f, "{} {}", self.side, self.color),
            TowerKind::SumoOne => write!(f, "{} {} sumo", self.side, self.color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_tower() {
        let t = Tower::simple(Side::Black, CellColor::Red);
        assert_eq!(t.max_range(), 0);
        assert_eq!(t.points(), 1);
        assert_eq!(t.teeth(), 0);
        assert!(!t.is_promoted());
        assert!(t.can_reach(7));
    }

    #[test]
    fn test_sumo_tower() {
        let t = Tower::simple(Side::White, CellColor::Green).promoted();
        assert_eq!(t.side, Side::White);
        assert_eq!(t.color, CellColor::Green);
        assert_eq!(t.teeth(), 1);
        assert_eq!(t.points(), 3);
        assert!(t.is_promoted());
        assert!(t.can_reach(5));
        assert!(!t.can_reach(6));
    }

    #[test]
    fn test_display() {
        let t = Tower::sumo_one(Side::Black, CellColor::Pink);
        assert_eq!(t.to_string(), "Black pink sumo");
    }
}
