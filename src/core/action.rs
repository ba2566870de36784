//! Actions a side can take, and the record kept for each applied one.
//!
//! - `Move`: slide a tower forward along a line
//! - `Pass`: a blocked side gives up its turn
//! - `Push`: a sumo tower shoves the opposing tower in front of it

use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::side::Side;

/// A game action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move the tower at `from` to `to`.
    Move { from: Coord, to: Coord },
    /// Blocked side passes.
    Pass,
    /// Sumo push by the tower at `origin`.
    Push { origin: Coord },
}

impl Action {
    /// Shorthand for `Action::Move`.
    #[must_use]
    pub const fn moving(from: Coord, to: Coord) -> Self {
        Action::Move { from, to }
    }

    /// Cell the acting tower starts from, if any.
    #[must_use]
    pub const fn origin(&self) -> Option<Coord> {
        match self {
            Action::Move { from, .. } => Some(*from),
            Action::Push { origin } => Some(*origin),
            Action::Pass => None,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Move { from, to } => write!(f, "{from} -> {to}"),
            Action::Pass => write!(f, "pass"),
            Action::Push { origin } => write!(f, "push from {origin}"),
        }
    }
}

/// An applied action with the context it was applied in.
///
/// Used for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The side that acted.
    pub side: Side,

    /// The action taken.
    pub action: Action,

    /// Round the action belongs to (starts at 1).
    pub round: u32,

    /// Ply number within the round, before the action was applied.
    pub ply: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(side: Side, action: Action, round: u32, ply: u32) -> Self {
        Self {
            side,
            action,
            round,
            ply,
        }
    }
}
