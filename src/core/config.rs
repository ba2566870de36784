//! Referee configuration.
//!
//! Games are created from a `RefereeConfig`. The defaults give a standard
//! three-point Kamisado match.

use serde::{Deserialize, Serialize};

use super::side::Side;

/// Referee configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefereeConfig {
    /// Side that moves first in round 1.
    pub first_side: Side,

    /// Cumulative score that wins a standard match.
    pub points_to_win: u32,

    /// Maximum number of promoted towers per side.
    pub max_promotions: usize,
}

impl Default for RefereeConfig {
    fn default() -> Self {
        Self {
            first_side: Side::Black,
            points_to_win: 3,
            max_promotions: 3,
        }
    }
}

impl RefereeConfig {
    /// Set the side that opens round 1.
    #[must_use]
    pub fn with_first_side(mut self, side: Side) -> Self {
        self.first_side = side;
        self
    }

    /// Set the match target score.
    #[must_use]
    pub fn with_points_to_win(mut self, points: u32) -> Self {
        assert!(points > 0, "A match needs a positive target score");
        self.points_to_win = points;
        self
    }

    /// Set the promotion cap per side.
    #[must_use]
    pub fn with_max_promotions(mut self, max: usize) -> Self {
        self.max_promotions = max;
        self
    }
}
