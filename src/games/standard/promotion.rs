//! Tower promotion after a round win.

use log::{debug, info};

use super::rules::StandardRules;
use crate::core::{CellColor, Side};
use crate::rules::Referee;

impl StandardRules {
    /// Promote `side`'s tower of `color` to a sumo.
    ///
    /// Only the roster changes; the board picks it up at the next
    /// `reset_round`. Returns false if the side already holds
    /// `max_promotions` sumos or the tower is already one.
    pub fn promote(&self, referee: &mut Referee, side: Side, color: CellColor) -> bool {
        let cap = referee.config().max_promotions;
        let roster = referee.state_mut().roster_mut(side);
        if roster.promoted_count() >= cap {
            debug!("{side} already holds {cap} sumo towers, {color} stays simple");
            return false;
        }
        let promoted = roster.promote(color);
        if promoted {
            info!("{side} {color} tower promoted to sumo");
        }
        promoted
    }
}
