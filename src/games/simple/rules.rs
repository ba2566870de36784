//! Simple ruleset implementation.

use crate::core::{Coord, RefereeError, Result, Side};
use crate::rules::{Referee, RulesEngine};

/// Single-round Kamisado. The first edge reach or mutual deadlock ends
/// the match; there is no scoring, promotion or push.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimpleRules;

impl SimpleRules {
    pub const NAME: &'static str = "simple";
}

impl RulesEngine for SimpleRules {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn round_winner(&self, referee: &Referee) -> Option<Side> {
        self.match_winner(referee)
    }

    fn is_round_over(&mut self, referee: &mut Referee) -> Result<bool> {
        Ok(self.is_game_over(referee))
    }

    fn match_winner(&self, referee: &Referee) -> Option<Side> {
        if referee.ply() < 2 {
            return None;
        }
        if referee.reaches_opponent_edge(Side::White) {
            Some(Side::White)
        } else if referee.reaches_opponent_edge(Side::Black) {
            Some(Side::Black)
        } else if referee.is_mutual_deadlock() {
            referee.turn()
        } else {
            None
        }
    }

    fn is_push_legal(&self, referee: &Referee, origin: Coord) -> Result<bool> {
        referee.board().cell(origin)?;
        Ok(false)
    }

    fn push(&mut self, _referee: &mut Referee, _origin: Coord) -> Result<bool> {
        Err(RefereeError::unsupported("push", Self::NAME))
    }

    fn reset_round(&mut self, _referee: &mut Referee) -> Result<()> {
        Err(RefereeError::unsupported("reset_round", Self::NAME))
    }
}
