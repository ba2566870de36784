//! Ruleset trait for game variants.
//!
//! Variants implement `RulesEngine` to define:
//! - When a round ends and who wins it
//! - When the match ends and who wins it
//! - Whether the sumo push exists
//!
//! Move legality, blocking and deadlock are shared and live in `Referee`.

use serde::{Deserialize, Serialize};

use crate::core::{CellColor, Coord, Result, Side};
use crate::rules::referee::Referee;

/// How a round was won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinReason {
    /// A tower reached the opponent's home row.
    EdgeReached,
    /// Neither side could move; the side to move wins.
    MutualDeadlock,
}

/// Result of a finished round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// Round winner.
    pub winner: Side,

    /// How the round was won.
    pub reason: WinReason,

    /// Color of the winning tower, if it is known.
    pub tower: Option<CellColor>,

    /// Points awarded to the winner.
    pub points: u32,
}

impl RoundOutcome {
    /// The side that lost the round.
    #[must_use]
    pub fn loser(&self) -> Side {
        self.winner.opponent()
    }
}

/// Ruleset trait.
///
/// ## Implementation Notes
///
/// - `round_winner` / `match_winner` are queries and must not change state
/// - `is_round_over` may settle the round (scoring, promotion, reset)
/// - Operations a ruleset lacks return `RefereeError::UnsupportedOperation`
pub trait RulesEngine {
    /// Short ruleset name for logs and errors.
    fn name(&self) -> &'static str;

    /// Winner of the current round, if it is decided.
    fn round_winner(&self, referee: &Referee) -> Option<Side>;

    /// Whether the current round is over. May settle the round.
    fn is_round_over(&mut self, referee: &mut Referee) -> Result<bool>;

    /// Winner of the match, if it is decided.
    fn match_winner(&self, referee: &Referee) -> Option<Side>;

    /// Whether the match is over.
    fn is_game_over(&self, referee: &Referee) -> bool {
        self.match_winner(referee).is_some()
    }

    /// Whether the side to move may push with the tower at `origin`.
    fn is_push_legal(&self, referee: &Referee, origin: Coord) -> Result<bool>;

    /// Push with the tower at `origin`. `Ok(false)` if illegal.
    fn push(&mut self, referee: &mut Referee, origin: Coord) -> Result<bool>;

    /// Start the next round.
    fn reset_round(&mut self, referee: &mut Referee) -> Result<()>;
}
