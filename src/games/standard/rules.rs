//! Standard ruleset implementation.

use log::info;

use crate::core::{Coord, Result, Side};
use crate::rules::{Referee, RoundOutcome, RulesEngine, WinReason};

/// Multi-round Kamisado with scoring, promotion and the sumo push.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StandardRules;

impl StandardRules {
    pub const NAME: &'static str = "standard";

    /// Outcome of the current round, if it is decided. Changes nothing.
    ///
    /// Edge reach is checked before deadlock. An edge win scores the
    /// invading tower; a deadlock win scores the winner's last moved
    /// tower, or nothing if no tower has moved this round.
    #[must_use]
    pub fn round_outcome(&self, referee: &Referee) -> Option<RoundOutcome> {
        if referee.ply() < 2 {
            return None;
        }
        let board = referee.board();

        for side in [Side::White, Side::Black] {
            if let Some((_, tower)) = board.tower_on_row(side, side.goal_row()) {
                return Some(RoundOutcome {
                    winner: side,
                    reason: WinReason::EdgeReached,
                    tower: Some(tower.color),
                    points: tower.points(),
                });
            }
        }

        if !referee.is_mutual_deadlock() {
            return None;
        }
        let winner = referee.turn()?;
        let tower = referee.state().last_moved(winner);
        let points = tower
            .and_then(|color| board.find_tower(winner, color))
            .and_then(|coord| board.tower_at(coord).ok().flatten())
            .map_or(0, |t| t.points());

        Some(RoundOutcome {
            winner,
            reason: WinReason::MutualDeadlock,
            tower,
            points,
        })
    }

    /// Settle a decided round.
    ///
    /// Awards the points, promotes the winning tower, gives the loser the
    /// first move and lays out the next round. Returns `Ok(None)` and
    /// changes nothing if the round is still running.
    pub fn finish_round(&mut self, referee: &mut Referee) -> Result<Option<RoundOutcome>> {
        let Some(outcome) = self.round_outcome(referee) else {
            return Ok(None);
        };

        referee.state_mut().add_score(outcome.winner, outcome.points);
        if let Some(color) = outcome.tower {
            self.promote(referee, outcome.winner, color);
        }
        info!(
            "round {} won by {} ({:?}, {} points), score {} - {}",
            referee.round(),
            outcome.winner,
            outcome.reason,
            outcome.points,
            referee.score(Side::Black),
            referee.score(Side::White),
        );

        if let Some(champion) = self.match_winner(referee) {
            info!("match won by {champion} after {} rounds", referee.round());
        }

        referee.set_turn(outcome.loser());
        self.reset_round(referee)?;
        Ok(Some(outcome))
    }
}

impl RulesEngine for StandardRules {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn round_winner(&self, referee: &Referee) -> Option<Side> {
        self.round_outcome(referee).map(|outcome| outcome.winner)
    }

    fn is_round_over(&mut self, referee: &mut Referee) -> Result<bool> {
        Ok(self.finish_round(referee)?.is_some())
    }

    fn match_winner(&self, referee: &Referee) -> Option<Side> {
        let target = referee.config().points_to_win;
        [Side::White, Side::Black]
            .into_iter()
            .find(|&side| referee.score(side) >= target)
    }

    fn is_push_legal(&self, referee: &Referee, origin: Coord) -> Result<bool> {
        Ok(Self::push_plan(referee, origin)?.is_some())
    }

    fn push(&mut self, referee: &mut Referee, origin: Coord) -> Result<bool> {
        self.apply_push(referee, origin)
    }

    fn reset_round(&mut self, referee: &mut Referee) -> Result<()> {
        referee.state_mut().advance_round();
        referee.place_towers()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CellColor::*;
    use crate::core::{CellColor, RefereeConfig, Setup, Tower, TowerKind};

    fn c(row: usize, col: usize) -> Coord {
        Coord::new(row, col)
    }

    fn load(setup: Setup) -> Referee {
        let mut referee = Referee::default();
        referee.apply_setup(&setup).unwrap();
        referee
    }

    fn edge_setup() -> Setup {
        Setup::new(Side::Black)
            .tower(Tower::simple(Side::Black, Pink), c(1, 3))
            .tower(Tower::simple(Side::White, Red), c(2, 6))
            .last_color(Side::White, Pink)
            .ply(8)
    }

    fn deadlock_setup(to_move: Side) -> Setup {
        Setup::new(to_move)
            .tower(Tower::simple(Side::Black, Red), c(4, 3))
            .tower(Tower::simple(Side::Black, Green), c(4, 2))
            .tower(Tower::simple(Side::Black, Yellow), c(4, 4))
            .tower(Tower::simple(Side::White, Orange), c(3, 2))
            .tower(Tower::simple(Side::White, Blue), c(3, 3))
            .tower(Tower::simple(Side::White, Pink), c(3, 4))
            .last_color(Side::White, Red)
            .last_color(Side::Black, Blue)
            .ply(10)
    }

    #[test]
    fn test_no_outcome_on_opening() {
        let mut referee = Referee::default();
        referee.place_towers().unwrap();
        let mut rules = StandardRules;

        assert_eq!(rules.round_outcome(&referee), None);
        assert_eq!(rules.is_round_over(&mut referee), Ok(false));
        assert_eq!(rules.match_winner(&referee), None);
        assert_eq!(referee.round(), 1);
    }

    #[test]
    fn test_edge_outcome_scores_invading_tower() {
        let mut referee = load(edge_setup());
        assert!(referee.make_move(c(1, 3), c(0, 3)).unwrap());

        let outcome = StandardRules.round_outcome(&referee).unwrap();
        assert_eq!(outcome.winner, Side::Black);
        assert_eq!(outcome.reason, WinReason::EdgeReached);
        assert_eq!(outcome.tower, Some(Pink));
        assert_eq!(outcome.points, 1);
    }

    #[test]
    fn test_round_winner_is_pure() {
        let mut referee = load(edge_setup());
        referee.make_move(c(1, 3), c(0, 3)).unwrap();
        let rules = StandardRules;

        assert_eq!(rules.round_winner(&referee), Some(Side::Black));
        assert_eq!(rules.round_winner(&referee), Some(Side::Black));
        assert_eq!(referee.score(Side::Black), 0);
        assert_eq!(referee.round(), 1);
    }

    #[test]
    fn test_finish_round_scores_promotes_and_resets() {
        let mut referee = load(edge_setup());
        referee.make_move(c(1, 3), c(0, 3)).unwrap();
        let mut rules = StandardRules;

        assert_eq!(rules.is_round_over(&mut referee), Ok(true));

        assert_eq!(referee.score(Side::Black), 1);
        assert_eq!(referee.score(Side::White), 0);
        assert_eq!(referee.round(), 2);
        assert_eq!(referee.ply(), 0);
        assert_eq!(referee.turn(), Some(Side::White));
        assert_eq!(referee.board().tower_count(), 16);
        assert_eq!(referee.last_color(Side::Black), None);
        assert_eq!(referee.last_color(Side::White), None);

        assert_eq!(referee.roster(Side::Black).get(Pink).unwrap().kind, TowerKind::SumoOne);
        let placed = referee.board().find_tower(Side::Black, Pink).unwrap();
        assert_eq!(placed.row, Side::Black.home_row());
        assert!(referee.board().tower_at(placed).unwrap().unwrap().is_promoted());

        assert_eq!(rules.round_outcome(&referee), None);
    }

    #[test]
    fn test_deadlock_scores_last_moved_tower() {
        let referee = load(deadlock_setup(Side::Black).last_moved(Side::Black, Red));
        let outcome = StandardRules.round_outcome(&referee).unwrap();

        assert_eq!(outcome.winner, Side::Black);
        assert_eq!(outcome.reason, WinReason::MutualDeadlock);
        assert_eq!(outcome.tower, Some(Red));
        assert_eq!(outcome.points, 1);
    }

    #[test]
    fn test_deadlock_without_last_moved_scores_nothing() {
        let mut referee = load(deadlock_setup(Side::White));
        let mut rules = StandardRules;

        let outcome = rules.finish_round(&mut referee).unwrap().unwrap();
        assert_eq!(outcome.winner, Side::White);
        assert_eq!(outcome.tower, None);
        assert_eq!(outcome.points, 0);
        assert_eq!(referee.score(Side::White), 0);
        assert_eq!(referee.round(), 2);
        assert_eq!(referee.turn(), Some(Side::Black));
    }

    #[test]
    fn test_sumo_edge_win_ends_match() {
        let mut referee = load(
            Setup::new(Side::White)
                .tower(Tower::sumo_one(Side::White, Green), c(5, 1))
                .tower(Tower::simple(Side::Black, Orange), c(3, 5))
                .last_color(Side::Black, Green)
                .round(2)
                .ply(6),
        );
        let mut rules = StandardRules;
        assert!(referee.make_move(c(5, 1), c(7, 3)).unwrap());

        let outcome = rules.finish_round(&mut referee).unwrap().unwrap();
        assert_eq!(outcome.points, 3);
        assert_eq!(referee.score(Side::White), 3);
        assert_eq!(rules.match_winner(&referee), Some(Side::White));
        assert!(rules.is_game_over(&referee));
    }

    #[test]
    fn test_custom_target_score() {
        let config = RefereeConfig::default().with_points_to_win(1);
        let mut referee = Referee::new(config);
        referee.apply_setup(&edge_setup()).unwrap();
        referee.make_move(c(1, 3), c(0, 3)).unwrap();
        let mut rules = StandardRules;

        assert!(rules.is_round_over(&mut referee).unwrap());
        assert_eq!(rules.match_winner(&referee), Some(Side::Black));
    }

    #[test]
    fn test_reset_round_keeps_scores_and_rosters() {
        let mut referee = Referee::default();
        referee.place_towers().unwrap();
        let mut rules = StandardRules;
        rules.promote(&mut referee, Side::White, CellColor::Brown);
        referee.state_mut().add_score(Side::White, 2);

        rules.reset_round(&mut referee).unwrap();

        assert_eq!(referee.round(), 2);
        assert_eq!(referee.score(Side::White), 2);
        assert_eq!(referee.roster(Side::White).promoted_count(), 1);
        assert_eq!(referee.history().len(), 0);
    }
}
