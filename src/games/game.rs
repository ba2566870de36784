//! A referee bound to a ruleset.

use log::debug;

use super::simple::SimpleRules;
use super::standard::StandardRules;
use crate::core::{Action, ActionRecord, Board, CellColor, Coord, RefereeConfig, Result, Roster, Side};
use crate::rules::{Referee, RoundOutcome, RulesEngine};

/// One Kamisado match under ruleset `R`.
///
/// Owns the referee and forwards every operation to it or to the ruleset.
/// Use `Game::simple` or `Game::standard` to get a match with the towers
/// already on their home rows.
#[derive(Clone, Debug)]
pub struct Game<R: RulesEngine> {
    referee: Referee,
    rules: R,
}

impl Game<SimpleRules> {
    /// Single-round match, ready to play.
    pub fn simple(config: RefereeConfig) -> Result<Self> {
        Self::new(config, SimpleRules)
    }
}

impl Game<StandardRules> {
    /// Multi-round match with scoring and sumo towers, ready to play.
    pub fn standard(config: RefereeConfig) -> Result<Self> {
        Self::new(config, StandardRules)
    }

    /// Outcome of the current round, if decided. Changes nothing.
    #[must_use]
    pub fn round_outcome(&self) -> Option<RoundOutcome> {
        self.rules.round_outcome(&self.referee)
    }

    /// Settle a decided round and lay out the next one.
    pub fn finish_round(&mut self) -> Result<Option<RoundOutcome>> {
        self.rules.finish_round(&mut self.referee)
    }

    /// Promote `side`'s tower of `color`, subject to the promotion cap.
    pub fn promote(&mut self, side: Side, color: CellColor) -> bool {
        self.rules.promote(&mut self.referee, side, color)
    }
}

impl<R: RulesEngine> Game<R> {
    /// Build a match and lay out the opening position.
    pub fn new(config: RefereeConfig, rules: R) -> Result<Self> {
        let first_side = config.first_side;
        let mut referee = Referee::new(config);
        referee.place_towers()?;
        debug!("new {} game, {first_side} to move", rules.name());
        Ok(Self { referee, rules })
    }

    // === Accessors ===

    #[must_use]
    pub fn referee(&self) -> &Referee {
        &self.referee
    }

    /// Mutable referee, for loading positions with `apply_setup`.
    pub fn referee_mut(&mut self) -> &mut Referee {
        &mut self.referee
    }

    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        self.referee.board()
    }

    #[must_use]
    pub fn turn(&self) -> Option<Side> {
        self.referee.turn()
    }

    #[must_use]
    pub fn ply(&self) -> u32 {
        self.referee.ply()
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.referee.round()
    }

    #[must_use]
    pub fn score(&self, side: Side) -> u32 {
        self.referee.score(side)
    }

    #[must_use]
    pub fn roster(&self, side: Side) -> &Roster {
        self.referee.roster(side)
    }

    #[must_use]
    pub fn history(&self) -> &im::Vector<ActionRecord> {
        self.referee.history()
    }

    // === Referee Operations ===

    pub fn is_legal_move(&self, origin: Coord, destination: Coord) -> Result<bool> {
        self.referee.is_legal_move(origin, destination)
    }

    pub fn make_move(&mut self, origin: Coord, destination: Coord) -> Result<bool> {
        self.referee.make_move(origin, destination)
    }

    #[must_use]
    pub fn is_blocked(&self, side: Side) -> bool {
        self.referee.is_blocked(side)
    }

    #[must_use]
    pub fn is_current_side_blocked(&self) -> bool {
        self.referee.is_current_side_blocked()
    }

    #[must_use]
    pub fn is_mutual_deadlock(&self) -> bool {
        self.referee.is_mutual_deadlock()
    }

    pub fn pass_turn(&mut self) -> bool {
        self.referee.pass_turn()
    }

    #[must_use]
    pub fn reaches_opponent_edge(&self, side: Side) -> bool {
        self.referee.reaches_opponent_edge(side)
    }

    // === Ruleset Operations ===

    pub fn is_round_over(&mut self) -> Result<bool> {
        self.rules.is_round_over(&mut self.referee)
    }

    #[must_use]
    pub fn round_winner(&self) -> Option<Side> {
        self.rules.round_winner(&self.referee)
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.rules.is_game_over(&self.referee)
    }

    #[must_use]
    pub fn match_winner(&self) -> Option<Side> {
        self.rules.match_winner(&self.referee)
    }

    pub fn is_push_legal(&self, origin: Coord) -> Result<bool> {
        self.rules.is_push_legal(&self.referee, origin)
    }

    pub fn push(&mut self, origin: Coord) -> Result<bool> {
        self.rules.push(&mut self.referee, origin)
    }

    pub fn reset_round(&mut self) -> Result<()> {
        self.rules.reset_round(&mut self.referee)
    }

    // === Actions ===

    /// Every action the side to move may take: moves, pushes, and a pass
    /// when the side is blocked. Empty once the round or the match is
    /// decided; settle the round with `is_round_over` to play on.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        if self.turn().is_none() || self.is_game_over() || self.round_winner().is_some() {
            return Vec::new();
        }
        let mut actions: Vec<Action> = if self.referee.is_current_side_blocked() {
            vec![Action::Pass]
        } else {
            self.referee
                .legal_moves()
                .into_iter()
                .map(|(from, to)| Action::moving(from, to))
                .collect()
        };
        actions.extend(
            self.board()
                .towers()
                .map(|(coord, _)| coord)
                .filter(|&coord| self.is_push_legal(coord).unwrap_or(false))
                .map(|origin| Action::Push { origin }),
        );
        actions
    }

    /// Apply one action. `Ok(false)` and no change if it is illegal.
    pub fn apply_action(&mut self, action: &Action) -> Result<bool> {
        match *action {
            Action::Move { from, to } => self.make_move(from, to),
            Action::Pass => Ok(self.pass_turn()),
            Action::Push { origin } => self.push(origin),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CellColor::*;
    use crate::core::{RefereeError, Setup, Tower};

    fn c(row: usize, col: usize) -> Coord {
        Coord::new(row, col)
    }

    #[test]
    fn test_new_games_are_ready() {
        let simple = Game::simple(RefereeConfig::default()).unwrap();
        assert_eq!(simple.board().tower_count(), 16);
        assert_eq!(simple.turn(), Some(Side::Black));
        assert_eq!(simple.rules().name(), "simple");

        let standard = Game::standard(RefereeConfig::default().with_first_side(Side::White)).unwrap();
        assert_eq!(standard.turn(), Some(Side::White));
        assert_eq!(standard.round(), 1);
        assert_eq!(standard.rules().name(), "standard");
    }

    #[test]
    fn test_opening_actions_are_moves() {
        let game = Game::simple(RefereeConfig::default()).unwrap();
        let actions = game.legal_actions();

        assert!(!actions.is_empty());
        assert!(actions.iter().all(|a| matches!(a, Action::Move { .. })));
        for action in &actions {
            let origin = action.origin().unwrap();
            assert_eq!(origin.row, Side::Black.home_row());
        }
    }

    #[test]
    fn test_apply_action_dispatch() {
        let mut game = Game::simple(RefereeConfig::default()).unwrap();
        let first = game.legal_actions()[0];

        assert_eq!(game.apply_action(&first), Ok(true));
        assert_eq!(game.turn(), Some(Side::White));
        assert_eq!(game.ply(), 1);
        assert_eq!(game.apply_action(&Action::Pass), Ok(false));
        assert_eq!(
            game.apply_action(&Action::Push { origin: c(0, 0) }),
            Err(RefereeError::UnsupportedOperation {
                operation: "push",
                ruleset: "simple"
            })
        );
    }

    #[test]
    fn test_blocked_side_only_passes() {
        let mut game = Game::simple(RefereeConfig::default()).unwrap();
        game.referee_mut()
            .apply_setup(
                &Setup::new(Side::Black)
                    .tower(Tower::simple(Side::Black, Red), c(4, 3))
                    .tower(Tower::simple(Side::White, Blue), c(3, 3))
                    .tower(Tower::simple(Side::White, Orange), c(3, 2))
                    .tower(Tower::simple(Side::White, Pink), c(3, 4))
                    .last_color(Side::White, Red)
                    .ply(6),
            )
            .unwrap();

        assert_eq!(game.legal_actions(), vec![Action::Pass]);
        assert_eq!(game.apply_action(&Action::Pass), Ok(true));
        assert_eq!(game.turn(), Some(Side::White));
    }

    #[test]
    fn test_standard_actions_include_push() {
        let mut game = Game::standard(RefereeConfig::default()).unwrap();
        game.referee_mut()
            .apply_setup(
                &Setup::new(Side::Black)
                    .tower(Tower::sumo_one(Side::Black, Red), c(4, 3))
                    .tower(Tower::simple(Side::White, Blue), c(3, 3))
                    .last_color(Side::White, Red)
                    .round(2)
                    .ply(4),
            )
            .unwrap();

        let actions = game.legal_actions();
        assert!(actions.contains(&Action::Push { origin: c(4, 3) }));
        assert!(actions.contains(&Action::moving(c(4, 3), c(3, 2))));
    }

    #[test]
    fn test_no_actions_after_decided_round() {
        let mut game = Game::standard(RefereeConfig::default()).unwrap();
        game.referee_mut()
            .apply_setup(
                &Setup::new(Side::Black)
                    .tower(Tower::simple(Side::Black, Pink), c(1, 3))
                    .tower(Tower::simple(Side::White, Red), c(2, 6))
                    .last_color(Side::White, Pink)
                    .ply(8),
            )
            .unwrap();
        assert!(game.make_move(c(1, 3), c(0, 3)).unwrap());

        assert_eq!(game.round_winner(), Some(Side::Black));
        assert!(!game.is_game_over());
        assert!(game.legal_actions().is_empty());

        assert_eq!(game.is_round_over(), Ok(true));
        assert_eq!(game.round_winner(), None);
        assert!(!game.legal_actions().is_empty());
    }
}
