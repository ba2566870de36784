//! The referee core: turn order, move legality, blocking and deadlock.
//!
//! ## Legality
//!
//! A move from `origin` to `destination` is legal for a side when:
//! - `origin` holds one of the side's towers and `destination` is empty
//! - the two cells share a line in one of the side's forward directions
//! - every cell strictly between them is empty
//! - the distance fits the tower's range (0 = unlimited)
//! - the tower's color matches the color of the cell the opponent last
//!   moved onto (the chain rule; inactive during the first two plies)
//!
//! Rulesets (`RulesEngine`) build round and match logic on top of this.

use log::{debug, trace};

use crate::core::coord::distance;
use crate::core::{
    Action, ActionRecord, Board, CellColor, Coord, Direction, GameState, RefereeConfig, RefereeError, Result,
    Roster, Setup, Side, SideMap,
};

/// Rules core for one game session.
#[derive(Clone, Debug)]
pub struct Referee {
    state: GameState,
    config: RefereeConfig,
}

impl Default for Referee {
    fn default() -> Self {
        Self::new(RefereeConfig::default())
    }
}

impl Referee {
    /// Create a referee with an empty board. Call `place_towers` to start.
    #[must_use]
    pub fn new(config: RefereeConfig) -> Self {
        Self {
            state: GameState::new(),
            config,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &RefereeConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    /// Side to move. `None` before towers are placed.
    #[must_use]
    pub fn turn(&self) -> Option<Side> {
        self.state.turn()
    }

    /// Plies played in the current round.
    #[must_use]
    pub fn ply(&self) -> u32 {
        self.state.ply()
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.state.round()
    }

    #[must_use]
    pub fn score(&self, side: Side) -> u32 {
        self.state.score(side)
    }

    #[must_use]
    pub fn roster(&self, side: Side) -> &Roster {
        self.state.roster(side)
    }

    /// Color of the cell `side` last moved onto.
    #[must_use]
    pub fn last_color(&self, side: Side) -> Option<CellColor> {
        self.state.board.last_color(side)
    }

    #[must_use]
    pub fn history(&self) -> &im::Vector<ActionRecord> {
        self.state.history()
    }

    // === Placement ===

    /// Empty the board and lay out both rosters on their home rows.
    ///
    /// Clears the color memory. In round 1 the configured first side gets
    /// the turn; later rounds keep whatever turn the ruleset set.
    pub fn place_towers(&mut self) -> Result<()> {
        self.state.board.clear();
        for side in Side::ALL {
            let row = side.home_row();
            let towers = *self.state.roster(side).towers();
            for (col, tower) in towers.into_iter().enumerate() {
                self.state.board.place(tower, Coord::new(row, col))?;
            }
        }
        self.state.board.clear_last_colors();

        for side in Side::ALL {
            self.state.set_last_moved(side, None);
        }
        if self.state.round() == 1 || self.state.turn().is_none() {
            self.state.set_turn(self.config.first_side);
        }
        debug!("towers placed for round {}", self.state.round());
        Ok(())
    }

    /// Remove every tower from the board.
    pub fn clear_board(&mut self) {
        self.state.board.clear();
    }

    /// Load an explicit position.
    ///
    /// Replaces the board, color memory, turn and counters. The rosters are
    /// rebuilt from the setup: sumo towers in it are the promoted entries,
    /// every other color is simple. On error nothing changes.
    ///
    /// Fails with `DuplicateTower` if a side lists a color twice and with
    /// `TooManyPromotions` if a side holds more sumos than the cap.
    pub fn apply_setup(&mut self, setup: &Setup) -> Result<()> {
        let mut board = Board::new();
        for (tower, coord) in setup.towers() {
            if board.find_tower(tower.side, tower.color).is_some() {
                return Err(RefereeError::DuplicateTower {
                    side: tower.side,
                    color: tower.color,
                });
            }
            board.place(*tower, *coord)?;
        }
        for (side, color) in setup.last_colors().iter() {
            board.set_last_color(side, *color);
        }

        let mut rosters = SideMap::new(Roster::new);
        for (tower, _) in setup.towers().iter().filter(|(t, _)| t.is_promoted()) {
            rosters[tower.side].promote(tower.color);
        }
        let max = self.config.max_promotions;
        for (side, roster) in rosters.iter() {
            let count = roster.promoted_count();
            if count > max {
                return Err(RefereeError::TooManyPromotions { side, count, max });
            }
        }

        for side in Side::ALL {
            *self.state.roster_mut(side) = rosters[side].clone();
        }
        self.state.board = board;
        for (side, color) in setup.last_moved_towers().iter() {
            self.state.set_last_moved(side, *color);
        }
        self.state.set_turn(setup.turn());
        self.state.set_ply(setup.ply_count());
        self.state.set_round(setup.round_number());
        debug!("loaded position with {} towers", self.state.board.tower_count());
        Ok(())
    }

    // === Legality ===

    /// Whether the side to move may move the tower at `origin` to `destination`.
    ///
    /// Fails with `InvalidCoordinates` if either cell is off the board.
    pub fn is_legal_move(&self, origin: Coord, destination: Coord) -> Result<bool> {
        match self.state.turn() {
            Some(side) => self.is_legal_move_for(side, origin, destination),
            None => {
                self.state.board.cell(origin)?;
                self.state.board.cell(destination)?;
                Ok(false)
            }
        }
    }

    /// Legality of a move as if `side` were to move.
    pub fn is_legal_move_for(&self, side: Side, origin: Coord, destination: Coord) -> Result<bool> {
        let board = &self.state.board;
        let from = board.cell(origin)?;
        let to = board.cell(destination)?;

        let Some(tower) = from.tower() else {
            return Ok(false);
        };
        if tower.side != side || !to.is_empty() {
            return Ok(false);
        }

        let Some(direction) = Direction::between(origin, destination) else {
            return Ok(false);
        };
        if !side.forward_directions().contains(&direction) {
            return Ok(false);
        }
        if !board.cells_between_empty(origin, destination)? {
            return Ok(false);
        }
        if !tower.can_reach(distance(origin, destination)) {
            return Ok(false);
        }

        Ok(self.satisfies_chain(side, tower.color))
    }

    /// Chain rule: after two plies, only the tower matching the color the
    /// opponent last landed on may move.
    fn satisfies_chain(&self, side: Side, tower_color: CellColor) -> bool {
        self.state.ply() < 2 || self.state.board.last_color(side.opponent()) == Some(tower_color)
    }

    /// Every legal destination for the tower at `origin`, for the side to move.
    pub fn legal_destinations(&self, origin: Coord) -> Result<Vec<Coord>> {
        self.state.board.cell(origin)?;
        Ok(match self.state.turn() {
            Some(side) => self.walk_destinations(side, origin),
            None => Vec::new(),
        })
    }

    /// Every legal `(origin, destination)` pair for the side to move.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<(Coord, Coord)> {
        let Some(side) = self.state.turn() else {
            return Vec::new();
        };
        self.state
            .board
            .towers()
            .filter(|(_, t)| t.side == side)
            .flat_map(|(origin, _)| {
                self.walk_destinations(side, origin)
                    .into_iter()
                    .map(move |dest| (origin, dest))
            })
            .collect()
    }

    fn walk_destinations(&self, side: Side, origin: Coord) -> Vec<Coord> {
        let mut out = Vec::new();
        for direction in side.forward_directions() {
            let mut current = origin;
            while let Some(next) = current.step(direction) {
                if !self.state.board.is_empty(next).unwrap_or(false) {
                    break;
                }
                if self.is_legal_move_for(side, origin, next).unwrap_or(false) {
                    out.push(next);
                }
                current = next;
            }
        }
        out
    }

    // === Moving ===

    /// Move a tower for the side to move.
    ///
    /// Returns `Ok(false)` and changes nothing if the move is illegal.
    /// Otherwise the mover remembers the destination cell color, the ply
    /// counter advances and the turn passes to the opponent.
    pub fn make_move(&mut self, origin: Coord, destination: Coord) -> Result<bool> {
        if !self.is_legal_move(origin, destination)? {
            trace!("rejected move {origin} -> {destination}");
            return Ok(false);
        }
        let Some(side) = self.state.turn() else {
            return Ok(false);
        };

        let tower_color = self.state.board.tower_at(origin)?.map(|t| t.color);
        let landing = self.state.board.cell(destination)?.color();
        self.state.board.move_tower(origin, destination)?;

        self.state.board.set_last_color(side, Some(landing));
        self.state.set_last_moved(side, tower_color);
        self.state.record(side, Action::moving(origin, destination));
        self.state.flip_turn();

        debug!(
            "{side} moved {origin} -> {destination} (ply {}), opponent must move {landing}",
            self.state.ply()
        );
        Ok(true)
    }

    /// Give up the turn of a blocked side.
    ///
    /// The blocked tower counts as having moved onto its own cell, so the
    /// opponent must answer with the tower of that cell's color. Returns
    /// false and changes nothing if the side to move is not blocked.
    pub fn pass_turn(&mut self) -> bool {
        let Some(side) = self.state.turn() else {
            return false;
        };
        if !self.is_blocked(side) {
            trace!("{side} may not pass: not blocked");
            return false;
        }
        let Some(origin) = self.forced_tower(side) else {
            return false;
        };

        let landing = CellColor::at(origin.row, origin.col);
        let tower_color = self.state.board.last_color(side.opponent());
        self.state.board.set_last_color(side, Some(landing));
        self.state.set_last_moved(side, tower_color);
        self.state.record(side, Action::Pass);
        self.state.flip_turn();

        debug!("{side} is blocked at {origin} and passes (ply {})", self.state.ply());
        true
    }

    pub(crate) fn set_turn(&mut self, side: Side) {
        self.state.set_turn(side);
    }

    // === Blocking ===

    /// The tower `side` is forced to move next: the one matching the color
    /// of the cell the opponent last moved onto.
    #[must_use]
    pub fn forced_tower(&self, side: Side) -> Option<Coord> {
        let color = self.state.board.last_color(side.opponent())?;
        self.state.board.find_tower(side, color)
    }

    /// Whether `side`'s forced tower has no legal forward step.
    ///
    /// Never true during the first two plies, nor for a tower already on
    /// the side's goal row.
    #[must_use]
    pub fn is_blocked(&self, side: Side) -> bool {
        if self.state.ply() < 2 {
            return false;
        }
        let Some(origin) = self.forced_tower(side) else {
            return false;
        };
        if origin.row == side.goal_row() {
            return false;
        }

        side.forward_directions()
            .iter()
            .filter_map(|&d| origin.step(d))
            .all(|dest| !self.is_legal_move_for(side, origin, dest).unwrap_or(false))
    }

    /// Whether the side to move is blocked.
    #[must_use]
    pub fn is_current_side_blocked(&self) -> bool {
        self.state.turn().is_some_and(|side| self.is_blocked(side))
    }

    /// Whether both sides are blocked at once.
    #[must_use]
    pub fn is_mutual_deadlock(&self) -> bool {
        Side::ALL.iter().all(|&side| self.is_blocked(side))
    }

    // === Win Conditions ===

    /// Whether a tower of `side` stands on the opponent's home row.
    #[must_use]
    pub fn reaches_opponent_edge(&self, side: Side) -> bool {
        self.state.board.tower_on_row(side, side.goal_row()).is_some()
    }
}
