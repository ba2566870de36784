//! Game state: board plus turn, counters, scores, rosters and history.
//!
//! ## GameState
//!
//! Everything one game session owns:
//! - Board (towers, color memory)
//! - Side to move, ply counter (per round), round counter
//! - Cumulative score per side
//! - Rosters: the towers each side places at round start
//! - Color of the tower each side moved last
//! - Action history
//!
//! The state only keeps the books. Legality lives in `rules::Referee`.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{Action, ActionRecord};
use super::board::Board;
use super::color::CellColor;
use super::roster::Roster;
use super::side::{Side, SideMap};

/// Complete state of one game.
///
/// Uses an `im` persistent vector for the history so snapshots stay cheap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    pub board: Board,

    /// Side to move. `None` until towers are placed.
    turn: Option<Side>,

    /// Plies played in the current round.
    ply: u32,

    /// Current round (starts at 1).
    round: u32,

    /// Cumulative score.
    scores: SideMap<u32>,

    /// Towers placed at each round start.
    rosters: SideMap<Roster>,

    /// Color of the tower each side moved last in this round.
    last_moved: SideMap<Option<CellColor>>,

    /// Every applied action, across rounds.
    history: Vector<ActionRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Empty board, round 1, ply 0, no side to move yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: None,
            ply: 0,
            round: 1,
            scores: SideMap::with_value(0),
            rosters: SideMap::new(Roster::new),
            last_moved: SideMap::default(),
            history: Vector::new(),
        }
    }

    // === Turn ===

    #[must_use]
    pub fn turn(&self) -> Option<Side> {
        self.turn
    }

    pub fn set_turn(&mut self, side: Side) {
        self.turn = Some(side);
    }

    /// Hand the turn to the other side. No-op before the game starts.
    pub fn flip_turn(&mut self) {
        self.turn = self.turn.map(Side::opponent);
    }

    // === Counters ===

    #[must_use]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    pub fn set_ply(&mut self, ply: u32) {
        self.ply = ply;
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn set_round(&mut self, round: u32) {
        self.round = round;
    }

    /// Move to the next round: round + 1, ply back to 0, per-round memory cleared.
    pub fn advance_round(&mut self) {
        self.round += 1;
        self.ply = 0;
        self.last_moved = SideMap::default();
        self.board.clear_last_colors();
    }

    // === Scores ===

    #[must_use]
    pub fn score(&self, side: Side) -> u32 {
        self.scores[side]
    }

    pub fn add_score(&mut self, side: Side, points: u32) {
        self.scores[side] += points;
    }

    // === Rosters ===

    #[must_use]
    pub fn roster(&self, side: Side) -> &Roster {
        &self.rosters[side]
    }

    pub fn roster_mut(&mut self, side: Side) -> &mut Roster {
        &mut self.rosters[side]
    }

    // === Last Moved Tower ===

    #[must_use]
    pub fn last_moved(&self, side: Side) -> Option<CellColor> {
        self.last_moved[side]
    }

    pub fn set_last_moved(&mut self, side: Side, color: Option<CellColor>) {
        self.last_moved[side] = color;
    }

    // === History ===

    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Record an action taken by `side` and count the ply.
    pub fn record(&mut self, side: Side, action: Action) {
        self.history
            .push_back(ActionRecord::new(side, action, self.round, self.ply));
        self.ply += 1;
    }
}
