//! The sumo push.
//!
//! A sumo tower shoves the opposing simple tower straight in front of it
//! one cell back and takes its place. The pushing side then moves again,
//! with the tower matching the color of the cell the pushed tower landed on.

use std::ops::RangeInclusive;

use log::{debug, trace};

use super::rules::StandardRules;
use crate::core::{Action, CellColor, Coord, Result, Side};
use crate::rules::Referee;

/// Rows a pushing tower may start from.
pub const PUSH_ROWS: RangeInclusive<usize> = 2..=5;

/// First round in which pushes are allowed.
pub const PUSH_MIN_ROUND: u32 = 2;

/// Cells involved in a legal push.
#[derive(Clone, Copy, Debug)]
pub(super) struct PushPlan {
    side: Side,
    origin: Coord,
    target: Coord,
    beyond: Coord,
}

impl StandardRules {
    /// Work out a push from `origin`, or `None` if it is not legal.
    pub(super) fn push_plan(referee: &Referee, origin: Coord) -> Result<Option<PushPlan>> {
        let board = referee.board();
        let Some(pusher) = board.tower_at(origin)? else {
            return Ok(None);
        };
        let Some(side) = referee.turn() else {
            return Ok(None);
        };
        if referee.round() < PUSH_MIN_ROUND || !PUSH_ROWS.contains(&origin.row) {
            return Ok(None);
        }
        if pusher.side != side || !pusher.is_promoted() {
            return Ok(None);
        }

        let forward = side.forward();
        let Some(target) = origin.offset(forward, 0) else {
            return Ok(None);
        };
        let Some(beyond) = target.offset(forward, 0) else {
            return Ok(None);
        };
        match board.tower_at(target)? {
            Some(victim) if victim.side == side.opponent() && !victim.is_promoted() => {}
            _ => return Ok(None),
        }
        if !board.is_empty(beyond)? {
            return Ok(None);
        }

        Ok(Some(PushPlan {
            side,
            origin,
            target,
            beyond,
        }))
    }

    /// Carry out a push. `Ok(false)` and no change if it is illegal.
    pub(super) fn apply_push(&mut self, referee: &mut Referee, origin: Coord) -> Result<bool> {
        let Some(plan) = Self::push_plan(referee, origin)? else {
            trace!("rejected push from {origin}");
            return Ok(false);
        };
        let PushPlan {
            side,
            origin,
            target,
            beyond,
        } = plan;

        let state = referee.state_mut();
        let pusher_color = state.board.tower_at(origin)?.map(|t| t.color);
        state.board.move_tower(target, beyond)?;
        state.board.move_tower(origin, target)?;

        let pushed_landing = CellColor::at(beyond.row, beyond.col);
        let pusher_landing = CellColor::at(target.row, target.col);
        state.board.set_last_color(side.opponent(), Some(pushed_landing));
        state.board.set_last_color(side, Some(pusher_landing));
        state.set_last_moved(side, pusher_color);
        state.record(side, Action::Push { origin });

        debug!(
            "{side} pushed from {origin} (ply {}), {side} moves again with {pushed_landing}",
            state.ply()
        );
        Ok(true)
    }
}
