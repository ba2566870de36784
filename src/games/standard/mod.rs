//! Standard ruleset.
//!
//! A match of several rounds:
//! - Each round is won by edge reach or by mutual deadlock
//! - The winner scores the points of the winning tower
//! - The winning tower is promoted to a sumo, up to a per-side cap
//! - Sumo towers may push an opposing simple tower one cell back
//! - The loser of a round moves first in the next one
//!
//! The first side to reach the configured target score wins the match.

mod promotion;
mod push;
mod rules;

pub use push::{PUSH_MIN_ROUND, PUSH_ROWS};
pub use rules::StandardRules;
