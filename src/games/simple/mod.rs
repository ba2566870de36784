//! Simple ruleset.
//!
//! One round is the whole match:
//! - White or Black reaching the opponent's home row wins immediately
//! - A mutual deadlock is won by the side to move
//! - No scoring, no promotion, no sumo push

mod rules;

pub use rules::SimpleRules;
