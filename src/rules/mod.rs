//! Rules: the shared referee core and the ruleset trait.
//!
//! `Referee` decides move legality, blocking and deadlock for both
//! variants. Variants implement `RulesEngine` to add round and match
//! logic on top of it.

pub mod engine;
pub mod referee;

pub use engine::{RoundOutcome, RulesEngine, WinReason};
pub use referee::Referee;
