//! Kamisado rulesets.
//!
//! - `simple`: one round decides the match
//! - `standard`: rounds are scored, winners promoted to sumo towers
//!
//! `Game` ties a `Referee` to one of them.

pub mod simple;
pub mod standard;

mod game;

pub use game::Game;
