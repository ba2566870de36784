//! # kamisado
//!
//! A rules referee for the Kamisado board game.
//!
//! ## Design Principles
//!
//! 1. **Referee, not player**: The crate validates and applies moves and
//!    tracks turns, rounds and scores. Choosing moves is up to the caller.
//!
//! 2. **Shared core, pluggable rulesets**: Move legality, blocking and
//!    deadlock live in one `Referee`. Rulesets implement `RulesEngine`
//!    to decide when rounds and matches end.
//!
//! 3. **Illegal is not an error**: An illegal move or push returns
//!    `Ok(false)` and leaves the state untouched. Errors are reserved for
//!    off-board coordinates and operations a ruleset does not offer.
//!
//! ## Modules
//!
//! - `core`: Sides, colors, coordinates, towers, board, state, configuration
//! - `rules`: The `Referee` and the `RulesEngine` trait
//! - `games`: The simple and standard rulesets, and the `Game` facade

pub mod core;
pub mod games;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Board, CellColor, Coord, GameState, RefereeConfig, RefereeError, Result, Setup, Side,
    Tower, TowerKind,
};

pub use crate::games::simple::SimpleRules;
pub use crate::games::standard::StandardRules;
pub use crate::games::Game;

pub use crate::rules::{Referee, RoundOutcome, RulesEngine, WinReason};
