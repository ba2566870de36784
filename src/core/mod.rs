//! Core types: sides, colors, coordinates, towers, board, state, errors.
//!
//! These are the building blocks the referee and the rulesets operate on.
//! None of them decide legality.

pub mod action;
pub mod board;
pub mod color;
pub mod config;
pub mod coord;
pub mod error;
pub mod roster;
pub mod setup;
pub mod side;
pub mod state;
pub mod tower;

/// Rows and columns of the board.
pub const BOARD_SIZE: usize = 8;

pub use action::{Action, ActionRecord};
pub use board::{Board, Cell};
pub use color::CellColor;
pub use config::RefereeConfig;
pub use coord::{Coord, Direction};
pub use error::{RefereeError, Result};
pub use roster::Roster;
pub use setup::Setup;
pub use side::{Side, SideMap};
pub use state::GameState;
pub use tower::{Tower, TowerKind};
