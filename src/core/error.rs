//! Error type shared by the board, the referee and the rulesets.
//!
//! Rule violations (an illegal move, an illegal push) are not errors: they
//! are reported as `Ok(false)` and leave the game untouched.

use thiserror::Error;

use super::color::CellColor;
use super::coord::Coord;
use super::side::Side;

/// Referee failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RefereeError {
    /// A coordinate lies outside the 8×8 board.
    #[error("invalid coordinates ({row}, {col}): outside the board")]
    InvalidCoordinates { row: usize, col: usize },

    /// The ruleset does not offer this operation.
    #[error("operation `{operation}` is not supported by the {ruleset} ruleset")]
    UnsupportedOperation {
        operation: &'static str,
        ruleset: &'static str,
    },

    /// Tried to place a tower on an occupied cell.
    #[error("cell {0} is already occupied")]
    CellOccupied(Coord),

    /// Tried to move or remove a tower from an empty cell.
    #[error("cell {0} is empty")]
    EmptyCell(Coord),

    /// A position lists the same tower twice.
    #[error("{side} {color} tower appears more than once")]
    DuplicateTower { side: Side, color: CellColor },

    /// A position holds more sumo towers than the promotion cap allows.
    #[error("{side} has {count} sumo towers, at most {max} allowed")]
    TooManyPromotions { side: Side, count: usize, max: usize },
}

impl RefereeError {
    pub(crate) fn invalid(coord: Coord) -> Self {
        RefereeError::InvalidCoordinates {
            row: coord.row,
            col: coord.col,
        }
    }

    pub(crate) fn unsupported(operation: &'static str, ruleset: &'static str) -> Self {
        RefereeError::UnsupportedOperation { operation, ruleset }
    }
}

/// Result alias for referee operations.
pub type Result<T> = std::result::Result<T, RefereeError>;
