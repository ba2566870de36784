//! The eight Kamisado colors and the fixed board color layout.

use serde::{Deserialize, Serialize};

use super::BOARD_SIZE;

/// Color of a board cell. Every tower belongs to one of these colors too.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CellColor {
    Orange,
    Blue,
    Purple,
    Pink,
    Yellow,
    Red,
    Green,
    Brown,
}

use CellColor::*;

/// Color of every cell, indexed `[row][col]`.
///
/// Each row and each column holds every color exactly once. Row 0 is
/// White's home row, row 7 is Black's.
pub const LAYOUT: [[CellColor; BOARD_SIZE]; BOARD_SIZE] = [
    [Orange, Blue, Purple, Pink, Yellow, Red, Green, Brown],
    [Red, Orange, Pink, Green, Blue, Yellow, Brown, Purple],
    [Green, Pink, Orange, Red, Purple, Brown, Yellow, Blue],
    [Pink, Purple, Blue, Orange, Brown, Green, Red, Yellow],
    [Yellow, Red, Green, Brown, Orange, Blue, Purple, Pink],
    [Blue, Yellow, Brown, Purple, Red, Orange, Pink, Green],
    [Purple, Brown, Yellow, Blue, Green, Pink, Orange, Red],
    [Brown, Green, Red, Yellow, Pink, Purple, Blue, Orange],
];

impl CellColor {
    /// All colors, in the order they appear on row 0.
    pub const ALL: [CellColor; 8] = [Orange, Blue, Purple, Pink, Yellow, Red, Green, Brown];

    /// Color of the cell at `(row, col)`. Caller guarantees the cell is on the board.
    #[must_use]
    pub const fn at(row: usize, col: usize) -> Self {
        LAYOUT[row][col]
    }

    /// Single-letter tag used in board dumps.
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Orange => 'O',
            Blue => 'A',
            Purple => 'P',
            Pink => 'S',
            Yellow => 'Y',
            Red => 'R',
            Green => 'G',
            Brown => 'M',
        }
    }
}

impl std::fmt::Display for CellColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Orange => "orange",
            Blue => "blue",
            Purple => "purple",
            Pink => "pink",
            Yellow => "yellow",
            Red => "red",
            Green => "green",
            Brown => "brown",
        };
        f.write_str(name)
    }
}
