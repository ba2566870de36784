//! The 8×8 board: cells, towers, geometry queries and color memory.
//!
//! The board knows nothing about turns or legality. It stores towers,
//! answers geometric questions about pairs of cells, and keeps the color
//! of the cell each side last landed on. Every lookup validates its
//! coordinates and fails with `RefereeError::InvalidCoordinates` when they
//! fall outside the board.

use serde::{Deserialize, Serialize};

use super::color::CellColor;
use super::coord::{self, Coord, Direction};
use super::error::{RefereeError, Result};
use super::side::{Side, SideMap};
use super::tower::Tower;
use super::BOARD_SIZE;

/// One board cell. Holds at most one tower.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    coord: Coord,
    color: CellColor,
    tower: Option<Tower>,
}

impl Cell {
    fn new(coord: Coord) -> Self {
        Self {
            coord,
            color: CellColor::at(coord.row, coord.col),
            tower: None,
        }
    }

    #[must_use]
    pub fn coord(&self) -> Coord {
        self.coord
    }

    #[must_use]
    pub fn color(&self) -> CellColor {
        self.color
    }

    #[must_use]
    pub fn tower(&self) -> Option<&Tower> {
        self.tower.as_ref()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tower.is_none()
    }

    /// Color of the tower standing here.
    #[must_use]
    pub fn tower_color(&self) -> Option<CellColor> {
        self.tower.map(|t| t.color)
    }

    /// Side of the tower standing here.
    #[must_use]
    pub fn tower_side(&self) -> Option<Side> {
        self.tower.map(|t| t.side)
    }
}

/// The game board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    /// Color of the cell each side last moved onto. `None` until the side
    /// has moved in the current round.
    last_color: SideMap<Option<CellColor>>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        let cells = std::array::from_fn(|row| std::array::from_fn(|col| Cell::new(Coord::new(row, col))));
        Self {
            cells,
            last_color: SideMap::default(),
        }
    }

    // === Cell Access ===

    /// Get a cell.
    pub fn cell(&self, coord: Coord) -> Result<&Cell> {
        if !coord.is_on_board() {
            return Err(RefereeError::invalid(coord));
        }
        Ok(&self.cells[coord.row][coord.col])
    }

    fn cell_mut(&mut self, coord: Coord) -> Result<&mut Cell> {
        if !coord.is_on_board() {
            return Err(RefereeError::invalid(coord));
        }
        Ok(&mut self.cells[coord.row][coord.col])
    }

    /// Tower standing on a cell.
    pub fn tower_at(&self, coord: Coord) -> Result<Option<&Tower>> {
        Ok(self.cell(coord)?.tower())
    }

    /// Whether a cell is empty.
    pub fn is_empty(&self, coord: Coord) -> Result<bool> {
        Ok(self.cell(coord)?.is_empty())
    }

    /// Iterate over all cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }

    /// Iterate over every tower on the board with its position.
    pub fn towers(&self) -> impl Iterator<Item = (Coord, &Tower)> {
        self.cells().filter_map(|c| c.tower().map(|t| (c.coord(), t)))
    }

    /// Number of towers on the board.
    #[must_use]
    pub fn tower_count(&self) -> usize {
        self.towers().count()
    }

    /// Position of the tower of the given side and color.
    #[must_use]
    pub fn find_tower(&self, side: Side, color: CellColor) -> Option<Coord> {
        self.towers()
            .find(|(_, t)| t.side == side && t.color == color)
            .map(|(coord, _)| coord)
    }

    /// First tower of `side` standing on `row`.
    #[must_use]
    pub fn tower_on_row(&self, side: Side, row: usize) -> Option<(Coord, &Tower)> {
        self.cells
            .get(row)?
            .iter()
            .find_map(|c| c.tower().filter(|t| t.side == side).map(|t| (c.coord(), t)))
    }

    // === Placement ===

    /// Put a tower on an empty cell.
    pub fn place(&mut self, tower: Tower, coord: Coord) -> Result<()> {
        let cell = self.cell_mut(coord)?;
        if cell.tower.is_some() {
            return Err(RefereeError::CellOccupied(coord));
        }
        cell.tower = Some(tower);
        Ok(())
    }

    /// Take the tower off a cell.
    pub fn remove(&mut self, coord: Coord) -> Result<Tower> {
        self.cell_mut(coord)?
            .tower
            .take()
            .ok_or(RefereeError::EmptyCell(coord))
    }

    /// Relocate a tower. The destination must be empty.
    ///
    /// Performs no legality check; nothing changes on error.
    pub fn move_tower(&mut self, from: Coord, to: Coord) -> Result<()> {
        if !self.is_empty(to)? {
            return Err(RefereeError::CellOccupied(to));
        }
        let tower = self.remove(from)?;
        self.place(tower, to)
    }

    /// Remove every tower.
    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            cell.tower = None;
        }
    }

    // === Geometry ===

    /// Direction of the line from `from` to `to`, if they share one.
    pub fn direction(&self, from: Coord, to: Coord) -> Result<Option<Direction>> {
        self.cell(from)?;
        self.cell(to)?;
        Ok(Direction::between(from, to))
    }

    /// Number of steps between two cells.
    pub fn distance(&self, from: Coord, to: Coord) -> Result<usize> {
        self.cell(from)?;
        self.cell(to)?;
        Ok(coord::distance(from, to))
    }

    /// Whether every cell strictly between `from` and `to` is empty.
    ///
    /// False when the cells do not share a line.
    pub fn cells_between_empty(&self, from: Coord, to: Coord) -> Result<bool> {
        let Some(direction) = self.direction(from, to)? else {
            return Ok(false);
        };

        let mut current = from;
        loop {
            current = match current.step(direction) {
                Some(next) if next != to => next,
                _ => return Ok(true),
            };
            if !self.is_empty(current)? {
                return Ok(false);
            }
        }
    }

    // === Color Memory ===

    /// Color of the cell `side` last moved onto.
    #[must_use]
    pub fn last_color(&self, side: Side) -> Option<CellColor> {
        self.last_color[side]
    }

    pub fn set_last_color(&mut self, side: Side, color: Option<CellColor>) {
        self.last_color[side] = color;
    }

    pub fn clear_last_colors(&mut self) {
        self.last_color = SideMap::default();
    }
}

impl std::fmt::Display for Board {
    /// One line per row, row 0 first. Empty cells show the lowercase color
    /// letter, occupied cells show `side` + `tower color`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row
                .iter()
                .map(|cell| match cell.tower() {
                    Some(t) => format!("{}{}", t.side.to_char(), t.color.to_char()),
                    None => format!(" {}", cell.color().to_char().to_ascii_lowercase()),
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: usize, col: usize) -> Coord {
        Coord::new(row, col)
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.tower_count(), 0);
        assert_eq!(board.cells().count(), 64);
        assert_eq!(board.cell(c(3, 3)).unwrap().color(), CellColor::Orange);
        assert_eq!(board.last_color(Side::Black), None);
    }

    #[test]
    fn test_invalid_coordinates() {
        let board = Board::new();
        assert_eq!(
            board.cell(c(8, 0)).unwrap_err(),
            RefereeError::InvalidCoordinates { row: 8, col: 0 }
        );
        assert!(board.is_empty(c(0, 9)).is_err());
        assert!(board.direction(c(0, 0), c(9, 9)).is_err());
    }

    #[test]
    fn test_place_and_remove() {
        let mut board = Board::new();
        let tower = Tower::simple(Side::Black, CellColor::Red);

        board.place(tower, c(4, 4)).unwrap();
        assert_eq!(board.tower_at(c(4, 4)).unwrap(), Some(&tower));
        assert_eq!(
            board.place(Tower::simple(Side::White, CellColor::Red), c(4, 4)),
            Err(RefereeError::CellOccupied(c(4, 4)))
        );
        assert_eq!(board.find_tower(Side::Black, CellColor::Red), Some(c(4, 4)));
        assert_eq!(board.find_tower(Side::White, CellColor::Red), None);

        assert_eq!(board.remove(c(4, 4)), Ok(tower));
        assert_eq!(board.remove(c(4, 4)), Err(RefereeError::EmptyCell(c(4, 4))));
    }

    #[test]
    fn test_move_tower() {
        let mut board = Board::new();
        board.place(Tower::simple(Side::Black, CellColor::Red), c(6, 1)).unwrap();
        board.place(Tower::simple(Side::White, CellColor::Red), c(1, 1)).unwrap();

        board.move_tower(c(6, 1), c(2, 1)).unwrap();
        assert!(board.is_empty(c(6, 1)).unwrap());
        assert_eq!(board.cell(c(2, 1)).unwrap().tower_side(), Some(Side::Black));

        // Occupied destination leaves both towers in place.
        assert!(board.move_tower(c(2, 1), c(1, 1)).is_err());
        assert!(!board.is_empty(c(2, 1)).unwrap());
        assert_eq!(board.tower_count(), 2);
    }

    #[test]
    fn test_cells_between_empty() {
        let mut board = Board::new();
        assert!(board.cells_between_empty(c(7, 0), c(0, 7)).unwrap());
        assert!(board.cells_between_empty(c(5, 5), c(4, 5)).unwrap());

        board.place(Tower::simple(Side::White, CellColor::Blue), c(4, 3)).unwrap();
        assert!(!board.cells_between_empty(c(7, 0), c(0, 7)).unwrap());
        // Endpoints are not "between".
        assert!(board.cells_between_empty(c(7, 0), c(4, 3)).unwrap());
        // Not on a common line.
        assert!(!board.cells_between_empty(c(0, 0), c(2, 1)).unwrap());
    }

    #[test]
    fn test_tower_on_row() {
        let mut board = Board::new();
        board.place(Tower::simple(Side::Black, CellColor::Pink), c(0, 5)).unwrap();
        assert_eq!(board.tower_on_row(Side::Black, 0).map(|(p, _)| p), Some(c(0, 5)));
        assert!(board.tower_on_row(Side::White, 0).is_none());
        assert!(board.tower_on_row(Side::Black, 9).is_none());
    }

    #[test]
    fn test_last_colors() {
        let mut board = Board::new();
        board.set_last_color(Side::White, Some(CellColor::Green));
        assert_eq!(board.last_color(Side::White), Some(CellColor::Green));
        board.clear_last_colors();
        assert_eq!(board.last_color(Side::White), None);
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.place(Tower::simple(Side::White, CellColor::Orange), c(0, 0)).unwrap();
        let dump = board.to_string();
        let first = dump.lines().next().unwrap();
        assert!(first.starts_with("WO  a"));
        assert_eq!(dump.lines().count(), 8);
    }
}
