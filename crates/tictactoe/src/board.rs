//! Flattened 3x3 board storage and rendering.

use super::types::{Cell, Player};
use serde::{Deserialize, Serialize};

/// Side length of the square grid.
pub const DIMENSION: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = DIMENSION * DIMENSION;

/// 3x3 tic-tac-toe board.
///
/// Cells are stored row-major in a single array and addressed through
/// [`Board::index`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Linear index of an in-range `(col, row)`.
    pub fn index(col: usize, row: usize) -> usize {
        col + DIMENSION * row
    }

    /// Converts signed caller coordinates into `(col, row)`, if in range.
    pub fn locate(col: i32, row: i32) -> Option<(usize, usize)> {
        let col = usize::try_from(col).ok().filter(|c| *c < DIMENSION)?;
        let row = usize::try_from(row).ok().filter(|r| *r < DIMENSION)?;
        Some((col, row))
    }

    /// Gets the cell at `(col, row)`, or `None` when out of range.
    pub fn get(&self, col: usize, row: usize) -> Option<Cell> {
        if col >= DIMENSION || row >= DIMENSION {
            return None;
        }
        Some(self.cells[Self::index(col, row)])
    }

    /// Writes a cell.
    ///
    /// Rule checks live in [`Game::place_mark`](crate::Game::place_mark);
    /// this only guards the range.
    pub fn set(&mut self, col: usize, row: usize, cell: Cell) -> Option<Cell> {
        if col >= DIMENSION || row >= DIMENSION {
            return None;
        }
        let slot = &mut self.cells[Self::index(col, row)];
        Some(std::mem::replace(slot, cell))
    }

    /// Checks if the cell at `(col, row)` is in range and empty.
    pub fn is_empty(&self, col: usize, row: usize) -> bool {
        matches!(self.get(col, row), Some(Cell::Empty))
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Number of marked cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Number of cells marked by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Marked(player))
            .count()
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }
}

impl std::fmt::Display for Board {
    /// Renders rows of ` X | O |   ` separated by `---+---+---`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..DIMENSION {
            for col in 0..DIMENSION {
                write!(f, " {} ", self.cells[Self::index(col, row)].token())?;
                if col < DIMENSION - 1 {
                    f.write_str("|")?;
                }
            }
            f.write_str("\n")?;
            if row < DIMENSION - 1 {
                let separator = vec!["---"; DIMENSION].join("+");
                writeln!(f, "{separator}")?;
            }
        }
        Ok(())
    }
}
