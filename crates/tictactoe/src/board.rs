//! The 3x3 grid.

use crate::error::{OccupiedCellError, WrongInputError};
use crate::types::{Cell, Coord, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// 3x3 tic-tac-toe board.
///
/// `Clone` produces a fully independent copy; the search relies on this to
/// explore hypothetical positions without touching the real game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from a 9-cell pattern such as `"XO. .X. ..O"`.
    ///
    /// `X` and `O` are marks, `.` is empty; whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`WrongInputError`] on any other character or a wrong cell
    /// count.
    #[instrument]
    pub fn from_pattern(pattern: &str) -> Result<Self, WrongInputError> {
        let cells = pattern
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                'X' => Ok(Cell::Marked(Mark::Cross)),
                'O' => Ok(Cell::Marked(Mark::Naught)),
                '.' => Ok(Cell::Empty),
                other => Err(WrongInputError::new(format!(
                    "Unexpected board character {:?}",
                    other
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if cells.len() != 9 {
            return Err(WrongInputError::new(format!(
                "Board pattern needs 9 cells, got {}",
                cells.len()
            )));
        }

        let mut board = Self::new();
        for (coord, cell) in Coord::ALL.into_iter().zip(cells) {
            board.cells[coord.row()][coord.col()] = cell;
        }
        Ok(board)
    }

    /// Reads a single cell.
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.row()][coord.col()]
    }

    /// Returns the rows of the grid.
    pub fn cells(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    /// Places `mark` on an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`OccupiedCellError`] if the cell is already filled; the
    /// board is left unchanged.
    #[instrument(skip(self), fields(board = %self.pattern()))]
    pub fn fill_cell(&mut self, coord: Coord, mark: Mark) -> Result<(), OccupiedCellError> {
        if !self.get(coord).is_empty() {
            debug!("Rejected fill of occupied cell");
            return Err(OccupiedCellError::new(coord));
        }
        self.cells[coord.row()][coord.col()] = Cell::Marked(mark);
        Ok(())
    }

    /// Fills a cell without logging; the search calls this once per node.
    pub(crate) fn place(&mut self, coord: Coord, mark: Mark) {
        self.cells[coord.row()][coord.col()] = Cell::Marked(mark);
    }

    /// Returns a deep duplicate of this board.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        Coord::ALL
            .into_iter()
            .filter(move |&coord| self.get(coord).is_empty())
    }

    /// Number of filled cells.
    pub fn filled_count(&self) -> usize {
        Coord::ALL
            .iter()
            .filter(|&&coord| !self.get(coord).is_empty())
            .count()
    }

    /// Compact single-line form (`X`, `O`, `.`), used in logs.
    pub fn pattern(&self) -> String {
        Coord::ALL
            .iter()
            .map(|&coord| match self.get(coord) {
                Cell::Empty => '.',
                Cell::Marked(Mark::Cross) => 'X',
                Cell::Marked(Mark::Naught) => 'O',
            })
            .collect()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, "\n---------\n")?;
            }
            write!(f, "{} | {} | {}", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(number: usize) -> Coord {
        Coord::from_number(number).unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.filled_count(), 0);
        assert_eq!(board.empty_cells().count(), 9);
    }

    #[test]
    fn test_fill_cell_sets_only_target() {
        let mut board = Board::new();
        board.fill_cell(at(5), Mark::Naught).unwrap();
        assert_eq!(board.get(at(5)), Cell::Marked(Mark::Naught));
        assert_eq!(board.filled_count(), 1);
        assert_eq!(board.pattern(), "....O....");
    }

    #[test]
    fn test_refilling_cell_fails_and_keeps_mark() {
        let mut board = Board::new();
        board.fill_cell(at(9), Mark::Cross).unwrap();

        let err = board.fill_cell(at(9), Mark::Naught).unwrap_err();
        assert_eq!(err.coord, Coord::new(2, 2).unwrap());
        assert_eq!(board.get(at(9)), Cell::Marked(Mark::Cross));
        assert_eq!(board.filled_count(), 1);
    }

    #[test]
    fn test_copy_is_independent() {
        let mut original = Board::new();
        original.fill_cell(at(1), Mark::Cross).unwrap();

        let mut copy = original.copy();
        copy.fill_cell(at(2), Mark::Naught).unwrap();

        assert_eq!(original.get(at(2)), Cell::Empty);
        assert_eq!(original.filled_count(), 1);
        assert_eq!(copy.filled_count(), 2);
    }

    #[test]
    fn test_empty_cells_in_scan_order() {
        let board = Board::from_pattern("X.O .X. ...").unwrap();
        let numbers: Vec<_> = board.empty_cells().map(Coord::number).collect();
        assert_eq!(numbers, vec![2, 4, 6, 7, 8, 9]);
    }

    #[test]
    fn test_from_pattern_rejects_bad_input() {
        assert!(Board::from_pattern("XXX").is_err());
        assert!(Board::from_pattern("XXX ... ..Z").is_err());
        assert!(Board::from_pattern("XXX ... ....").is_err());
    }

    #[test]
    fn test_display_grid() {
        let board = Board::from_pattern("X.O .X. ..O").unwrap();
        assert_eq!(
            board.to_string(),
            "X |   | O\n---------\n  | X |  \n---------\n  |   | O"
        );
    }
}
