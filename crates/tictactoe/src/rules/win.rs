//! Win detection logic for tic-tac-toe.

use crate::board::Board;
use crate::types::{Cell, Coord, Mark};

/// Cell indices into [`Coord::ALL`] for every line, in scan order.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Yields the contents of each line. Calling again restarts the scan.
pub fn lines(board: &Board) -> impl Iterator<Item = [Cell; 3]> + '_ {
    LINES
        .into_iter()
        .map(move |line| line.map(|index| board.get(Coord::ALL[index])))
}

/// Returns the mark of the first line holding three of the same mark.
///
/// Empty cells never match, so a line of three empties is not a win.
pub fn check_winner(board: &Board) -> Option<Mark> {
    lines(board).find_map(|line| match line {
        [Cell::Marked(a), Cell::Marked(b), Cell::Marked(c)] if a == b && b == c => Some(a),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = Board::from_pattern("XXX ... ...").unwrap();
        assert_eq!(check_winner(&board), Some(Mark::Cross));
        assert!(!board.is_draw());
    }

    #[test]
    fn test_winner_column() {
        let board = Board::from_pattern(".O. XOX .O.").unwrap();
        assert_eq!(check_winner(&board), Some(Mark::Naught));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = Board::from_pattern("..O XOX O..").unwrap();
        assert_eq!(check_winner(&board), Some(Mark::Naught));
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let board = Board::from_pattern("XXO ... ...").unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_lines_scan_order() {
        let board = Board::from_pattern("X.. .O. ..X").unwrap();
        let lines: Vec<_> = board.lines().collect();
        assert_eq!(lines.len(), 8);
        let x = Cell::Marked(Mark::Cross);
        let o = Cell::Marked(Mark::Naught);
        assert_eq!(lines[0], [x, Cell::Empty, Cell::Empty]);
        assert_eq!(lines[4], [Cell::Empty, o, Cell::Empty]);
        assert_eq!(lines[6], [x, o, x]);
        assert_eq!(lines[7], [Cell::Empty, o, Cell::Empty]);
    }

    #[test]
    fn test_lines_restartable() {
        let board = Board::from_pattern("XO. ... ...").unwrap();
        let first: Vec<_> = board.lines().collect();
        let second: Vec<_> = board.lines().collect();
        assert_eq!(first, second);
    }
}
