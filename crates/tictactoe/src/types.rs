//! Core domain types for tic-tac-toe.

use crate::error::WrongInputError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A playable symbol.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// The cross, shown as `X`.
    #[strum(serialize = "X")]
    Cross,
    /// The naught, shown as `O`.
    #[strum(serialize = "O")]
    Naught,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Cross => Mark::Naught,
            Mark::Naught => Mark::Cross,
        }
    }
}

/// Contents of one grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Unfilled.
    #[default]
    Empty,
    /// Filled with a mark.
    Marked(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }

    /// Checks if the cell is unfilled.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Empty => write!(f, " "),
            Cell::Marked(mark) => write!(f, "{}", mark),
        }
    }
}

/// A grid position, always within the 3x3 board.
///
/// Cells are also addressed by a 1-indexed number reading left-to-right,
/// top-to-bottom: cell `n` is row `(n-1)/3`, column `(n-1)%3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// All 9 coordinates in row-major order.
    pub const ALL: [Coord; 9] = [
        Coord { row: 0, col: 0 },
        Coord { row: 0, col: 1 },
        Coord { row: 0, col: 2 },
        Coord { row: 1, col: 0 },
        Coord { row: 1, col: 1 },
        Coord { row: 1, col: 2 },
        Coord { row: 2, col: 0 },
        Coord { row: 2, col: 1 },
        Coord { row: 2, col: 2 },
    ];

    /// Creates a coordinate, or `None` if either index is outside `0..3`.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < 3 && col < 3).then_some(Self { row, col })
    }

    /// Creates a coordinate from a cell number in `1..=9`.
    pub fn from_number(number: usize) -> Option<Self> {
        if !(1..=9).contains(&number) {
            return None;
        }
        let index = number - 1;
        Some(Self {
            row: index / 3,
            col: index % 3,
        })
    }

    /// Parses a raw move token typed by a human.
    ///
    /// Surrounding whitespace is ignored; the rest must be a single digit
    /// from 1 to 9.
    ///
    /// # Errors
    ///
    /// Returns [`WrongInputError`] for anything else.
    #[instrument]
    pub fn parse_input(raw: &str) -> Result<Self, WrongInputError> {
        let token = raw.trim();
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c
                .to_digit(10)
                .and_then(|digit| Self::from_number(digit as usize))
                .ok_or_else(|| WrongInputError::new("Input number of cell from 1 to 9...")),
            _ => Err(WrongInputError::new("Input number of cell from 1 to 9...")),
        }
    }

    /// Returns the row index (0-2).
    pub fn row(self) -> usize {
        self.row
    }

    /// Returns the column index (0-2).
    pub fn col(self) -> usize {
        self.col
    }

    /// Returns the 1-indexed cell number.
    pub fn number(self) -> usize {
        self.row * 3 + self.col + 1
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
