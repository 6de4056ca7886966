//! Exhaustive minimax search.
//!
//! Every node works on its own copy of the board, so sibling branches never
//! share state. There is no pruning, memoization or depth limit: the 9-cell
//! grid bounds the tree.

use crate::board::Board;
use crate::types::{Coord, Mark};
use tracing::{debug, instrument};

/// Score of a position won by the searching mark.
pub const WIN_SCORE: i32 = 10;

/// Score of a position lost by the searching mark.
pub const LOSS_SCORE: i32 = -WIN_SCORE;

/// Score of a drawn position.
pub const DRAW_SCORE: i32 = 0;

/// Starting bound, strictly worse than any leaf so the first child replaces it.
const BOUND: i32 = WIN_SCORE + 1;

/// Result of searching a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    /// The move to play, or the move that led to a terminal position.
    pub best: Option<Coord>,
    /// Backed-up score from the searching mark's point of view.
    pub score: i32,
}

/// Static score of a terminal position for `me`.
pub fn static_score(board: &Board, me: Mark) -> i32 {
    match board.winner() {
        Some(mark) if mark == me => WIN_SCORE,
        Some(_) => LOSS_SCORE,
        None => DRAW_SCORE,
    }
}

/// Minimax searcher for one mark.
#[derive(Debug, Clone)]
pub struct Minimax {
    me: Mark,
    nodes: u64,
}

impl Minimax {
    /// Creates a searcher maximizing for `me`.
    pub fn new(me: Mark) -> Self {
        Self { me, nodes: 0 }
    }

    /// Number of positions visited so far.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Searches `board` with `me` to move.
    ///
    /// On a terminal board there is nothing to play and `best` is `None`.
    #[instrument(skip(self, board), fields(me = %self.me, board = %board.pattern()))]
    pub fn evaluate(&mut self, board: &Board) -> Evaluation {
        let evaluation = self.minimax(board, true, None);
        debug!(
            best = ?evaluation.best,
            score = evaluation.score,
            nodes = self.nodes,
            "Search complete"
        );
        evaluation
    }

    fn minimax(&mut self, board: &Board, maximizing: bool, last: Option<Coord>) -> Evaluation {
        self.nodes += 1;

        if !board.is_active() {
            return Evaluation {
                best: last,
                score: static_score(board, self.me),
            };
        }

        let (mark, mut best) = if maximizing {
            (self.me, Evaluation { best: None, score: -BOUND })
        } else {
            (self.me.opponent(), Evaluation { best: None, score: BOUND })
        };

        for coord in board.empty_cells() {
            let mut child = board.copy();
            child.place(coord, mark);
            let score = self.minimax(&child, !maximizing, Some(coord)).score;

            // Strict comparison: ties keep the earliest cell in scan order.
            let better = if maximizing {
                score > best.score
            } else {
                score < best.score
            };
            if better {
                best = Evaluation {
                    best: Some(coord),
                    score,
                };
            }
        }

        best
    }
}

/// Chooses the move for `me` on `board`, or `None` if the game is over.
pub fn best_move(board: &Board, me: Mark) -> Option<Coord> {
    Minimax::new(me).evaluate(board).best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: usize, col: usize) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn test_lost_position_keeps_first_losing_move() {
        // X at (0,0) and (1,1), O at (0,1): every reply loses, so the
        // first empty cell in scan order is kept.
        let board = Board::from_pattern("XO. .X. ...").unwrap();
        let evaluation = Minimax::new(Mark::Naught).evaluate(&board);
        assert_eq!(evaluation.best, Some(at(0, 2)));
        assert_eq!(evaluation.score, LOSS_SCORE);
    }

    #[test]
    fn test_blocks_row_threat() {
        let board = Board::from_pattern("XX. .O. ...").unwrap();
        let evaluation = Minimax::new(Mark::Naught).evaluate(&board);
        assert_eq!(evaluation.best, Some(at(0, 2)));
        assert_eq!(evaluation.score, DRAW_SCORE);
    }

    #[test]
    fn test_block_beats_earlier_empty_cells() {
        // Only (1,2) stops the middle row; (0,0) comes first in scan order.
        let board = Board::from_pattern(".O. XX. ..O").unwrap();
        assert_eq!(best_move(&board, Mark::Naught), Some(at(1, 2)));
    }

    #[test]
    fn test_takes_win_when_available() {
        let board = Board::from_pattern("XX. OO. ...").unwrap();
        let evaluation = Minimax::new(Mark::Cross).evaluate(&board);
        assert_eq!(evaluation.score, WIN_SCORE);
        assert_eq!(evaluation.best, Some(at(0, 2)));
    }

    #[test]
    fn test_empty_board_ties_resolve_to_first_cell() {
        let evaluation = Minimax::new(Mark::Cross).evaluate(&Board::new());
        assert_eq!(evaluation.score, DRAW_SCORE);
        assert_eq!(evaluation.best, Some(at(0, 0)));
    }

    #[test]
    fn test_answers_corner_with_center() {
        let board = Board::from_pattern("X.. ... ...").unwrap();
        assert_eq!(best_move(&board, Mark::Naught), Some(at(1, 1)));
    }

    #[test]
    fn test_answers_center_with_first_corner() {
        let board = Board::from_pattern("... .X. ...").unwrap();
        assert_eq!(best_move(&board, Mark::Naught), Some(at(0, 0)));
    }

    #[test]
    fn test_terminal_board_has_no_move() {
        let won = Board::from_pattern("XXX OO. ...").unwrap();
        let evaluation = Minimax::new(Mark::Naught).evaluate(&won);
        assert_eq!(evaluation.best, None);
        assert_eq!(evaluation.score, LOSS_SCORE);

        let drawn = Board::from_pattern("XOX XOO OXX").unwrap();
        assert_eq!(best_move(&drawn, Mark::Cross), None);
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let board = Board::from_pattern("X.. .O. ...").unwrap();
        let before = board.clone();
        let _ = best_move(&board, Mark::Cross);
        assert_eq!(board, before);
    }

    #[test]
    fn test_static_score() {
        let board = Board::from_pattern("OOO XX. X..").unwrap();
        assert_eq!(static_score(&board, Mark::Naught), WIN_SCORE);
        assert_eq!(static_score(&board, Mark::Cross), LOSS_SCORE);
        assert_eq!(static_score(&Board::new(), Mark::Cross), DRAW_SCORE);
    }

    #[test]
    fn test_counts_nodes() {
        let board = Board::from_pattern("XOX OX. O..").unwrap();
        let mut search = Minimax::new(Mark::Cross);
        search.evaluate(&board);
        assert!(search.nodes() > 1);
    }
}
