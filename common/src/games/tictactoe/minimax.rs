//! Exhaustive alpha-beta search over 3x3 positions.
//!
//! Scores are always from O's point of view: O maximizes, X minimizes. Every
//! terminal position is worth exactly one of the three constants below,
//! regardless of how deep it sits in the tree.

use super::board::{BOARD_CELLS, Board};
use super::types::{Mark, Outcome};
use super::win_detector::evaluate;

pub const O_WIN_SCORE: i32 = 10;
pub const X_WIN_SCORE: i32 = -10;
pub const DRAW_SCORE: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<usize>,
    pub score: Option<i32>,
    pub nodes_visited: u64,
}

pub fn terminal_score(outcome: Outcome) -> Option<i32> {
    match outcome {
        Outcome::OWon => Some(O_WIN_SCORE),
        Outcome::XWon => Some(X_WIN_SCORE),
        Outcome::Draw => Some(DRAW_SCORE),
        Outcome::Ongoing => None,
    }
}

/// Best move for `side`, first in index order among equally scored cells.
/// Returns `None` on a full board or when `side` is `Mark::Empty`.
pub fn choose_optimal_move(board: &Board, side: Mark) -> Option<usize> {
    search(board, side).best_move
}

/// Scores every empty cell with a full window and keeps the first cell that
/// strictly improves on the best score so far.
pub fn search(board: &Board, side: Mark) -> SearchResult {
    let mut result = SearchResult {
        best_move: None,
        score: None,
        nodes_visited: 0,
    };

    if side == Mark::Empty {
        return result;
    }

    let mut scratch = *board;
    let reply_is_maximizing = side == Mark::X;

    for index in board.available_moves() {
        let score = {
            let mut placed = scratch.place_scoped(index, side);
            minimax(
                &mut placed,
                reply_is_maximizing,
                i32::MIN,
                i32::MAX,
                &mut result.nodes_visited,
            )
        };

        let improves = match result.score {
            None => true,
            Some(best) if side == Mark::O => score > best,
            Some(best) => score < best,
        };

        if improves {
            result.score = Some(score);
            result.best_move = Some(index);
        }
    }

    result
}

/// Game-theoretic value of `board` with O maximizing. The board is mutated
/// during the search and is back in its original state on return.
pub fn minimax(
    board: &mut Board,
    is_maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
    nodes_visited: &mut u64,
) -> i32 {
    *nodes_visited += 1;

    if let Some(score) = terminal_score(evaluate(board)) {
        return score;
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in 0..BOARD_CELLS {
            if !board.is_empty_cell(index) {
                continue;
            }

            let eval = {
                let mut placed = board.place_scoped(index, Mark::O);
                minimax(&mut placed, false, alpha, beta, nodes_visited)
            };

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for index in 0..BOARD_CELLS {
            if !board.is_empty_cell(index) {
                continue;
            }

            let eval = {
                let mut placed = board.place_scoped(index, Mark::X);
                minimax(&mut placed, true, alpha, beta, nodes_visited)
            };

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}
