use serde::{Deserialize, Serialize};

use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::minimax::search;
use super::types::Mark;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BotType {
    Random,
    Optimal,
}

pub fn calculate_move(
    bot_type: BotType,
    board: &Board,
    bot_mark: Mark,
    rng: &mut SessionRng,
) -> Option<usize> {
    match bot_type {
        BotType::Random => calculate_random_move(board, rng),
        BotType::Optimal => calculate_optimal_move(board, bot_mark),
    }
}

fn calculate_optimal_move(board: &Board, bot_mark: Mark) -> Option<usize> {
    let result = search(board, bot_mark);
    log!(
        "Search for {:?}: move {:?}, score {:?}, {} positions visited",
        bot_mark,
        result.best_move,
        result.score,
        result.nodes_visited
    );
    result.best_move
}

pub fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = board.available_moves();
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..available_moves.len());
    Some(available_moves[idx])
}
