mod board;
mod bot_controller;
mod game_state;
mod minimax;
mod stats;
mod types;
mod win_detector;

pub use board::{BOARD_CELLS, Board, Placement, WIN_LINES};
pub use bot_controller::{BotType, calculate_move, calculate_random_move};
pub use game_state::{TicTacToeGameState, parse_human_move};
pub use minimax::{
    DRAW_SCORE, O_WIN_SCORE, SearchResult, X_WIN_SCORE, choose_optimal_move, minimax, search,
    terminal_score,
};
pub use stats::GameStats;
pub use types::{Mark, MoveError, Outcome};
pub use win_detector::{evaluate, winning_line};
