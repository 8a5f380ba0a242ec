use super::board::{BOARD_CELLS, Board};
use super::types::{Mark, MoveError, Outcome};
use super::win_detector::evaluate;

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: Outcome,
    pub last_move: Option<usize>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: Outcome::Ongoing,
            last_move: None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn place_mark(&mut self, index: usize) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        if index >= BOARD_CELLS {
            return Err(MoveError::OutOfRange { index });
        }

        if !self.board.is_empty_cell(index) {
            return Err(MoveError::CellOccupied { index });
        }

        self.board.place(index, self.current_mark);
        self.last_move = Some(index);

        self.status = evaluate(&self.board);

        if self.status == Outcome::Ongoing {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == Mark::X {
            Mark::O
        } else {
            Mark::X
        };
    }
}

/// Maps the 1-based cell number a player types to a 0-based index.
pub fn parse_human_move(input: &str) -> Result<usize, MoveError> {
    let trimmed = input.trim();
    let number: usize = trimmed.parse().map_err(|_| MoveError::InvalidInput {
        input: trimmed.to_string(),
    })?;

    if !(1..=BOARD_CELLS).contains(&number) {
        return Err(MoveError::OutOfRange { index: number });
    }

    Ok(number - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_x_to_move() {
        let state = TicTacToeGameState::new();
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.status, Outcome::Ongoing);
        assert_eq!(state.last_move, None);
    }

    #[test]
    fn test_place_mark_alternates_turns() {
        let mut state = TicTacToeGameState::new();
        state.place_mark(4).unwrap();
        assert_eq!(state.board.get(4), Some(Mark::X));
        assert_eq!(state.current_mark, Mark::O);
        state.place_mark(0).unwrap();
        assert_eq!(state.board.get(0), Some(Mark::O));
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.last_move, Some(0));
        assert_eq!(state.current_mark, state.board.side_to_move());
    }

    #[test]
    fn test_occupied_cell_is_rejected_without_changing_turn() {
        let mut state = TicTacToeGameState::new();
        state.place_mark(4).unwrap();
        assert_eq!(state.place_mark(4), Err(MoveError::CellOccupied { index: 4 }));
        assert_eq!(state.current_mark, Mark::O);
        assert_eq!(state.board.count(Mark::O), 0);
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let mut state = TicTacToeGameState::new();
        assert_eq!(state.place_mark(9), Err(MoveError::OutOfRange { index: 9 }));
    }

    #[test]
    fn test_win_ends_game_and_keeps_winner_to_move() {
        let mut state = TicTacToeGameState::new();
        for index in [0, 3, 1, 4, 2] {
            state.place_mark(index).unwrap();
        }
        assert_eq!(state.status, Outcome::XWon);
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.place_mark(8), Err(MoveError::GameOver));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let mut state = TicTacToeGameState::new();
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            state.place_mark(index).unwrap();
        }
        assert_eq!(state.status, Outcome::Draw);
        assert!(state.is_over());
    }

    #[test]
    fn test_parse_human_move() {
        assert_eq!(parse_human_move("1"), Ok(0));
        assert_eq!(parse_human_move(" 9\n"), Ok(8));
        assert_eq!(parse_human_move("0"), Err(MoveError::OutOfRange { index: 0 }));
        assert_eq!(parse_human_move("10"), Err(MoveError::OutOfRange { index: 10 }));
        assert_eq!(
            parse_human_move("x"),
            Err(MoveError::InvalidInput { input: "x".to_string() })
        );
    }
}
