use super::board::{Board, WIN_LINES};
use super::types::{Mark, Outcome};

/// Classifies a position. A completed line is reported even when the board is
/// also full.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(line) = winning_line(board) {
        return match board.get(line[0]) {
            Some(Mark::X) => Outcome::XWon,
            Some(Mark::O) => Outcome::OWon,
            _ => unreachable!(),
        };
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

/// First line in `WIN_LINES` order holding three identical marks.
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    let cells = board.cells();
    WIN_LINES.iter().copied().find(|&[a, b, c]| {
        cells[a] != Mark::Empty && cells[a] == cells[b] && cells[a] == cells[c]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Mark = Mark::Empty;
    const X: Mark = Mark::X;
    const O: Mark = Mark::O;

    #[test]
    fn test_empty_board_is_ongoing() {
        assert_eq!(evaluate(&Board::new()), Outcome::Ongoing);
    }

    #[test]
    fn test_every_line_is_detected_for_both_marks() {
        for line in WIN_LINES {
            for (mark, expected) in [(X, Outcome::XWon), (O, Outcome::OWon)] {
                let mut board = Board::new();
                for index in line {
                    board.place(index, mark);
                }
                assert_eq!(evaluate(&board), expected, "line {:?}", line);
                assert_eq!(winning_line(&board), Some(line));
            }
        }
    }

    #[test]
    fn test_win_takes_precedence_over_full_board() {
        let board = Board::from_cells([
            X, X, X,
            O, O, X,
            X, O, O,
        ]);
        assert!(board.is_full());
        assert_eq!(evaluate(&board), Outcome::XWon);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_cells([
            X, O, X,
            X, O, O,
            O, X, X,
        ]);
        assert_eq!(winning_line(&board), None);
        assert_eq!(evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = Board::from_cells([
            X, O, X,
            E, E, E,
            E, E, E,
        ]);
        assert_eq!(evaluate(&board), Outcome::Ongoing);
    }

    #[test]
    fn test_first_line_in_order_is_reported() {
        let board = Board::from_cells([
            O, X, X,
            O, X, E,
            O, X, E,
        ]);
        assert_eq!(winning_line(&board), Some([0, 3, 6]));
        assert_eq!(evaluate(&board), Outcome::OWon);
    }

    #[test]
    fn test_evaluate_is_repeatable() {
        let board = Board::from_cells([
            X, E, O,
            E, X, E,
            E, E, E,
        ]);
        assert_eq!(evaluate(&board), evaluate(&board));
    }
}
