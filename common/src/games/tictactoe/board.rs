use std::ops::{Deref, DerefMut};

use super::types::Mark;

pub const BOARD_CELLS: usize = 9;

/// Rows, then columns, then the two diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// The 3x3 grid in row-major order, cell 0 top-left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; BOARD_CELLS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; BOARD_CELLS],
        }
    }

    pub fn from_cells(cells: [Mark; BOARD_CELLS]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; BOARD_CELLS] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_empty_cell(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    pub fn available_moves(&self) -> Vec<usize> {
        let mut moves = Vec::new();
        for (index, &cell) in self.cells.iter().enumerate() {
            if cell == Mark::Empty {
                moves.push(index);
            }
        }
        moves
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    /// X opens, so X is to move whenever both marks have been placed equally often.
    pub fn side_to_move(&self) -> Mark {
        if self.count(Mark::X) == self.count(Mark::O) {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// Raw write. Callers validate the index and emptiness first.
    pub fn place(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    /// Places `mark` for the lifetime of the returned guard.
    pub fn place_scoped(&mut self, index: usize, mark: Mark) -> Placement<'_> {
        debug_assert_eq!(self.cells[index], Mark::Empty);
        self.cells[index] = mark;
        Placement { board: self, index }
    }
}

/// A tentative mark that is erased again when the guard goes out of scope,
/// including on early returns out of the search loop.
pub struct Placement<'a> {
    board: &'a mut Board,
    index: usize,
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.cells[self.index] = Mark::Empty;
    }
}
