//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Mark};
use tracing::instrument;

/// The eight lines that win when one mark fills them.
pub const TRIPLES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],            // Diagonals
];

/// Returns true if `mark` occupies every cell of any triple.
#[instrument(skip(board))]
pub fn check_win(board: &Board, mark: Mark) -> bool {
    TRIPLES.iter().any(|triple| {
        triple
            .iter()
            .all(|&index| board.get(index) == Some(Cell::Occupied(mark)))
    })
}

/// Returns the mark that has completed a triple, X checked first.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Mark> {
    [Mark::X, Mark::O]
        .into_iter()
        .find(|&mark| check_win(board, mark))
}
