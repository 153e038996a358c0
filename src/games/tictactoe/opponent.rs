//! Computer opponent: a uniform-random choice among open cells.

use super::Board;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

/// RNG driving the computer's choices.
pub type OpponentRng = ChaCha8Rng;

/// Builds the opponent RNG, deterministic when a seed is given.
#[instrument]
pub fn opponent_rng(seed: Option<u64>) -> OpponentRng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Picks an empty cell uniformly at random.
///
/// Returns `None` on a full board.
#[instrument(skip(board, rng))]
pub fn random_open_cell<R: rand::Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    let choice = board.empty_cells().choose(rng).copied();
    debug!(?choice, "Computer picked a cell");
    choice
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Mark;

    #[test]
    fn test_full_board_has_no_choice() {
        let mut board = Board::new();
        for cell in 0..9 {
            board.place(cell, if cell % 2 == 0 { Mark::X } else { Mark::O });
        }
        let mut rng = opponent_rng(Some(7));
        assert_eq!(random_open_cell(&board, &mut rng), None);
    }

    #[test]
    fn test_only_open_cell_is_chosen() {
        let mut board = Board::new();
        for cell in (0..9).filter(|&c| c != 5) {
            board.place(cell, Mark::X);
        }
        let mut rng = opponent_rng(Some(7));
        for _ in 0..10 {
            assert_eq!(random_open_cell(&board, &mut rng), Some(5));
        }
    }

    #[test]
    fn test_every_open_cell_is_reachable() {
        let board = Board::new();
        let mut rng = opponent_rng(Some(99));
        let mut seen = [false; 9];
        for _ in 0..500 {
            let cell = random_open_cell(&board, &mut rng).unwrap();
            seen[cell] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_same_seed_same_choices() {
        let board = Board::new();
        let mut a = opponent_rng(Some(3));
        let mut b = opponent_rng(Some(3));
        let left: Vec<_> = (0..20).map(|_| random_open_cell(&board, &mut a)).collect();
        let right: Vec<_> = (0..20).map(|_| random_open_cell(&board, &mut b)).collect();
        assert_eq!(left, right);
    }
}
