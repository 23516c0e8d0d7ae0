//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board is a draw only when no line was completed; callers test
/// for a win first.
#[instrument(level = "trace", skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::super::Player;
    use super::super::win::check_winner;
    use super::*;

    const X: Square = Square::Occupied(Player::X);
    const O: Square = Square::Occupied(Player::O);
    const E: Square = Square::Empty;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::from_squares([X, O, X, E, O, E, E, E, E]);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / X O O / O X X
        let board = Board::from_squares([X, O, X, X, O, O, O, X, X]);
        assert!(is_full(&board));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_full_board_with_winner_is_not_a_draw() {
        // X X X / O O X / X O O
        let board = Board::from_squares([X, X, X, O, O, X, X, O, O]);
        assert!(is_full(&board));
        assert_eq!(check_winner(&board), Some(Player::X));
    }
}
