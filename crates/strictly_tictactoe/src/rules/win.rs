//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Square};
use tracing::instrument;

/// The 8 index-triples that win when held by one marker.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// True iff `marker` holds all three cells of some winning line.
#[instrument(level = "trace", skip(board))]
pub fn has_line(board: &Board, marker: Player) -> bool {
    let held = Some(Square::Occupied(marker));
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&i| board.get(i) == held))
}

/// Returns the marker holding a complete line, if any.
///
/// Boards reached by legal play never contain lines for both markers;
/// X is checked first.
#[instrument(level = "trace", skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    [Player::X, Player::O]
        .into_iter()
        .find(|&marker| has_line(board, marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(cells: &str) -> Board {
        let mut squares = [Square::Empty; 9];
        for (square, c) in squares.iter_mut().zip(cells.chars()) {
            *square = match c {
                'X' => Square::Occupied(Player::X),
                'O' => Square::Occupied(Player::O),
                _ => Square::Empty,
            };
        }
        Board::from_squares(squares)
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        assert_eq!(check_winner(&board("XXXOO....")), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        assert!(has_line(&board("XO.XO..O."), Player::O));
        assert!(!has_line(&board("XO.XO..O."), Player::X));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        assert_eq!(check_winner(&board("XXO.O.O.X")), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(check_winner(&board("XX.......")), None);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in WINNING_LINES {
            let mut squares = [Square::Empty; 9];
            for i in line {
                squares[i] = Square::Occupied(Player::O);
            }
            assert!(has_line(&Board::from_squares(squares), Player::O), "{line:?}");
        }
    }
}
