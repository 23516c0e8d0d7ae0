//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// A mark placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Player X (always moves first after a reset).
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the other marker.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// Which participant of the session a marker belongs to.
///
/// The human always plays X and the computer always plays O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The person at the keyboard.
    Human,
    /// The heuristic computer opponent.
    Opponent,
}

impl Side {
    /// Marker played by this side.
    pub fn marker(self) -> Player {
        match self {
            Side::Human => Player::X,
            Side::Opponent => Player::O,
        }
    }

    /// Side that plays the given marker.
    pub fn of(marker: Player) -> Self {
        match marker {
            Player::X => Side::Human,
            Player::O => Side::Opponent,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Number of cells on the board.
    pub const CELLS: usize = 9;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; Self::CELLS],
        }
    }

    /// Builds a board from a row-major array of squares.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Places a marker, returning the previous square.
    ///
    /// Callers are responsible for bounds and occupancy checks.
    pub(crate) fn place(&mut self, index: usize, marker: Player) -> Square {
        std::mem::replace(&mut self.squares[index], Square::Occupied(marker))
    }

    /// Checks if the square at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Indices of all empty squares in ascending order.
    pub fn empty_cells(&self) -> Vec<usize> {
        (0..Self::CELLS).filter(|&i| self.is_empty(i)).collect()
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show the 1-9 key that selects them.
    pub fn display(&self) -> String {
        self.squares
            .chunks(3)
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(|(col, square)| match square {
                        Square::Empty => (row * 3 + col + 1).to_string(),
                        Square::Occupied(marker) => marker.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join("\n-+-+-\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Win counters for one session.
///
/// Counters only grow until [`Scores::clear`] is called by an explicit
/// reset-scores request; round restarts leave them alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    player: u32,
    opponent: u32,
}

impl Scores {
    /// Rounds won by the human.
    pub fn player(&self) -> u32 {
        self.player
    }

    /// Rounds won by the computer.
    pub fn opponent(&self) -> u32 {
        self.opponent
    }

    /// Adds one win for `side`.
    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Human => self.player = self.player.saturating_add(1),
            Side::Opponent => self.opponent = self.opponent.saturating_add(1),
        }
    }

    /// Zeroes both counters.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_numbers_empty_cells() {
        let mut board = Board::new();
        board.place(4, Player::X);
        assert_eq!(board.display(), "1|2|3\n-+-+-\n4|X|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_empty_cells_ascending() {
        let mut board = Board::new();
        board.place(0, Player::X);
        board.place(8, Player::O);
        assert_eq!(board.empty_cells(), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_side_marker_roundtrip() {
        for side in [Side::Human, Side::Opponent] {
            assert_eq!(Side::of(side.marker()), side);
        }
    }
}
