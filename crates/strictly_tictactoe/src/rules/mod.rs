//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board); no turn or score state.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WINNING_LINES, check_winner, has_line};
