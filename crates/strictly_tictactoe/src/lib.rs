//! Pure tic-tac-toe logic for a human-vs-computer session.
//!
//! # Architecture
//!
//! - **Types**: board, markers, sides and scores
//! - **Rules**: win and draw detection over a board
//! - **State**: [`GameState`] with move validation, reset and score keeping
//! - **Strategy**: the computer's priority heuristic with injectable tie-breaks
//! - **Session**: [`Match`], the synchronous controller front ends drive
//!
//! Nothing here sleeps or spawns; timing belongs to the caller.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Match, RandomChooser, Transition};
//!
//! let mut session = Match::new();
//! let mut chooser = RandomChooser::seeded(7);
//!
//! let next = session.play_human(0).expect("empty board accepts a move");
//! assert_eq!(next, Transition::OpponentToMove);
//!
//! let reply = session.play_opponent(&mut chooser).expect("opponent to move");
//! assert_eq!(reply.position.to_index(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod position;
pub mod rules;
mod session;
mod state;
mod strategy;
mod types;

pub use error::{InvalidMove, InvalidMoveKind};
pub use position::Position;
pub use session::{Match, OpponentMove, RoundResult, Snapshot, Status, Transition};
pub use state::{GameState, MoveReport, Outcome, Phase};
pub use strategy::{Chooser, Decision, RandomChooser, Tier, choose_move, find_winning_move};
pub use types::{Board, Player, Scores, Side, Square};
