//! Move rejection error.

use super::Player;
use derive_more::{Display, Error};
use tracing::instrument;

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InvalidMoveKind {
    /// Index outside 0-8.
    #[display("cell {} is out of range (0-8)", _0)]
    OutOfRange(usize),
    /// The target cell already holds a marker.
    #[display("cell {} is already occupied", _0)]
    Occupied(usize),
    /// The round already ended in a win or draw.
    #[display("the round is over")]
    RoundOver,
    /// The marker tried to move out of turn.
    #[display("it is not {}'s turn", _0)]
    NotYourTurn(Player),
}

/// A rejected move, with the location that rejected it.
///
/// Rejections are user-input errors: the state they were raised against is
/// left exactly as it was.
#[derive(Debug, Clone, Display, Error)]
#[display("Invalid move: {} at {}:{}", kind, file, line)]
pub struct InvalidMove {
    /// Why the move was rejected.
    pub kind: InvalidMoveKind,
    /// Line number where the move was rejected.
    pub line: u32,
    /// Source file where the move was rejected.
    pub file: &'static str,
}

impl InvalidMove {
    /// Creates a new rejection with caller location tracking.
    #[track_caller]
    #[instrument(level = "debug")]
    pub fn new(kind: InvalidMoveKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Why the move was rejected.
    pub fn kind(&self) -> InvalidMoveKind {
        self.kind
    }
}
