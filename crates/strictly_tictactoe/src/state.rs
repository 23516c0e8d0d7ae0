//! Game state for one session: board, turn, active flag and scores.

use super::error::{InvalidMove, InvalidMoveKind};
use super::rules;
use super::types::{Board, Player, Scores, Side};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// What a successfully applied move did to the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line completed and empty cells remain.
    Continue,
    /// The mover completed a line.
    Won(Player),
    /// The board filled up without a line.
    Draw,
}

impl Outcome {
    /// True when the move ended the round.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Continue)
    }
}

/// Result of [`GameState::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct MoveReport {
    /// Board after the move.
    pub board: Board,
    /// Effect of the move on the round.
    pub outcome: Outcome,
}

/// Where the round is in its turn cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the human to pick a cell.
    AwaitingHuman,
    /// The computer is to move; human input is refused.
    AwaitingOpponent,
    /// The round ended; only a reset leaves this phase.
    RoundOver,
}

/// Complete game state.
///
/// `active` is false iff the last applied move won or filled the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    turn: Player,
    active: bool,
    scores: Scores,
}

impl GameState {
    /// Creates a fresh session: empty board, X to move, zero scores.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::X,
            active: true,
            scores: Scores::default(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Marker whose turn it is.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// False once a win or draw has been detected.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Session scores.
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Current state-machine phase.
    pub fn phase(&self) -> Phase {
        if !self.active {
            Phase::RoundOver
        } else if Side::of(self.turn) == Side::Human {
            Phase::AwaitingHuman
        } else {
            Phase::AwaitingOpponent
        }
    }

    /// Places `marker` at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] when the index is outside 0-8, the cell is
    /// taken, the round is over, or it is not `marker`'s turn. Nothing
    /// changes on error.
    #[instrument(skip(self), fields(turn = %self.turn, active = self.active))]
    pub fn apply_move(&mut self, index: usize, marker: Player) -> Result<MoveReport, InvalidMove> {
        if !self.active {
            return Err(InvalidMove::new(InvalidMoveKind::RoundOver));
        }
        if index >= Board::CELLS {
            return Err(InvalidMove::new(InvalidMoveKind::OutOfRange(index)));
        }
        if !self.board.is_empty(index) {
            return Err(InvalidMove::new(InvalidMoveKind::Occupied(index)));
        }
        if marker != self.turn {
            return Err(InvalidMove::new(InvalidMoveKind::NotYourTurn(marker)));
        }

        self.board.place(index, marker);

        let outcome = if self.check_win(marker) {
            Outcome::Won(marker)
        } else if self.check_draw() {
            Outcome::Draw
        } else {
            Outcome::Continue
        };

        if outcome.is_terminal() {
            self.active = false;
            info!(?outcome, "Round over");
        } else {
            self.turn = marker.opponent();
        }

        debug!(?outcome, board = %self.board.display(), "Move applied");
        Ok(MoveReport::new(self.board, outcome))
    }

    /// True iff `marker` holds any winning line.
    pub fn check_win(&self, marker: Player) -> bool {
        rules::has_line(&self.board, marker)
    }

    /// True iff no empty cell remains.
    ///
    /// Only meaningful when [`check_win`](Self::check_win) is false for the
    /// last mover.
    pub fn check_draw(&self) -> bool {
        rules::is_full(&self.board)
    }

    /// Clears the board for a new round. Scores are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.turn = Player::X;
        self.active = true;
        debug!("Board reset");
    }

    /// Adds a win to `winner`'s counter.
    #[instrument(skip(self))]
    pub fn record_win(&mut self, winner: Side) {
        self.scores.increment(winner);
        info!(
            player = self.scores.player(),
            opponent = self.scores.opponent(),
            "Score updated"
        );
    }

    /// Zeroes both score counters.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.scores.clear();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
