//! Human-vs-computer session controller.
//!
//! [`Match`] strings the pieces together: it applies human moves, runs the
//! opponent strategy when asked, records wins and reports what should happen
//! next. It never waits; the caller decides when the opponent moves and when
//! a finished round is cleared.

use super::error::{InvalidMove, InvalidMoveKind};
use super::state::{GameState, Outcome, Phase};
use super::strategy::{self, Chooser, Tier};
use super::types::{Board, Scores, Side};
use super::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// What the caller should do after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// The computer moves next.
    OpponentToMove,
    /// The human moves next.
    HumanToMove,
    /// The round ended; schedule a restart.
    RoundOver(RoundResult),
}

/// How a finished round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundResult {
    /// One side completed a line.
    Winner(Side),
    /// Full board, no line.
    Draw,
}

/// Round status as shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Waiting for the human.
    HumanToMove,
    /// The computer is deciding.
    OpponentThinking,
    /// The round was won.
    Won(Side),
    /// The round was drawn.
    Draw,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::HumanToMove => write!(f, "Your turn ({})", Side::Human.marker()),
            Status::OpponentThinking => write!(f, "AI is thinking..."),
            Status::Won(Side::Human) => write!(f, "Player {} wins!", Side::Human.marker()),
            Status::Won(Side::Opponent) => write!(f, "AI wins!"),
            Status::Draw => write!(f, "Game ended in a draw!"),
        }
    }
}

/// Everything a front end needs to redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Snapshot {
    /// Board contents.
    pub board: Board,
    /// Whose turn it is, or how the round ended.
    pub status: Status,
    /// Session scores.
    pub scores: Scores,
}

/// A move the computer made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpponentMove {
    /// Cell played.
    pub position: Position,
    /// Heuristic rule that picked it.
    pub tier: Tier,
    /// What happens next.
    pub transition: Transition,
}

/// One human-vs-computer session spanning many rounds.
#[derive(Debug, Clone, Default)]
pub struct Match {
    state: GameState,
    last_result: Option<RoundResult>,
}

impl Match {
    /// Starts a session with zero scores, human to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
            last_result: None,
        }
    }

    /// Underlying game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Applies the human's selection.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] if it is not the human's turn (including while
    /// the computer is thinking) or the cell cannot be played.
    #[instrument(skip(self), fields(phase = ?self.phase()))]
    pub fn play_human(&mut self, index: usize) -> Result<Transition, InvalidMove> {
        match self.phase() {
            Phase::AwaitingHuman => {}
            Phase::AwaitingOpponent => {
                return Err(InvalidMove::new(InvalidMoveKind::NotYourTurn(
                    Side::Human.marker(),
                )));
            }
            Phase::RoundOver => return Err(InvalidMove::new(InvalidMoveKind::RoundOver)),
        }
        let report = self.state.apply_move(index, Side::Human.marker())?;
        Ok(self.settle(report.outcome))
    }

    /// Lets the computer move.
    ///
    /// Returns `None` unless the computer is to move.
    #[instrument(skip(self, chooser), fields(phase = ?self.phase()))]
    pub fn play_opponent(&mut self, chooser: &mut (impl Chooser + ?Sized)) -> Option<OpponentMove> {
        if self.phase() != Phase::AwaitingOpponent {
            debug!("Opponent move requested out of turn");
            return None;
        }
        let marker = Side::Opponent.marker();
        let decision = strategy::choose_move(self.state.board(), marker, chooser)?;
        let report = match self.state.apply_move(decision.position.to_index(), marker) {
            Ok(report) => report,
            Err(e) => {
                warn!(error = %e, "Strategy produced an unplayable cell");
                return None;
            }
        };
        Some(OpponentMove {
            position: decision.position,
            tier: decision.tier,
            transition: self.settle(report.outcome),
        })
    }

    /// Clears the board for the next round. Scores are kept.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.state.reset();
        self.last_result = None;
    }

    /// Zeroes the scores without touching the round.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.state.reset_scores();
    }

    /// Current scores.
    pub fn scores(&self) -> Scores {
        self.state.scores()
    }

    /// Status line for the current state.
    pub fn status(&self) -> Status {
        match (self.phase(), self.last_result) {
            (Phase::AwaitingHuman, _) => Status::HumanToMove,
            (Phase::AwaitingOpponent, _) => Status::OpponentThinking,
            (Phase::RoundOver, Some(RoundResult::Winner(side))) => Status::Won(side),
            (Phase::RoundOver, _) => Status::Draw,
        }
    }

    /// Board, status and scores in one value.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(*self.state.board(), self.status(), self.scores())
    }

    fn settle(&mut self, outcome: Outcome) -> Transition {
        match outcome {
            Outcome::Continue => match Side::of(self.state.turn()) {
                Side::Human => Transition::HumanToMove,
                Side::Opponent => Transition::OpponentToMove,
            },
            Outcome::Won(marker) => {
                let side = Side::of(marker);
                self.state.record_win(side);
                self.finish(RoundResult::Winner(side))
            }
            Outcome::Draw => self.finish(RoundResult::Draw),
        }
    }

    fn finish(&mut self, result: RoundResult) -> Transition {
        self.last_result = Some(result);
        Transition::RoundOver(result)
    }
}
