//! Game orchestration between the human and the computer.
//!
//! The orchestrator owns the [`Match`] and the two timers the game needs:
//! the computer's thinking delay and the pause before a finished round is
//! cleared. Front ends talk to it only through channels.

use anyhow::Result;
use std::time::Duration;
use strictly_tictactoe::{Chooser, Match, RoundResult, Side, Snapshot, Transition};
use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};
use tracing::{debug, info, instrument, warn};

/// Requests from the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play the cell at this index (0-8).
    Select(usize),
    /// Clear the board now, keeping scores.
    Restart,
    /// Zero both scores.
    ResetScores,
    /// Stop the orchestrator.
    Quit,
}

/// Audible feedback the front end may play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// The human placed a mark.
    Click,
    /// The computer placed a mark.
    OpponentMove,
    /// The human won the round.
    Cheer,
    /// The computer won the round.
    Boo,
    /// The round was drawn.
    Draw,
}

impl SoundCue {
    /// True for cues that mark the end of a round.
    pub fn ends_round(self) -> bool {
        matches!(self, SoundCue::Cheer | SoundCue::Boo | SoundCue::Draw)
    }

    fn for_result(result: RoundResult) -> Self {
        match result {
            RoundResult::Winner(Side::Human) => SoundCue::Cheer,
            RoundResult::Winner(Side::Opponent) => SoundCue::Boo,
            RoundResult::Draw => SoundCue::Draw,
        }
    }
}

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Board, status or scores changed.
    StateChanged(Snapshot),
    /// A sound should be played.
    Cue(SoundCue),
}

/// Delays between game steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Pause before the computer answers a human move.
    pub think: Duration,
    /// Pause between the end of a round and the fresh board.
    pub restart: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            think: Duration::from_millis(600),
            restart: Duration::from_millis(2000),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    OpponentMove,
    Restart,
}

/// Orchestrates gameplay between the human and the computer.
pub struct Orchestrator<C> {
    session: Match,
    chooser: C,
    timing: Timing,
    commands: mpsc::UnboundedReceiver<Command>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
    pending: Option<(Pending, Instant)>,
}

impl<C: Chooser> Orchestrator<C> {
    /// Creates a new orchestrator with a fresh session.
    pub fn new(
        chooser: C,
        timing: Timing,
        commands: mpsc::UnboundedReceiver<Command>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            session: Match::new(),
            chooser,
            timing,
            commands,
            event_tx,
            pending: None,
        }
    }

    /// The session being played.
    pub fn session(&self) -> &Match {
        &self.session
    }

    /// Runs the game loop until [`Command::Quit`] or the command channel closes.
    ///
    /// # Errors
    ///
    /// Fails if the event receiver has been dropped.
    #[instrument(skip(self), fields(think = ?self.timing.think, restart = ?self.timing.restart))]
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting game orchestration");
        self.publish()?;

        loop {
            let deadline = self.pending.map(|(_, at)| at);
            let timer = async move {
                match deadline {
                    Some(at) => sleep_until(at).await,
                    None => std::future::pending().await,
                }
            };

            tokio::select! {
                command = self.commands.recv() => match command {
                    Some(Command::Quit) | None => {
                        info!("Stopping game orchestration");
                        return Ok(());
                    }
                    Some(command) => self.handle(command)?,
                },
                () = timer => self.fire()?,
            }
        }
    }

    fn handle(&mut self, command: Command) -> Result<()> {
        debug!(?command, "Handling command");
        match command {
            Command::Select(index) => match self.session.play_human(index) {
                Ok(transition) => {
                    self.cue(SoundCue::Click)?;
                    self.advance(transition)?;
                }
                Err(e) => debug!(error = %e, "Ignoring invalid move"),
            },
            Command::Restart => {
                if let Some((pending, _)) = self.pending.take() {
                    debug!(?pending, "Cancelled pending step");
                }
                self.session.restart();
                info!("Round restarted on request");
                self.publish()?;
            }
            Command::ResetScores => {
                self.session.reset_scores();
                info!("Scores reset");
                self.publish()?;
            }
            Command::Quit => {}
        }
        Ok(())
    }

    fn fire(&mut self) -> Result<()> {
        let Some((pending, _)) = self.pending.take() else {
            return Ok(());
        };
        debug!(?pending, "Timer fired");
        match pending {
            Pending::OpponentMove => match self.session.play_opponent(&mut self.chooser) {
                Some(reply) => {
                    info!(position = %reply.position, tier = ?reply.tier, "Opponent moved");
                    self.cue(SoundCue::OpponentMove)?;
                    self.advance(reply.transition)?;
                }
                None => warn!("Opponent had no move to make"),
            },
            Pending::Restart => {
                self.session.restart();
                info!("New round");
                self.publish()?;
            }
        }
        Ok(())
    }

    fn advance(&mut self, transition: Transition) -> Result<()> {
        match transition {
            Transition::OpponentToMove => self.schedule(Pending::OpponentMove, self.timing.think),
            Transition::HumanToMove => self.pending = None,
            Transition::RoundOver(result) => {
                info!(?result, "Round over");
                self.cue(SoundCue::for_result(result))?;
                self.schedule(Pending::Restart, self.timing.restart);
            }
        }
        self.publish()
    }

    fn schedule(&mut self, pending: Pending, delay: Duration) {
        debug!(?pending, ?delay, "Scheduling");
        self.pending = Some((pending, Instant::now() + delay));
    }

    fn cue(&self, cue: SoundCue) -> Result<()> {
        self.event_tx.send(GameEvent::Cue(cue))?;
        Ok(())
    }

    fn publish(&self) -> Result<()> {
        self.event_tx
            .send(GameEvent::StateChanged(self.session.snapshot()))?;
        Ok(())
    }
}
