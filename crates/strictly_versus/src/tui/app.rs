//! Application state and logic.

use super::input::{KeyAction, map_key};
use crate::orchestrator::{Command, GameEvent, SoundCue};
use crossterm::event::KeyCode;
use strictly_tictactoe::{Match, Position, Snapshot};
use tracing::debug;

/// Main application state.
pub struct App {
    snapshot: Snapshot,
    cursor: Position,
    last_cue: Option<SoundCue>,
    bell: bool,
    bell_pending: bool,
}

impl App {
    /// Creates a new application showing an empty board.
    pub fn new(bell: bool) -> Self {
        Self {
            snapshot: Match::new().snapshot(),
            cursor: Position::Center,
            last_cue: None,
            bell,
            bell_pending: false,
        }
    }

    /// Latest state from the orchestrator.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Most recent sound cue, shown as a hint in the status bar.
    pub fn last_cue(&self) -> Option<SoundCue> {
        self.last_cue
    }

    /// Handles a game event from the orchestrator.
    pub fn handle_event(&mut self, event: GameEvent) {
        debug!(?event, "Handling game event");

        match event {
            GameEvent::StateChanged(snapshot) => {
                self.snapshot = snapshot;
            }
            GameEvent::Cue(cue) => {
                self.last_cue = Some(cue);
                if self.bell && cue.ends_round() {
                    self.bell_pending = true;
                }
            }
        }
    }

    /// Handles a key press, returning a command for the orchestrator if any.
    pub fn handle_key(&mut self, key: KeyCode) -> Option<Command> {
        match map_key(self.cursor, key) {
            KeyAction::Send(command) => Some(command),
            KeyAction::Cursor(position) => {
                self.cursor = position;
                None
            }
            KeyAction::Ignore => None,
        }
    }

    /// Returns true once per round-ending cue when the bell is enabled.
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell_pending)
    }
}
