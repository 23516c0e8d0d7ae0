//! Keyboard mapping: cursor movement and key-to-command translation.

use crate::orchestrator::Command;
use crossterm::event::KeyCode;
use strictly_tictactoe::Position;

/// Moves the cursor one cell for an arrow key; stops at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

/// What a key press means to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward a command to the orchestrator.
    Send(Command),
    /// Move the highlighted cell.
    Cursor(Position),
    /// Nothing to do.
    Ignore,
}

/// Translates a key press given the current cursor.
///
/// Digits 1-9 play the matching cell directly; Enter or space plays the
/// highlighted cell.
pub fn map_key(cursor: Position, key: KeyCode) -> KeyAction {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Send(Command::Quit),
        KeyCode::Char('r') => KeyAction::Send(Command::Restart),
        KeyCode::Char('s') => KeyAction::Send(Command::ResetScores),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|digit| KeyAction::Send(Command::Select(digit as usize - 1)))
            .unwrap_or(KeyAction::Ignore),
        KeyCode::Enter | KeyCode::Char(' ') => {
            KeyAction::Send(Command::Select(cursor.to_index()))
        }
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            KeyAction::Cursor(move_cursor(cursor, key))
        }
        _ => KeyAction::Ignore,
    }
}
