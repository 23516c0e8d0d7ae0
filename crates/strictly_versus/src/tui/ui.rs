//! Screen layout and board rendering.

use super::app::App;
use crate::orchestrator::SoundCue;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use strictly_tictactoe::{Board, Player, Position, Square, Status};

/// Draws the whole screen.
pub fn draw(f: &mut Frame, app: &App) {
    let outer = Block::default()
        .title(" Strictly Versus: Tic-Tac-Toe ")
        .borders(Borders::ALL);
    let inner = outer.inner(f.area());
    f.render_widget(outer, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(11),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .split(inner);

    render_scores(f, chunks[0], app);
    render_board(f, chunks[1], app.snapshot().board, app.cursor());
    render_status(f, chunks[2], app);
    render_help(f, chunks[3]);
}

fn render_scores(f: &mut Frame, area: Rect, app: &App) {
    let scores = app.snapshot().scores;
    let text = format!("You (X): {}    AI (O): {}", scores.player(), scores.opponent());
    let paragraph = Paragraph::new(text)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, area: Rect, app: &App) {
    let status = app.snapshot().status;
    let color = match status {
        Status::HumanToMove => Color::Green,
        Status::OpponentThinking => Color::Yellow,
        Status::Won(_) | Status::Draw => Color::Magenta,
    };
    let mut lines = vec![Line::styled(status.to_string(), Style::default().fg(color))];
    if let Some(cue) = app.last_cue() {
        lines.push(Line::styled(cue_label(cue), Style::default().fg(Color::DarkGray)));
    }
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn cue_label(cue: SoundCue) -> &'static str {
    match cue {
        SoundCue::Click => "*click*",
        SoundCue::OpponentMove => "*tock*",
        SoundCue::Cheer => "*applause*",
        SoundCue::Boo => "*boo*",
        SoundCue::Draw => "*shrug*",
    }
}

fn render_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new("1-9 or arrows+Enter: play   r: restart   s: reset scores   q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(help, area);
}

/// Renders the tic-tac-toe board with the cursor highlighted.
fn render_board(f: &mut Frame, area: Rect, board: Board, cursor: Position) {
    let board_area = center_rect(area, 29, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        render_row(f, area, &board, row * 3, cursor);
    }
    render_separator(f, rows[1]);
    render_separator(f, rows[3]);
}

fn render_row(f: &mut Frame, area: Rect, board: &Board, start: usize, cursor: Position) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(9),
            Constraint::Length(1),
            Constraint::Length(9),
            Constraint::Length(1),
            Constraint::Length(9),
        ])
        .split(area);

    for (offset, area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        render_square(f, area, board, start + offset, cursor);
    }
    render_vertical_sep(f, cols[1]);
    render_vertical_sep(f, cols[3]);
}

fn render_square(f: &mut Frame, area: Rect, board: &Board, index: usize, cursor: Position) {
    let (text, mut style) = match board.get(index) {
        Some(Square::Occupied(Player::X)) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Square::Occupied(Player::O)) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Some(Square::Empty) | None => (
            format!("{}", index + 1),
            Style::default().fg(Color::DarkGray),
        ),
    };
    if cursor.to_index() == index {
        style = style.add_modifier(Modifier::REVERSED);
    }
    // Middle line of the three-line cell.
    let paragraph = Paragraph::new(vec![Line::raw(""), Line::raw(text)])
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::raw("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).expect("test backend");
        terminal.draw(|f| draw(f, app)).expect("draw");
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_initial_screen_shows_prompt_and_scores() {
        let screen = render(&App::new(false));
        assert!(screen.contains("Your turn (X)"), "{screen}");
        assert!(screen.contains("You (X): 0"), "{screen}");
        assert!(screen.contains("AI (O): 0"), "{screen}");
    }
}
