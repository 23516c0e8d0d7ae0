//! Terminal UI for Strictly Versus.

mod app;
mod input;
mod ui;

pub use app::App;

use crate::config::VersusConfig;
use crate::orchestrator::{Command, GameEvent, Orchestrator};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Write};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

/// How long the UI waits for game events before checking the keyboard again.
const FRAME: Duration = Duration::from_millis(50);

/// Runs the game in the terminal until the player quits.
#[instrument(skip_all)]
pub async fn run_tui(config: VersusConfig) -> Result<()> {
    info!("Starting Strictly Versus TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels for communication
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    let mut orchestrator =
        Orchestrator::new(config.chooser(), config.timing(), command_rx, event_tx);

    // Spawn orchestrator in background
    let orchestrator_handle = tokio::spawn(async move {
        if let Err(e) = orchestrator.run().await {
            error!(error = %e, "Orchestrator error");
        }
    });

    let app = App::new(*config.bell());
    let res = run_app(&mut terminal, app, &command_tx, &mut event_rx).await;

    let _ = command_tx.send(Command::Quit);
    if let Err(e) = orchestrator_handle.await {
        error!(error = %e, "Orchestrator task failed");
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "UI loop error");
    }
    info!("Strictly Versus TUI stopped");
    res
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    command_tx: &mpsc::UnboundedSender<Command>,
    event_rx: &mut mpsc::UnboundedReceiver<GameEvent>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if app.take_bell() {
            let mut out = io::stdout();
            out.write_all(b"\x07")?;
            out.flush()?;
        }

        // Keyboard input never blocks the runtime.
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
                && let Some(command) = app.handle_key(key.code)
            {
                debug!(?command, "Key mapped to command");
                command_tx.send(command)?;
                if command == Command::Quit {
                    return Ok(());
                }
            }
        }

        tokio::select! {
            event = event_rx.recv() => match event {
                Some(event) => app.handle_event(event),
                None => {
                    info!("Orchestrator stopped");
                    return Ok(());
                }
            },
            () = tokio::time::sleep(FRAME) => {}
        }
    }
}
