//! Terminal setup, teardown, and main event loop.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;

use crate::app::OracleApp;

/// How long to wait for input when nothing is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Launch the TUI application.
pub fn run(mut app: OracleApp) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Main event loop.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut OracleApp,
) -> Result<(), String> {
    loop {
        app.tick(Instant::now());
        terminal
            .draw(|frame| app.draw(frame))
            .map_err(|e| format!("draw error: {e}"))?;

        if app.should_quit {
            return Ok(());
        }

        // Wake up in time to reveal a pending answer.
        let timeout = app
            .time_to_reveal(Instant::now())
            .map_or(IDLE_POLL, |left| left.min(IDLE_POLL));
        if !event::poll(timeout).map_err(|e| format!("event error: {e}"))? {
            continue;
        }

        match event::read().map_err(|e| format!("event error: {e}"))? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.handle_key(key, Instant::now());
            }
            _ => {}
        }
    }
}
