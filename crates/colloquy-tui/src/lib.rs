//! colloquy-tui: Terminal renderer for the colloquy chat view
//!
//! This crate provides the TUI layer for colloquy, including:
//! - The chat screen (header, transcript, composer)
//! - Message bubbles and the markdown formatter
//! - Themes and Unicode/ASCII glyph sets
//! - The event loop that interleaves input with deferred replies

mod app;
mod event;
mod screen;
#[cfg(test)]
pub mod test_utils;
pub mod text;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use colloquy_engine;
pub use event::{key_to_action, mouse_to_action, Action, Event, EventHandler};
pub use screen::ChatScreen;
pub use theme::{GlyphMode, GlyphSet, Theme};

use colloquy_engine::{Config, Reply};
use crossterm::{
    cursor::Show as ShowCursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};

/// Poll interval of the terminal reader thread.
const EVENT_POLL_MS: u64 = 250;

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the TUI application.
///
/// This is the main entry point for the TUI. It sets up the terminal,
/// runs the event loop, and restores the terminal on exit.
pub async fn run_tui(config: Config, glyphs: GlyphSet) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal with RAII guard for cleanup
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, glyphs);
    let mut events = EventHandler::new(EVENT_POLL_MS);
    tracing::info!(
        responder = app.scheduler.responder_name(),
        theme = ?app.config.theme,
        "chat view started"
    );

    let result = run_loop(&mut terminal, &mut app, &mut events).await;
    app.shutdown();

    // Restore cursor before guard drops
    terminal.show_cursor()?;

    result
}

/// What woke the loop up.
enum Step {
    Input(Option<Event>),
    Reply(Reply),
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            ChatScreen.render(app, area, frame.buffer_mut());
        })?;

        if app.should_quit {
            return Ok(());
        }

        let step = tokio::select! {
            event = events.next() => Step::Input(event),
            Some(reply) = app.scheduler.next_reply() => Step::Reply(reply),
        };

        match step {
            Step::Input(Some(Event::Key(key))) => app.handle_key(key),
            Step::Input(Some(Event::Mouse(mouse))) => app.handle_action(mouse_to_action(mouse)),
            // The next draw picks up the new size
            Step::Input(Some(Event::Resize(_, _))) => {}
            // Reader thread is gone; nothing more can arrive
            Step::Input(None) => return Ok(()),
            Step::Reply(reply) => app.apply_reply(reply),
        }
    }
}

/// Returns the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
