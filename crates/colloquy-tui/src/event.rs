//! Event handling for the colloquy TUI.

use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent,
    MouseEventKind,
};
use std::time::Duration;
use tokio::sync::mpsc;

/// Rows moved by PageUp/PageDown.
const PAGE_SCROLL: usize = 10;

/// Rows moved per mouse wheel notch.
const WHEEL_SCROLL: usize = 3;

/// Events that can occur in the TUI.
#[derive(Debug, Clone)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// A mouse event occurred.
    Mouse(MouseEvent),
    /// Terminal was resized.
    Resize(u16, u16),
}

/// Event handler that reads the terminal on a background thread.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    /// Create a new event handler polling at the given interval.
    pub fn new(poll_interval_ms: u64) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        // Spawn blocking thread for event polling (crossterm uses blocking I/O)
        std::thread::spawn(move || {
            let poll_interval = Duration::from_millis(poll_interval_ms);
            while !tx.is_closed() {
                if !event::poll(poll_interval).unwrap_or(false) {
                    continue;
                }
                let Ok(evt) = event::read() else {
                    continue;
                };
                let event = match evt {
                    CrosstermEvent::Key(key) => Event::Key(key),
                    CrosstermEvent::Mouse(mouse) => Event::Mouse(mouse),
                    CrosstermEvent::Resize(w, h) => Event::Resize(w, h),
                    _ => continue,
                };
                if tx.send(event).is_err() {
                    break;
                }
            }
        });

        Self { rx }
    }

    /// Get the next event, waiting until one is available.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

/// What a key press means to the chat view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Clear a non-empty draft, otherwise quit.
    Escape,
    Submit,
    Insert(char),
    Newline,
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    HistoryPrev,
    HistoryNext,
    ScrollUp(usize),
    ScrollDown(usize),
    None,
}

/// Convert a key event to an action.
pub fn key_to_action(key: KeyEvent) -> Action {
    if key.kind == KeyEventKind::Release {
        return Action::None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl {
        return match key.code {
            KeyCode::Char('c') => Action::Quit,
            KeyCode::Char('j') => Action::Newline,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Esc => Action::Escape,
        KeyCode::Enter
            if key
                .modifiers
                .intersects(KeyModifiers::SHIFT | KeyModifiers::ALT) =>
        {
            Action::Newline
        }
        KeyCode::Enter => Action::Submit,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Delete => Action::Delete,
        KeyCode::Left => Action::Left,
        KeyCode::Right => Action::Right,
        KeyCode::Home => Action::Home,
        KeyCode::End => Action::End,
        KeyCode::Up => Action::HistoryPrev,
        KeyCode::Down => Action::HistoryNext,
        KeyCode::PageUp => Action::ScrollUp(PAGE_SCROLL),
        KeyCode::PageDown => Action::ScrollDown(PAGE_SCROLL),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => Action::Insert(c),
        _ => Action::None,
    }
}

/// Convert a mouse event to an action. Only the wheel does anything.
pub fn mouse_to_action(mouse: MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::ScrollUp => Action::ScrollUp(WHEEL_SCROLL),
        MouseEventKind::ScrollDown => Action::ScrollDown(WHEEL_SCROLL),
        _ => Action::None,
    }
}
