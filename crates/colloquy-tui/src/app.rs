//! Application state for the colloquy TUI.

use std::sync::Arc;

use colloquy_engine::{ChatSession, Config, Reply, ReplyScheduler, Responder, SimulatedResponder};
use crossterm::event::KeyEvent;

use crate::event::{key_to_action, Action};
use crate::text::MarkdownStyles;
use crate::theme::{GlyphSet, Theme};
use crate::widgets::TextInputState;

/// Main application state.
pub struct App {
    pub config: Config,
    pub theme: Theme,
    pub glyphs: GlyphSet,
    styles: MarkdownStyles,
    pub session: ChatSession,
    pub scheduler: ReplyScheduler,
    /// The draft being composed.
    pub input: TextInputState,
    /// Transcript scroll offset, in rows up from the bottom.
    pub transcript_scroll: usize,
    pub should_quit: bool,
}

impl App {
    /// Create an app that answers with the simulated responder.
    pub fn new(config: Config, glyphs: GlyphSet) -> Self {
        let responder = SimulatedResponder::with_delay(config.reply_delay());
        Self::with_responder(config, glyphs, Arc::new(responder))
    }

    /// Create an app backed by a specific responder.
    pub fn with_responder(
        config: Config,
        glyphs: GlyphSet,
        responder: Arc<dyn Responder>,
    ) -> Self {
        let theme = Theme::from_name(config.theme);
        let styles = MarkdownStyles::new(&theme, &glyphs);
        Self {
            config,
            theme,
            glyphs,
            styles,
            session: ChatSession::new(),
            scheduler: ReplyScheduler::new(responder),
            input: TextInputState::new(),
            transcript_scroll: 0,
            should_quit: false,
        }
    }

    pub fn styles(&self) -> &MarkdownStyles {
        &self.styles
    }

    /// Whether the current draft can be sent.
    pub fn can_send(&self) -> bool {
        !self.input.is_blank()
    }

    /// Submit the draft.
    ///
    /// A blank draft is left untouched and nothing is sent. Otherwise the user
    /// message is appended, the draft cleared and a reply scheduled. Returns
    /// whether anything was sent.
    pub fn submit(&mut self) -> bool {
        let Some(request) = self.session.submit(self.input.content()) else {
            return false;
        };
        self.input.submit();
        self.transcript_scroll = 0;
        self.scheduler.schedule(request);
        true
    }

    /// Append a finished reply to the transcript.
    pub fn apply_reply(&mut self, reply: Reply) {
        let id = self.session.accept_reply(reply);
        tracing::debug!(%id, pending = self.scheduler.pending(), "reply shown");
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.handle_action(key_to_action(key));
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Escape => {
                if self.input.is_empty() {
                    self.should_quit = true;
                } else {
                    self.input.clear();
                }
            }
            Action::Submit => {
                self.submit();
            }
            Action::Insert(c) => self.input.insert(c),
            Action::Newline => self.input.insert('\n'),
            Action::Backspace => self.input.backspace(),
            Action::Delete => self.input.delete(),
            Action::Left => self.input.move_left(),
            Action::Right => self.input.move_right(),
            Action::Home => self.input.move_home(),
            Action::End => self.input.move_end(),
            Action::HistoryPrev => self.input.history_prev(),
            Action::HistoryNext => self.input.history_next(),
            Action::ScrollUp(rows) => {
                self.transcript_scroll = self.transcript_scroll.saturating_add(rows);
            }
            Action::ScrollDown(rows) => {
                self.transcript_scroll = self.transcript_scroll.saturating_sub(rows);
            }
            Action::None => {}
        }
    }

    /// Keep the scroll offset within what the transcript can show.
    pub fn clamp_scroll(&mut self, max: usize) {
        self.transcript_scroll = self.transcript_scroll.min(max);
    }

    /// Abort outstanding replies before the view goes away.
    pub fn shutdown(&mut self) {
        let pending = self.scheduler.pending();
        self.scheduler.cancel_all();
        tracing::info!(
            pending,
            messages = self.session.conversation().len(),
            "chat view closed"
        );
    }
}
