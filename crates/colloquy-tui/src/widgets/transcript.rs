//! Transcript widget.
//!
//! Stacks one bubble per message with a blank row between them. The scroll
//! offset counts rows up from the bottom, so an offset of 0 always shows
//! the newest message.

use std::ops::Range;

use colloquy_engine::{Conversation, MessageId};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Margin, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Paragraph, Widget},
};

use super::bubble::MessageBubble;
use crate::text::MarkdownStyles;
use crate::theme::Theme;

/// Shown while the conversation is empty.
const GREETING: &str = "What can I help with?";

/// Laid-out transcript: all rows plus the rows each bubble occupies.
pub struct TranscriptLayout {
    pub lines: Vec<Line<'static>>,
    pub bubbles: Vec<(MessageId, Range<usize>)>,
}

/// Scrollable stack of message bubbles.
pub struct Transcript<'a> {
    conversation: &'a Conversation,
    styles: &'a MarkdownStyles,
    theme: &'a Theme,
    scroll: usize,
}

impl<'a> Transcript<'a> {
    pub fn new(
        conversation: &'a Conversation,
        styles: &'a MarkdownStyles,
        theme: &'a Theme,
    ) -> Self {
        Self {
            conversation,
            styles,
            theme,
            scroll: 0,
        }
    }

    /// Set the scroll offset (rows up from the bottom).
    #[must_use]
    pub fn scroll(mut self, offset: usize) -> Self {
        self.scroll = offset;
        self
    }

    /// Lay every message out for a content width of `width` columns.
    pub fn layout(&self, width: u16) -> TranscriptLayout {
        let width = usize::from(width);
        let mut lines = Vec::new();
        let mut bubbles = Vec::with_capacity(self.conversation.len());

        for (i, message) in self.conversation.messages().iter().enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            let bubble = MessageBubble::new(message, self.styles, self.theme);
            let start = lines.len();
            lines.extend(bubble.lines(width));
            bubbles.push((bubble.key(), start..lines.len()));
        }

        TranscriptLayout { lines, bubbles }
    }

    /// Largest useful scroll offset for the given area.
    pub fn max_scroll(&self, area: Rect) -> usize {
        let inner = content_area(area);
        self.layout(inner.width)
            .lines
            .len()
            .saturating_sub(usize::from(inner.height))
    }
}

/// Area the bubbles are drawn into: one column of margin on either side.
fn content_area(area: Rect) -> Rect {
    area.inner(Margin::new(1, 0))
}

impl Widget for Transcript<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .style(Style::default().bg(self.theme.base))
            .render(area, buf);

        let inner = content_area(area);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.conversation.is_empty() {
            let row = Rect {
                y: inner.y + inner.height / 2,
                height: 1,
                ..inner
            };
            Paragraph::new(Line::styled(GREETING, Style::default().fg(self.theme.muted)))
                .alignment(Alignment::Center)
                .render(row, buf);
            return;
        }

        let lines = self.layout(inner.width).lines;
        let height = usize::from(inner.height);
        let max = lines.len().saturating_sub(height);
        let top = max - self.scroll.min(max);

        // Only the visible window is handed over; the full history can
        // outgrow a u16 row offset.
        let visible: Vec<Line<'static>> = lines.into_iter().skip(top).take(height).collect();
        Paragraph::new(visible).render(inner, buf);
    }
}
