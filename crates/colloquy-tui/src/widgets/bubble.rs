//! Message bubbles.
//!
//! User bubbles are right-aligned blocks of literal text on a tinted
//! background. Assistant bubbles are left-aligned and go through the
//! markdown formatter.

use colloquy_engine::{Message, MessageId, Role};
use ratatui::{
    layout::Alignment,
    style::Style,
    text::{Line, Span},
};

use crate::text::{render_markdown, wrap_line, wrap_lines, MarkdownStyles};
use crate::theme::Theme;

/// Share of the transcript width a bubble may use.
const BUBBLE_WIDTH_PERCENT: usize = 75;

/// Bubbles never get narrower than this (unless the area is).
const MIN_BUBBLE_WIDTH: usize = 10;

/// Maximum bubble width for a transcript of the given width.
pub fn bubble_width(area_width: usize) -> usize {
    (area_width * BUBBLE_WIDTH_PERCENT / 100)
        .max(MIN_BUBBLE_WIDTH)
        .min(area_width)
}

/// A single message laid out as lines.
pub struct MessageBubble<'a> {
    message: &'a Message,
    styles: &'a MarkdownStyles,
    theme: &'a Theme,
}

impl<'a> MessageBubble<'a> {
    pub fn new(message: &'a Message, styles: &'a MarkdownStyles, theme: &'a Theme) -> Self {
        Self {
            message,
            styles,
            theme,
        }
    }

    /// Rendering key.
    pub fn key(&self) -> MessageId {
        self.message.id()
    }

    /// Lay the bubble out for a transcript of `area_width` columns.
    pub fn lines(&self, area_width: usize) -> Vec<Line<'static>> {
        let max_width = bubble_width(area_width);
        match self.message.role() {
            Role::User => self.user_lines(max_width),
            Role::Assistant => self.assistant_lines(max_width),
        }
    }

    /// Literal text, padded into a rectangle with one column of margin.
    fn user_lines(&self, max_width: usize) -> Vec<Line<'static>> {
        let inner = max_width.saturating_sub(2).max(1);
        let wrapped: Vec<Line<'static>> = self
            .message
            .content()
            .split('\n')
            .flat_map(|line| wrap_line(Line::raw(line.to_string()), inner))
            .collect();
        let body_width = wrapped.iter().map(Line::width).max().unwrap_or(0);
        let style = Style::default()
            .fg(self.theme.user_text)
            .bg(self.theme.user_bubble);

        wrapped
            .into_iter()
            .map(|line| {
                let pad = body_width - line.width();
                let mut spans = vec![Span::styled(" ", style)];
                spans.extend(
                    line.spans
                        .into_iter()
                        .map(|s| Span::styled(s.content, style)),
                );
                spans.push(Span::styled(" ".repeat(pad + 1), style));
                Line::from(spans).alignment(Alignment::Right)
            })
            .collect()
    }

    fn assistant_lines(&self, max_width: usize) -> Vec<Line<'static>> {
        let lines = wrap_lines(render_markdown(self.message.content(), self.styles), max_width);
        if lines.is_empty() {
            return vec![Line::default().alignment(Alignment::Left)];
        }
        lines
            .into_iter()
            .map(|line| line.alignment(Alignment::Left))
            .collect()
    }
}
