//! Header bar widget.
//!
//! Format: ` ☰ ChatGPT ▼                                  [Share] `
//!
//! Everything here is decorative; none of it reacts to input.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::text::visual_width;
use crate::theme::{GlyphSet, Theme};

/// Label of the decorative share button.
const SHARE_LABEL: &str = "[Share]";

/// One-row header with title and a share button.
pub struct HeaderBar<'a> {
    title: &'a str,
    theme: &'a Theme,
    glyphs: &'a GlyphSet,
}

impl<'a> HeaderBar<'a> {
    pub fn new(title: &'a str, theme: &'a Theme, glyphs: &'a GlyphSet) -> Self {
        Self {
            title,
            theme,
            glyphs,
        }
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let left = vec![
            Span::raw(" "),
            Span::styled(self.glyphs.menu(), Style::default().fg(self.theme.text)),
            Span::raw(" "),
            Span::styled(
                self.title,
                Style::default()
                    .fg(self.theme.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(self.glyphs.caret(), Style::default().fg(self.theme.muted)),
        ];
        let right = vec![
            Span::styled(SHARE_LABEL, Style::default().fg(self.theme.subtext)),
            Span::raw(" "),
        ];

        let left_width: usize = left.iter().map(|s| visual_width(&s.content)).sum();
        let right_width: usize = right.iter().map(|s| visual_width(&s.content)).sum();
        let total = area.width as usize;

        let mut spans = left;
        if left_width + right_width < total {
            spans.push(Span::raw(" ".repeat(total - left_width - right_width)));
            spans.extend(right);
        }

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(self.theme.base))
            .render(Rect { height: 1, ..area }, buf);
    }
}
