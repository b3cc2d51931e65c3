//! Composer widget: the draft input box, send button and the bar beneath.
//!
//! ```text
//! ╭──────────────────────────────────────╮
//! │█Ask anything                        ➤│
//! ╰──────────────────────────────────────╯
//!  [Reason] [Deep research] […] ChatGPT can make mista…
//! ```

use colloquy_engine::Config;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use super::TextInputState;
use crate::text::{truncate_to_width, visual_width};
use crate::theme::{GlyphSet, Theme};

/// The input box grows with the draft up to this many rows.
const MAX_INPUT_ROWS: u16 = 6;

const CURSOR: &str = "█";

/// Input form at the bottom of the screen.
pub struct Composer<'a> {
    input: &'a TextInputState,
    placeholder: &'a str,
    disclaimer: &'a str,
    theme: &'a Theme,
    glyphs: &'a GlyphSet,
    focused: bool,
}

impl<'a> Composer<'a> {
    pub fn new(
        input: &'a TextInputState,
        config: &'a Config,
        theme: &'a Theme,
        glyphs: &'a GlyphSet,
    ) -> Self {
        Self {
            input,
            placeholder: &config.placeholder,
            disclaimer: &config.disclaimer,
            theme,
            glyphs,
            focused: true,
        }
    }

    /// Set whether the input box has focus (shows the cursor).
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Whether the send button is enabled.
    pub fn send_enabled(&self) -> bool {
        !self.input.is_blank()
    }

    /// Rows needed for the given draft: input rows, borders and the bar.
    pub fn height(input: &TextInputState) -> u16 {
        let rows = u16::try_from(input.content().split('\n').count()).unwrap_or(MAX_INPUT_ROWS);
        rows.clamp(1, MAX_INPUT_ROWS) + 2 + 1
    }

    /// Draft lines with the cursor inserted, plus the cursor's row.
    fn input_lines(&self) -> (Vec<Line<'static>>, usize) {
        let text = Style::default().fg(self.theme.text);

        if self.input.is_empty() {
            let mut spans = Vec::new();
            if self.focused {
                spans.push(Span::styled(CURSOR, text));
            }
            spans.push(Span::styled(
                self.placeholder.to_string(),
                Style::default().fg(self.theme.muted),
            ));
            return (vec![Line::from(spans)], 0);
        }

        let (rows, cursor_row, cursor_col) = self.input.lines_with_cursor();
        let lines = rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                if self.focused && i == cursor_row {
                    let split = row
                        .char_indices()
                        .nth(cursor_col)
                        .map_or(row.len(), |(at, _)| at);
                    Line::from(vec![
                        Span::styled(row[..split].to_string(), text),
                        Span::styled(CURSOR, text),
                        Span::styled(row[split..].to_string(), text),
                    ])
                } else {
                    Line::styled((*row).to_string(), text)
                }
            })
            .collect();
        (lines, cursor_row)
    }

    fn render_input(&self, area: Rect, buf: &mut Buffer) {
        let border = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border
        };
        let block = Block::bordered()
            .border_set(self.glyphs.border())
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width < 3 || inner.height == 0 {
            return;
        }

        let send = self.glyphs.send();
        let send_width = u16::try_from(visual_width(send)).unwrap_or(1);
        let [text_area, _, send_area] = Layout::horizontal([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(send_width),
        ])
        .areas(inner);

        let (lines, cursor_row) = self.input_lines();
        let visible = usize::from(text_area.height);
        let top = cursor_row.saturating_sub(visible.saturating_sub(1));
        Paragraph::new(lines)
            .scroll((u16::try_from(top).unwrap_or(0), 0))
            .render(text_area, buf);

        let send_style = if self.send_enabled() {
            Style::default()
                .fg(self.theme.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.theme.muted)
        };
        let button = Rect {
            y: send_area.bottom() - 1,
            height: 1,
            ..send_area
        };
        Paragraph::new(Span::styled(send, send_style)).render(button, buf);
    }

    /// Decorative buttons on the left, disclaimer on the right.
    fn render_bar(&self, area: Rect, buf: &mut Buffer) {
        let button = Style::default().fg(self.theme.subtext);
        let more = format!("[{}]", self.glyphs.more());
        let mut spans = vec![
            Span::raw(" "),
            Span::styled("[Reason]", button),
            Span::raw(" "),
            Span::styled("[Deep research]", button),
            Span::raw(" "),
            Span::styled(more, button),
        ];

        let used: usize = spans.iter().map(|s| visual_width(&s.content)).sum();
        let remaining = usize::from(area.width).saturating_sub(used);
        if remaining > 1 {
            let disclaimer = truncate_to_width(self.disclaimer, remaining - 1, self.glyphs.more());
            let pad = remaining - visual_width(&disclaimer);
            spans.push(Span::raw(" ".repeat(pad)));
            spans.push(Span::styled(disclaimer, Style::default().fg(self.theme.muted)));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

impl Widget for Composer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .style(Style::default().bg(self.theme.base))
            .render(area, buf);
        if area.height < 2 {
            self.render_bar(area, buf);
            return;
        }

        let [input_area, bar_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);
        self.render_input(input_area, buf);
        self.render_bar(bar_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{render_widget_to_buffer, render_widget_to_string};
    use crate::theme::GlyphMode;
    use insta::assert_snapshot;

    fn render(input: &TextInputState, width: u16) -> Vec<String> {
        let config = Config::default();
        let theme = Theme::default();
        let glyphs = GlyphSet::new(GlyphMode::Ascii);
        let composer = Composer::new(input, &config, &theme, &glyphs);
        render_widget_to_string(composer, width, Composer::height(input))
            .lines()
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_send_enabled_tracks_blank_draft() {
        let config = Config::default();
        let theme = Theme::default();
        let glyphs = GlyphSet::default();
        let mut input = TextInputState::new();
        assert!(!Composer::new(&input, &config, &theme, &glyphs).send_enabled());

        input.insert_str("  \n ");
        assert!(!Composer::new(&input, &config, &theme, &glyphs).send_enabled());

        input.insert('x');
        assert!(Composer::new(&input, &config, &theme, &glyphs).send_enabled());
    }

    #[test]
    fn test_height_grows_with_draft() {
        let mut input = TextInputState::new();
        assert_eq!(Composer::height(&input), 4);
        input.insert_str("a\nb\nc");
        assert_eq!(Composer::height(&input), 6);
        input.insert_str(&"\nline".repeat(10));
        assert_eq!(Composer::height(&input), MAX_INPUT_ROWS + 3);
    }

    #[test]
    fn test_placeholder_when_empty() {
        let rows = render(&TextInputState::new(), 40);
        assert!(rows[1].starts_with("|█Ask anything"), "{}", rows[1]);
        assert!(rows[1].ends_with(" >|"));
    }

    #[test]
    fn test_draft_with_cursor() {
        let mut input = TextInputState::new();
        input.insert_str("hello");
        input.move_left();
        let rows = render(&input, 40);
        assert!(rows[1].starts_with("|hell█o"), "{}", rows[1]);
        assert!(!rows[1].contains("Ask anything"));
    }

    #[test]
    fn test_multiline_draft() {
        let mut input = TextInputState::new();
        input.insert_str("one\ntwo");
        let rows = render(&input, 40);
        assert_eq!(rows.len(), 5);
        assert!(rows[1].starts_with("|one "));
        assert!(rows[2].starts_with("|two█"));
    }

    #[test]
    fn test_send_button_style() {
        let config = Config::default();
        let theme = Theme::default();
        let glyphs = GlyphSet::new(GlyphMode::Ascii);
        let mut input = TextInputState::new();

        let composer = Composer::new(&input, &config, &theme, &glyphs);
        let buffer = render_widget_to_buffer(composer, 40, 4);
        let cell = &buffer[(38, 1)];
        assert_eq!(cell.symbol(), ">");
        assert_eq!(cell.fg, theme.muted);

        input.insert_str("hi");
        let composer = Composer::new(&input, &config, &theme, &glyphs);
        let buffer = render_widget_to_buffer(composer, 40, 4);
        assert_eq!(buffer[(38, 1)].fg, theme.primary);
    }

    #[test]
    fn test_bar_ascii() {
        let rows = render(&TextInputState::new(), 90);
        assert_snapshot!(
            rows[3].trim_start(),
            @"[Reason] [Deep research] [...]           ChatGPT can make mistakes. Check important info."
        );
    }

    #[test]
    fn test_bar_truncates_disclaimer() {
        let rows = render(&TextInputState::new(), 40);
        assert!(rows[3].ends_with(" ChatG..."), "{}", rows[3]);
    }
}
