//! Markdown rendering using pulldown-cmark.
//!
//! Provides [`render_markdown`] to convert markdown text to styled ratatui Lines.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::{
    style::Style,
    text::{Line, Span},
};

use super::styles::MarkdownStyles;

/// Render markdown text to styled ratatui Lines.
///
/// Lines are not wrapped; pass the result through
/// [`wrap_lines`](super::wrap_lines) to fit a width. Trailing blank lines
/// are dropped.
pub fn render_markdown(input: &str, styles: &MarkdownStyles) -> Vec<Line<'static>> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut renderer = MarkdownRenderer::new(styles);
    renderer.run(Parser::new_ext(input, options));
    renderer.finish()
}

/// A list currently being rendered. `next` is `None` for bullet lists.
struct ListFrame {
    next: Option<u64>,
}

/// Internal renderer that processes pulldown-cmark events.
struct MarkdownRenderer<'s> {
    styles: &'s MarkdownStyles,
    lines: Vec<Line<'static>>,
    current_spans: Vec<Span<'static>>,
    /// Stack of active styles for nested formatting.
    style_stack: Vec<Style>,
    lists: Vec<ListFrame>,
    pending_list_marker: Option<String>,
    in_code_block: bool,
    blockquote_depth: usize,
    /// Destination and collected text of the link being rendered.
    link: Option<(String, String)>,
}

impl<'s> MarkdownRenderer<'s> {
    fn new(styles: &'s MarkdownStyles) -> Self {
        Self {
            styles,
            lines: Vec::new(),
            current_spans: Vec::new(),
            style_stack: Vec::new(),
            lists: Vec::new(),
            pending_list_marker: None,
            in_code_block: false,
            blockquote_depth: 0,
            link: None,
        }
    }

    fn run<'a>(&mut self, parser: impl Iterator<Item = Event<'a>>) {
        for event in parser {
            self.handle_event(event);
        }
        self.flush_line();
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        while self.lines.last().is_some_and(|l| l.spans.is_empty()) {
            self.lines.pop();
        }
        self.lines
    }

    fn handle_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.add_text(&text),
            Event::Code(code) => {
                self.begin_inline();
                let style = self.nested_style(Style::default()).patch(self.styles.code);
                self.current_spans
                    .push(Span::styled(format!(" {code} "), style));
                if let Some((_, text)) = self.link.as_mut() {
                    text.push_str(&code);
                }
            }
            Event::SoftBreak => self.add_text(" "),
            Event::HardBreak => self.flush_line(),
            Event::TaskListMarker(checked) => {
                let checkbox = if checked { "[x] " } else { "[ ] " };
                self.begin_inline();
                self.current_spans
                    .push(Span::styled(checkbox, self.styles.list_marker));
            }
            Event::Rule => {
                self.flush_line();
                self.lines
                    .push(Line::from(Span::styled("───", self.styles.list_marker)));
                self.blank_line();
            }
            Event::Html(html) | Event::InlineHtml(html) => self.add_text(&html),
            Event::FootnoteReference(label) => self.add_text(&format!("[{label}]")),
        }
    }

    fn start_tag(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Heading { level, .. } => {
                self.flush_line();
                let style = match level {
                    HeadingLevel::H1 => self.styles.h1,
                    _ => self.styles.h2,
                };
                self.style_stack.push(style);
            }
            Tag::Emphasis => self.style_stack.push(self.styles.emphasis),
            Tag::Strong => self.style_stack.push(self.styles.strong),
            Tag::Strikethrough => self.style_stack.push(self.styles.strikethrough),
            Tag::Link { dest_url, .. } => {
                self.style_stack.push(self.styles.link);
                self.link = Some((dest_url.to_string(), String::new()));
            }
            Tag::CodeBlock(_) => {
                self.flush_line();
                self.in_code_block = true;
            }
            Tag::List(start) => {
                self.flush_line();
                self.lists.push(ListFrame { next: start });
            }
            Tag::Item => {
                self.flush_line();
                let indent = "  ".repeat(self.lists.len().saturating_sub(1));
                let marker = match self.lists.last_mut() {
                    Some(ListFrame { next: Some(n) }) => {
                        let marker = format!("{indent}{n}. ");
                        *n += 1;
                        marker
                    }
                    _ => format!("{indent}{} ", self.styles.bullet),
                };
                self.pending_list_marker = Some(marker);
            }
            Tag::BlockQuote => {
                self.flush_line();
                self.blockquote_depth += 1;
            }
            _ => {}
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Heading(_) => {
                self.flush_line();
                self.style_stack.pop();
                self.blank_line();
            }
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough => {
                self.style_stack.pop();
            }
            TagEnd::Link => {
                self.style_stack.pop();
                if let Some((url, text)) = self.link.take() {
                    if !url.is_empty() && url != text {
                        self.current_spans
                            .push(Span::styled(format!(" <{url}>"), self.styles.link_url));
                    }
                }
            }
            TagEnd::CodeBlock => {
                self.flush_line();
                self.in_code_block = false;
                self.blank_line();
            }
            TagEnd::List(_) => {
                self.flush_line();
                self.lists.pop();
                if self.lists.is_empty() {
                    self.blank_line();
                }
            }
            TagEnd::Item => self.flush_line(),
            TagEnd::BlockQuote => {
                self.flush_line();
                self.blockquote_depth = self.blockquote_depth.saturating_sub(1);
                self.blank_line();
            }
            TagEnd::Paragraph => {
                self.flush_line();
                // List items separate themselves
                if self.lists.is_empty() {
                    self.blank_line();
                }
            }
            _ => {}
        }
    }

    /// Emit list marker and blockquote prefix before the first inline content.
    fn begin_inline(&mut self) {
        if self.current_spans.is_empty() && self.blockquote_depth > 0 {
            self.current_spans.push(Span::styled(
                "> ".repeat(self.blockquote_depth),
                self.styles.blockquote,
            ));
        }
        if let Some(marker) = self.pending_list_marker.take() {
            self.current_spans
                .push(Span::styled(marker, self.styles.list_marker));
        }
    }

    fn add_text(&mut self, text: &str) {
        if self.in_code_block {
            let indent = "  ".repeat(self.lists.len());
            for line in text.lines() {
                self.current_spans.push(Span::styled(
                    format!("{indent}  {line}"),
                    self.styles.code_block,
                ));
                self.flush_line();
            }
            return;
        }

        self.begin_inline();
        if let Some((_, link_text)) = self.link.as_mut() {
            link_text.push_str(text);
        }

        let style = self.nested_style(self.styles.text);
        self.current_spans.push(Span::styled(text.to_string(), style));
    }

    /// `base` with the blockquote style and every open inline style applied.
    fn nested_style(&self, base: Style) -> Style {
        let mut style = base;
        if self.blockquote_depth > 0 {
            style = style.patch(self.styles.blockquote);
        }
        for s in &self.style_stack {
            style = style.patch(*s);
        }
        style
    }

    fn flush_line(&mut self) {
        if !self.current_spans.is_empty() {
            let spans = std::mem::take(&mut self.current_spans);
            self.lines.push(Line::from(spans));
        }
    }

    /// Push a separator unless the output is empty or already ends in one.
    fn blank_line(&mut self) {
        if self.lines.last().is_some_and(|l| !l.spans.is_empty()) {
            self.lines.push(Line::default());
        }
    }
}
