//! Markdown styling configuration.
//!
//! Provides [`MarkdownStyles`] which maps markdown elements to ratatui styles.

use ratatui::style::{Modifier, Style};

use crate::theme::{GlyphSet, Theme};

/// Styles for rendering markdown elements.
#[derive(Debug, Clone)]
pub struct MarkdownStyles {
    /// H1 header style.
    pub h1: Style,
    /// H2+ header style.
    pub h2: Style,
    /// Inline code style.
    pub code: Style,
    /// Code block line style.
    pub code_block: Style,
    /// Emphasis (italic) style.
    pub emphasis: Style,
    /// Strong (bold) style.
    pub strong: Style,
    /// Strikethrough style.
    pub strikethrough: Style,
    /// List marker (bullet/number) style.
    pub list_marker: Style,
    /// Link text style.
    pub link: Style,
    /// Link destination shown after the text.
    pub link_url: Style,
    /// Blockquote style.
    pub blockquote: Style,
    /// Normal text style.
    pub text: Style,
    /// Bullet glyph for unordered lists.
    pub bullet: &'static str,
}

impl MarkdownStyles {
    /// Create styles from a theme and glyph set.
    pub fn new(theme: &Theme, glyphs: &GlyphSet) -> Self {
        Self {
            h1: Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
            h2: Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            code: Style::default().fg(theme.secondary).bg(theme.surface),
            code_block: Style::default().fg(theme.secondary).bg(theme.surface),
            emphasis: Style::default().add_modifier(Modifier::ITALIC),
            strong: Style::default().add_modifier(Modifier::BOLD),
            strikethrough: Style::default().add_modifier(Modifier::CROSSED_OUT),
            list_marker: Style::default().fg(theme.muted),
            link: Style::default()
                .fg(theme.info)
                .add_modifier(Modifier::UNDERLINED),
            link_url: Style::default().fg(theme.muted),
            blockquote: Style::default()
                .fg(theme.subtext)
                .add_modifier(Modifier::ITALIC),
            text: Style::default().fg(theme.text),
            bullet: glyphs.bullet(),
        }
    }
}

impl Default for MarkdownStyles {
    fn default() -> Self {
        Self::new(&Theme::default(), &GlyphSet::default())
    }
}
