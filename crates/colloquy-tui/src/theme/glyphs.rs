//! Chrome glyphs with Unicode and ASCII fallback.
//!
//! ASCII mode is selected by `--ascii` or the `NO_COLOR` environment variable.

use ratatui::symbols::border;

/// Box borders drawn from plain ASCII.
const ASCII_BORDER: border::Set = border::Set {
    top_left: "+",
    top_right: "+",
    bottom_left: "+",
    bottom_right: "+",
    vertical_left: "|",
    vertical_right: "|",
    horizontal_top: "-",
    horizontal_bottom: "-",
};

/// Glyph mode configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphMode {
    /// Standard Unicode symbols.
    #[default]
    Unicode,
    /// ASCII-only fallback.
    Ascii,
}

impl GlyphMode {
    /// Pick a mode from the environment, respecting `NO_COLOR`.
    pub fn from_env() -> Self {
        if std::env::var_os("NO_COLOR").is_some() {
            Self::Ascii
        } else {
            Self::Unicode
        }
    }
}

/// Glyph set based on configured mode.
#[derive(Debug, Clone, Default)]
pub struct GlyphSet {
    mode: GlyphMode,
}

impl GlyphSet {
    pub fn new(mode: GlyphMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> GlyphMode {
        self.mode
    }

    /// Menu icon left of the title.
    pub fn menu(&self) -> &'static str {
        match self.mode {
            GlyphMode::Unicode => "☰",
            GlyphMode::Ascii => "=",
        }
    }

    /// Dropdown caret right of the title.
    pub fn caret(&self) -> &'static str {
        match self.mode {
            GlyphMode::Unicode => "▼",
            GlyphMode::Ascii => "v",
        }
    }

    /// Send button.
    pub fn send(&self) -> &'static str {
        match self.mode {
            GlyphMode::Unicode => "➤",
            GlyphMode::Ascii => ">",
        }
    }

    /// "More actions" button label.
    pub fn more(&self) -> &'static str {
        match self.mode {
            GlyphMode::Unicode => "…",
            GlyphMode::Ascii => "...",
        }
    }

    /// Bullet for unordered list items.
    pub fn bullet(&self) -> &'static str {
        match self.mode {
            GlyphMode::Unicode => "•",
            GlyphMode::Ascii => "*",
        }
    }

    /// Input box borders.
    pub fn border(&self) -> border::Set {
        match self.mode {
            GlyphMode::Unicode => border::ROUNDED,
            GlyphMode::Ascii => ASCII_BORDER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unicode() {
        assert_eq!(GlyphSet::default().mode(), GlyphMode::Unicode);
    }

    #[test]
    fn test_ascii_glyphs_are_ascii() {
        let glyphs = GlyphSet::new(GlyphMode::Ascii);
        for glyph in [
            glyphs.menu(),
            glyphs.caret(),
            glyphs.send(),
            glyphs.more(),
            glyphs.bullet(),
        ] {
            assert!(glyph.is_ascii(), "{glyph} is not ASCII");
        }
        assert!(glyphs.border().top_left.is_ascii());
        assert!(glyphs.border().horizontal_top.is_ascii());
    }

    #[test]
    fn test_unicode_glyphs() {
        let glyphs = GlyphSet::new(GlyphMode::Unicode);
        assert_eq!(glyphs.menu(), "☰");
        assert_eq!(glyphs.send(), "➤");
    }
}
