//! Catppuccin color palettes for the chat view.

use colloquy_engine::ThemeName;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    // Backgrounds
    pub base: Color,
    pub surface: Color,

    // Foregrounds
    pub text: Color,
    pub subtext: Color,
    pub muted: Color,

    // Accents
    pub primary: Color,
    pub secondary: Color,
    pub info: Color,

    // Bubbles
    pub user_bubble: Color,
    pub user_text: Color,

    // Borders
    pub border: Color,
    pub border_focused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::mocha()
    }
}

impl Theme {
    /// Palette for a configured theme name.
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Mocha => Self::mocha(),
            ThemeName::Latte => Self::latte(),
            ThemeName::HighContrast => Self::high_contrast(),
        }
    }

    /// Catppuccin Mocha theme (default dark theme).
    pub fn mocha() -> Self {
        Self {
            base: Color::Rgb(30, 30, 46),       // #1e1e2e
            surface: Color::Rgb(49, 50, 68),    // #313244

            text: Color::Rgb(205, 214, 244),    // #cdd6f4
            subtext: Color::Rgb(166, 173, 200), // #a6adc8
            muted: Color::Rgb(108, 112, 134),   // #6c7086

            primary: Color::Rgb(180, 190, 254),   // #b4befe (lavender)
            secondary: Color::Rgb(148, 226, 213), // #94e2d5 (teal)
            info: Color::Rgb(137, 180, 250),      // #89b4fa (blue)

            user_bubble: Color::Rgb(49, 50, 68),   // #313244
            user_text: Color::Rgb(205, 214, 244),  // #cdd6f4

            border: Color::Rgb(69, 71, 90),            // #45475a
            border_focused: Color::Rgb(180, 190, 254), // #b4befe
        }
    }

    /// Catppuccin Latte theme (light theme).
    pub fn latte() -> Self {
        Self {
            base: Color::Rgb(239, 241, 245),    // #eff1f5
            surface: Color::Rgb(230, 233, 239), // #e6e9ef

            text: Color::Rgb(76, 79, 105),    // #4c4f69
            subtext: Color::Rgb(92, 95, 119), // #5c5f77
            muted: Color::Rgb(140, 143, 161), // #8c8fa1

            primary: Color::Rgb(114, 135, 253),  // #7287fd
            secondary: Color::Rgb(23, 146, 153), // #179299
            info: Color::Rgb(30, 102, 245),      // #1e66f5

            user_bubble: Color::Rgb(220, 224, 232), // #dce0e8
            user_text: Color::Rgb(76, 79, 105),     // #4c4f69

            border: Color::Rgb(188, 192, 204),         // #bcc0cc
            border_focused: Color::Rgb(114, 135, 253), // #7287fd
        }
    }

    /// High contrast theme for accessibility.
    pub fn high_contrast() -> Self {
        Self {
            base: Color::Black,
            surface: Color::Rgb(20, 20, 20),

            text: Color::White,
            subtext: Color::Rgb(200, 200, 200),
            muted: Color::Rgb(150, 150, 150),

            primary: Color::Cyan,
            secondary: Color::Magenta,
            info: Color::LightBlue,

            user_bubble: Color::White,
            user_text: Color::Black,

            border: Color::White,
            border_focused: Color::Cyan,
        }
    }
}
