//! Theme components for the chat view.
//!
//! This module provides:
//! - [`Theme`] - Color palette (Catppuccin Mocha/Latte/High Contrast)
//! - [`GlyphSet`] - Chrome glyphs with Unicode/ASCII modes

mod colors;
mod glyphs;

pub use colors::Theme;
pub use glyphs::{GlyphMode, GlyphSet};
