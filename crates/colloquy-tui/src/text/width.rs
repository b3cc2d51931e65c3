//! Text width and truncation utilities.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Visual width of a string in terminal cells.
pub fn visual_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to fit within a maximum visual width.
///
/// Appends `ellipsis` when truncation occurs; returns an empty string when
/// not even the ellipsis fits.
pub fn truncate_to_width(s: &str, max_width: usize, ellipsis: &str) -> String {
    if visual_width(s) <= max_width {
        return s.to_string();
    }

    let ellipsis_width = visual_width(ellipsis);
    if ellipsis_width > max_width {
        return String::new();
    }
    let target = max_width - ellipsis_width;

    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > target {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result.push_str(ellipsis);
    result
}
