//! Test utilities for colloquy-tui rendering tests.
//!
//! Helpers for rendering widgets and the whole app into buffers and
//! flattening them into strings for assertions and snapshots.

use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, widgets::Widget, Terminal};

/// Default terminal width for tests.
pub const TEST_WIDTH: u16 = 80;

/// Default terminal height for tests.
pub const TEST_HEIGHT: u16 = 24;

/// Create a test terminal with custom dimensions.
pub fn create_test_terminal_sized(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("Failed to create test terminal")
}

/// Convert a buffer to a string representation for snapshot testing.
///
/// Trailing whitespace is trimmed from each row.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        while result.ends_with(' ') {
            result.pop();
        }
        result.push('\n');
    }

    if result.ends_with('\n') {
        result.pop();
    }

    result
}

/// Render a widget into a fresh buffer.
pub fn render_widget_to_buffer<W: Widget>(widget: W, width: u16, height: u16) -> Buffer {
    let area = Rect::new(0, 0, width, height);
    let mut buffer = Buffer::empty(area);
    widget.render(area, &mut buffer);
    buffer
}

/// Render a widget and return it as a string.
pub fn render_widget_to_string<W: Widget>(widget: W, width: u16, height: u16) -> String {
    buffer_to_string(&render_widget_to_buffer(widget, width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_terminal() {
        let terminal = create_test_terminal_sized(TEST_WIDTH, TEST_HEIGHT);
        let size = terminal.size().unwrap();
        assert_eq!(size.width, TEST_WIDTH);
        assert_eq!(size.height, TEST_HEIGHT);
    }

    #[test]
    fn test_buffer_to_string() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buffer = Buffer::empty(area);
        buffer.set_string(0, 0, "Hello", ratatui::style::Style::default());
        buffer.set_string(0, 1, "World", ratatui::style::Style::default());

        assert_eq!(buffer_to_string(&buffer), "Hello\nWorld\n");
    }
}
