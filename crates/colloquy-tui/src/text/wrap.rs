//! Text wrapping for styled ratatui Lines.
//!
//! Break points come from textwrap's first-fit algorithm; styles are carried
//! over by slicing the original spans at the chosen byte offsets.

use ratatui::text::{Line, Span};
use textwrap::core::{break_words, Word};
use textwrap::wrap_algorithms::wrap_first_fit;
use textwrap::WordSeparator;

use super::width::visual_width;

/// Wrap a vector of Lines to fit within the specified width.
///
/// Each line that exceeds the width is split into several lines; styling is
/// preserved. Lines that fit are returned unchanged.
pub fn wrap_lines(lines: Vec<Line<'static>>, width: usize) -> Vec<Line<'static>> {
    if width == 0 {
        return lines;
    }
    lines
        .into_iter()
        .flat_map(|line| wrap_line(line, width))
        .collect()
}

/// Wrap a single Line to fit within the specified width.
pub fn wrap_line(line: Line<'static>, width: usize) -> Vec<Line<'static>> {
    let plain: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
    if width == 0 || visual_width(&plain) <= width {
        return vec![line];
    }

    let words = break_words(WordSeparator::AsciiSpace.find_words(&plain), width);
    #[allow(clippy::cast_precision_loss)]
    let rows = wrap_first_fit(&words, &[width as f64]);

    let style = line.style;
    row_ranges(&rows)
        .into_iter()
        .map(|(start, end)| Line::from(slice_spans(&line.spans, start, end)).style(style))
        .collect()
}

/// Byte range of each wrapped row, excluding the trailing whitespace.
///
/// `find_words` and `break_words` produce contiguous slices of the input, so
/// summing word and whitespace lengths recovers the offsets.
fn row_ranges(rows: &[&[Word<'_>]]) -> Vec<(usize, usize)> {
    let mut ranges = Vec::with_capacity(rows.len());
    let mut cursor = 0;
    for row in rows {
        let start = cursor;
        let mut end = cursor;
        for word in row.iter() {
            end = cursor + word.word.len();
            cursor = end + word.whitespace.len();
        }
        ranges.push((start, end));
    }
    ranges
}

/// Cut `[start, end)` out of a span list, keeping each piece's style.
fn slice_spans(spans: &[Span<'static>], start: usize, end: usize) -> Vec<Span<'static>> {
    let mut out = Vec::new();
    let mut pos = 0;
    for span in spans {
        let len = span.content.len();
        let from = start.max(pos);
        let to = end.min(pos + len);
        if from < to {
            out.push(Span::styled(
                span.content[from - pos..to - pos].to_string(),
                span.style,
            ));
        }
        pos += len;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::{Color, Style};

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_wrap_line_short_is_unchanged() {
        let wrapped = wrap_line(Line::from("Short"), 20);
        assert_eq!(wrapped.len(), 1);
        assert_eq!(text(&wrapped[0]), "Short");
    }

    #[test]
    fn test_wrap_line_splits_on_spaces() {
        let wrapped = wrap_line(Line::from("Hello world this is long"), 11);
        let texts: Vec<String> = wrapped.iter().map(text).collect();
        assert_eq!(texts, vec!["Hello world", "this is", "long"]);
    }

    #[test]
    fn test_wrap_line_breaks_long_words() {
        let wrapped = wrap_line(Line::from("abcdefghij"), 4);
        let texts: Vec<String> = wrapped.iter().map(text).collect();
        assert_eq!(texts, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_line_preserves_styles_across_break() {
        let red = Style::default().fg(Color::Red);
        let blue = Style::default().fg(Color::Blue);
        let line = Line::from(vec![
            Span::styled("red words ", red),
            Span::styled("blue words", blue),
        ]);
        let wrapped = wrap_line(line, 12);

        assert_eq!(text(&wrapped[0]), "red words");
        assert_eq!(wrapped[0].spans[0].style, red);
        assert_eq!(text(&wrapped[1]), "blue words");
        assert_eq!(wrapped[1].spans[0].style, blue);
    }

    #[test]
    fn test_wrap_line_keeps_leading_whitespace() {
        let wrapped = wrap_line(Line::from("  indented text here"), 12);
        assert_eq!(text(&wrapped[0]), "  indented");
    }

    #[test]
    fn test_wrap_line_wide_chars() {
        let wrapped = wrap_line(Line::from("你好 世界 你好"), 5);
        assert!(wrapped.len() >= 2);
        for line in &wrapped {
            assert!(visual_width(&text(line)) <= 5);
        }
        let all: String = wrapped.iter().map(text).collect();
        assert!(all.contains("世界"));
    }

    #[test]
    fn test_wrap_lines_multiple() {
        let lines = vec![
            Line::from("Short line"),
            Line::from("This is a very long line that should definitely be wrapped to fit"),
        ];
        let wrapped = wrap_lines(lines, 20);
        assert!(wrapped.len() > 2);
        for line in &wrapped {
            assert!(visual_width(&text(line)) <= 20);
        }
    }

    #[test]
    fn test_wrap_zero_width_is_noop() {
        let wrapped = wrap_lines(vec![Line::from("anything at all")], 0);
        assert_eq!(wrapped.len(), 1);
    }
}
