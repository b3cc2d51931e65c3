//! Draft input state.

/// State for the draft input, managing content and cursor position.
///
/// The cursor is a character index, so multi-byte input edits correctly.
#[derive(Debug, Clone, Default)]
pub struct TextInputState {
    content: String,
    /// Cursor position (character index).
    pub cursor: usize,
    /// Earlier submissions, oldest first.
    history: Vec<String>,
    /// Position while walking history (`None` = editing the live draft).
    history_index: Option<usize>,
    /// Live draft saved while walking history.
    saved_input: String,
}

impl TextInputState {
    /// Create a new empty text input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the content is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Whether the content is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map_or(self.content.len(), |(i, _)| i)
    }

    /// Clear the content.
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
        self.history_index = None;
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, ch: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, ch);
        self.cursor += 1;
    }

    /// Insert a string at the cursor position.
    pub fn insert_str(&mut self, s: &str) {
        let at = self.byte_index(self.cursor);
        self.content.insert_str(at, s);
        self.cursor += s.chars().count();
    }

    /// Delete the character before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete the character at the cursor (delete).
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Take the content, clearing the state and recording it in history.
    pub fn submit(&mut self) -> String {
        let content = std::mem::take(&mut self.content);
        self.cursor = 0;
        if !content.trim().is_empty() {
            self.history.push(content.clone());
        }
        self.history_index = None;
        self.saved_input.clear();
        content
    }

    /// Navigate to the previous (older) history entry.
    pub fn history_prev(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let index = match self.history_index {
            None => {
                self.saved_input = self.content.clone();
                self.history.len() - 1
            }
            Some(0) => return,
            Some(i) => i - 1,
        };
        self.history_index = Some(index);
        self.content = self.history[index].clone();
        self.move_end();
    }

    /// Navigate to the next (newer) history entry, or back to the live draft.
    pub fn history_next(&mut self) {
        let Some(index) = self.history_index else {
            return;
        };
        if index + 1 < self.history.len() {
            self.history_index = Some(index + 1);
            self.content = self.history[index + 1].clone();
        } else {
            self.history_index = None;
            self.content = std::mem::take(&mut self.saved_input);
        }
        self.move_end();
    }

    /// Split the content into lines, reporting the cursor's line and column.
    pub fn lines_with_cursor(&self) -> (Vec<&str>, usize, usize) {
        let lines: Vec<&str> = self.content.split('\n').collect();
        let mut remaining = self.cursor;
        for (row, line) in lines.iter().enumerate() {
            let len = line.chars().count();
            if remaining <= len {
                return (lines, row, remaining);
            }
            remaining -= len + 1;
        }
        let last = lines.len() - 1;
        let col = lines[last].chars().count();
        (lines, last, col)
    }
}
