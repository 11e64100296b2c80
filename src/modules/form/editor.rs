//! Minimal text editor backing each form input

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Editable text with a character cursor and a hard length cap.
///
/// Single-line editors ignore Enter and vertical movement; multi-line
/// editors treat Enter as a newline and Up/Down as line movement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEditor {
    value: String,
    /// Cursor position in chars, `0..=len`
    cursor: usize,
    char_limit: usize,
    multiline: bool,
}

impl TextEditor {
    pub fn single_line(char_limit: usize) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            char_limit,
            multiline: false,
        }
    }

    pub fn multi_line(char_limit: usize) -> Self {
        Self {
            multiline: true,
            ..Self::single_line(char_limit)
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn char_limit(&self) -> usize {
        self.char_limit
    }

    pub fn is_multiline(&self) -> bool {
        self.multiline
    }

    /// Row and column of the cursor, in chars.
    pub fn cursor_position(&self) -> (usize, usize) {
        let before: Vec<char> = self.value.chars().take(self.cursor).collect();
        let row = before.iter().filter(|c| **c == '\n').count();
        let col = before.iter().rev().take_while(|c| **c != '\n').count();
        (row, col)
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = value.chars().take(self.char_limit).collect();
        if !self.multiline {
            self.value.retain(|c| c != '\n');
        }
        self.cursor = self.len();
    }

    /// Apply a key event. Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('u') if ctrl => {
                self.delete_to_line_start();
                true
            }
            KeyCode::Char('a') if ctrl => {
                self.cursor = self.line_start(self.cursor);
                true
            }
            KeyCode::Char('e') if ctrl => {
                self.cursor = self.line_end(self.cursor);
                true
            }
            KeyCode::Char(_) if ctrl => false,
            KeyCode::Char(ch) => self.insert(ch),
            KeyCode::Enter if self.multiline => self.insert('\n'),
            KeyCode::Backspace => {
                if self.cursor == 0 {
                    return true;
                }
                self.cursor -= 1;
                self.remove_at(self.cursor);
                true
            }
            KeyCode::Delete => {
                if self.cursor < self.len() {
                    self.remove_at(self.cursor);
                }
                true
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                true
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.len());
                true
            }
            KeyCode::Home => {
                self.cursor = self.line_start(self.cursor);
                true
            }
            KeyCode::End => {
                self.cursor = self.line_end(self.cursor);
                true
            }
            KeyCode::Up if self.multiline => {
                self.move_vertical(false);
                true
            }
            KeyCode::Down if self.multiline => {
                self.move_vertical(true);
                true
            }
            _ => false,
        }
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map(|(idx, _)| idx)
            .unwrap_or(self.value.len())
    }

    fn insert(&mut self, ch: char) -> bool {
        if self.len() >= self.char_limit {
            return true;
        }
        let idx = self.byte_index(self.cursor);
        self.value.insert(idx, ch);
        self.cursor += 1;
        true
    }

    fn remove_at(&mut self, char_idx: usize) {
        let idx = self.byte_index(char_idx);
        self.value.remove(idx);
    }

    fn delete_to_line_start(&mut self) {
        let start = self.line_start(self.cursor);
        let from = self.byte_index(start);
        let to = self.byte_index(self.cursor);
        self.value.replace_range(from..to, "");
        self.cursor = start;
    }

    fn line_start(&self, pos: usize) -> usize {
        let chars: Vec<char> = self.value.chars().collect();
        let mut idx = pos;
        while idx > 0 && chars[idx - 1] != '\n' {
            idx -= 1;
        }
        idx
    }

    fn line_end(&self, pos: usize) -> usize {
        let chars: Vec<char> = self.value.chars().collect();
        let mut idx = pos;
        while idx < chars.len() && chars[idx] != '\n' {
            idx += 1;
        }
        idx
    }

    fn move_vertical(&mut self, down: bool) {
        let start = self.line_start(self.cursor);
        let col = self.cursor - start;
        let target_start = if down {
            let end = self.line_end(self.cursor);
            if end >= self.len() {
                return;
            }
            end + 1
        } else {
            if start == 0 {
                return;
            }
            self.line_start(start - 1)
        };
        let target_end = self.line_end(target_start);
        self.cursor = (target_start + col).min(target_end);
    }
}
