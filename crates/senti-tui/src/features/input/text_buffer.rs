//! Multi-line text buffer backing the sentiment textarea.
//!
//! Text is stored as lines with a (row, col) cursor in char units.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Cursor movement commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Up,
    Down,
    Forward,
    Back,
    Head,
    End,
}

#[derive(Debug, Clone)]
pub struct TextBuffer {
    lines: Vec<String>,
    row: usize,
    col: usize,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self {
            lines: vec![String::new()],
            row: 0,
            col: 0,
        }
    }
}

impl TextBuffer {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Cursor position as (row, col) in char units.
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Full contents with lines joined by `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(String::is_empty)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Inserts text at the cursor. Embedded newlines split lines.
    pub fn insert_str(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }

        let line = &self.lines[self.row];
        let split_at = byte_index(line, self.col);
        let tail = line[split_at..].to_string();
        self.lines[self.row].truncate(split_at);

        let mut pieces = text.split('\n');
        if let Some(first) = pieces.next() {
            self.lines[self.row].push_str(first);
            self.col += first.chars().count();
        }
        for piece in pieces {
            self.row += 1;
            self.lines.insert(self.row, piece.to_string());
            self.col = piece.chars().count();
        }
        self.lines[self.row].push_str(&tail);
    }

    pub fn insert_char(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.insert_str(ch.encode_utf8(&mut buf));
    }

    pub fn insert_newline(&mut self) {
        self.insert_str("\n");
    }

    /// Backspace: removes the char before the cursor, joining lines at col 0.
    pub fn delete_prev_char(&mut self) {
        if self.col > 0 {
            self.col -= 1;
            remove_char(&mut self.lines[self.row], self.col);
        } else if self.row > 0 {
            let current = self.lines.remove(self.row);
            self.row -= 1;
            self.col = char_len(&self.lines[self.row]);
            self.lines[self.row].push_str(&current);
        }
    }

    /// Delete: removes the char under the cursor, joining lines at line end.
    pub fn delete_next_char(&mut self) {
        if self.col < char_len(&self.lines[self.row]) {
            remove_char(&mut self.lines[self.row], self.col);
        } else if self.row + 1 < self.lines.len() {
            let next = self.lines.remove(self.row + 1);
            self.lines[self.row].push_str(&next);
        }
    }

    /// Deletes from the cursor to the end of the line.
    pub fn kill_to_end(&mut self) {
        let idx = byte_index(&self.lines[self.row], self.col);
        self.lines[self.row].truncate(idx);
    }

    /// Deletes from the start of the line to the cursor. On an empty line,
    /// joins with the previous line instead.
    pub fn kill_to_head(&mut self) {
        if self.col == 0 {
            self.delete_prev_char();
            return;
        }
        let idx = byte_index(&self.lines[self.row], self.col);
        self.lines[self.row].replace_range(..idx, "");
        self.col = 0;
    }

    pub fn move_cursor(&mut self, movement: CursorMove) {
        match movement {
            CursorMove::Up if self.row > 0 => {
                self.row -= 1;
                self.clamp_col();
            }
            CursorMove::Down if self.row + 1 < self.lines.len() => {
                self.row += 1;
                self.clamp_col();
            }
            CursorMove::Forward => {
                if self.col < char_len(&self.lines[self.row]) {
                    self.col += 1;
                } else if self.row + 1 < self.lines.len() {
                    self.row += 1;
                    self.col = 0;
                }
            }
            CursorMove::Back => {
                if self.col > 0 {
                    self.col -= 1;
                } else if self.row > 0 {
                    self.row -= 1;
                    self.col = char_len(&self.lines[self.row]);
                }
            }
            CursorMove::Head => self.col = 0,
            CursorMove::End => self.col = char_len(&self.lines[self.row]),
            CursorMove::Up | CursorMove::Down => {}
        }
    }

    /// Moves left over one run of same-class chars (word, punctuation or space).
    pub fn move_word_left(&mut self) {
        if self.col == 0 {
            self.move_cursor(CursorMove::Back);
            return;
        }
        let chars: Vec<char> = self.lines[self.row].chars().collect();
        self.col = run_start(&chars, self.col);
    }

    /// Moves right over one run of same-class chars.
    pub fn move_word_right(&mut self) {
        let chars: Vec<char> = self.lines[self.row].chars().collect();
        if self.col >= chars.len() {
            self.move_cursor(CursorMove::Forward);
            return;
        }
        self.col = run_end(&chars, self.col);
    }

    /// Deletes the run of same-class chars left of the cursor.
    pub fn delete_word_left(&mut self) {
        if self.col == 0 {
            self.delete_prev_char();
            return;
        }
        let chars: Vec<char> = self.lines[self.row].chars().collect();
        let start = run_start(&chars, self.col);
        let line = &mut self.lines[self.row];
        let from = byte_index(line, start);
        let to = byte_index(line, self.col);
        line.replace_range(from..to, "");
        self.col = start;
    }

    /// Applies a plain editing key. Modified and unhandled keys are ignored.
    pub fn input(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        match key.code {
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.insert_char(ch);
            }
            KeyCode::Tab => self.insert_str("    "),
            KeyCode::Backspace => self.delete_prev_char(),
            KeyCode::Delete => self.delete_next_char(),
            KeyCode::Left => self.move_cursor(CursorMove::Back),
            KeyCode::Right => self.move_cursor(CursorMove::Forward),
            KeyCode::Up => self.move_cursor(CursorMove::Up),
            KeyCode::Down => self.move_cursor(CursorMove::Down),
            KeyCode::Home => self.move_cursor(CursorMove::Head),
            KeyCode::End => self.move_cursor(CursorMove::End),
            _ => {}
        }
    }

    fn clamp_col(&mut self) {
        self.col = self.col.min(char_len(&self.lines[self.row]));
    }
}

fn char_len(line: &str) -> usize {
    line.chars().count()
}

fn byte_index(line: &str, col: usize) -> usize {
    line.char_indices().nth(col).map_or(line.len(), |(i, _)| i)
}

fn remove_char(line: &mut String, col: usize) {
    let from = byte_index(line, col);
    let to = byte_index(line, col + 1);
    line.replace_range(from..to, "");
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Space,
    Word,
    Punct,
}

fn class_of(c: char) -> CharClass {
    if c.is_whitespace() {
        CharClass::Space
    } else if c.is_alphanumeric() || c == '_' {
        CharClass::Word
    } else {
        CharClass::Punct
    }
}

fn run_start(chars: &[char], mut idx: usize) -> usize {
    let class = class_of(chars[idx - 1]);
    while idx > 0 && class_of(chars[idx - 1]) == class {
        idx -= 1;
    }
    idx
}

fn run_end(chars: &[char], mut idx: usize) -> usize {
    let class = class_of(chars[idx]);
    while idx < chars.len() && class_of(chars[idx]) == class {
        idx += 1;
    }
    idx
}
