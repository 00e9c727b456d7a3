//! Input feature state.

use super::TextBuffer;

/// State of the sentiment textarea.
#[derive(Debug, Default, Clone)]
pub struct InputState {
    pub textarea: TextBuffer,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_text(&self) -> String {
        self.textarea.text()
    }

    pub fn is_empty(&self) -> bool {
        self.textarea.is_empty()
    }

    pub fn clear(&mut self) {
        self.textarea.clear();
    }
}
