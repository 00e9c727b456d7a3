//! Input feature view.
//!
//! Pure rendering functions for the sentiment textarea.

use std::mem;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthChar;

use super::TextBuffer;
use super::state::InputState;

/// Shown in the empty textarea.
pub const PLACEHOLDER: &str = "Type or paste your text here...";

/// Minimum height of the textarea (lines, including borders).
const INPUT_HEIGHT_MIN: u16 = 5;

/// Maximum height of the textarea as a fraction of screen height.
const INPUT_HEIGHT_MAX_PERCENT: f32 = 0.4;

/// Textarea content wrapped to a width, with the cursor's visual position.
struct WrappedTextarea {
    lines: Vec<Line<'static>>,
    cursor_row: usize,
    cursor_col: usize,
}

/// Wraps logical lines at `width` display columns, tracking the cursor.
fn wrap_textarea(textarea: &TextBuffer, width: usize) -> WrappedTextarea {
    let width = width.max(1);
    let (cursor_line, cursor_char) = textarea.cursor();

    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut cursor_row = 0;
    let mut cursor_col = 0;

    for (line_idx, logical) in textarea.lines().iter().enumerate() {
        let is_cursor_line = line_idx == cursor_line;
        let mut current = String::new();
        let mut current_width = 0;

        for (char_idx, ch) in logical.chars().enumerate() {
            let ch_width = ch.width().unwrap_or(0);
            if current_width + ch_width > width && !current.is_empty() {
                lines.push(Line::from(mem::take(&mut current)));
                current_width = 0;
            }
            if is_cursor_line && char_idx == cursor_char {
                cursor_row = lines.len();
                cursor_col = current_width;
            }
            current.push(ch);
            current_width += ch_width;
        }

        if is_cursor_line && cursor_char >= logical.chars().count() {
            // Cursor after the last char wraps onto a fresh row when full.
            if current_width >= width {
                lines.push(Line::from(mem::take(&mut current)));
                current_width = 0;
            }
            cursor_row = lines.len();
            cursor_col = current_width;
        }

        lines.push(Line::from(current));
    }

    WrappedTextarea {
        lines,
        cursor_row,
        cursor_col,
    }
}

/// Height of the textarea for the given outer width and screen height.
pub fn calculate_input_height(input: &InputState, width: u16, terminal_height: u16) -> u16 {
    let inner_width = width.saturating_sub(2) as usize;
    let visual_lines = wrap_textarea(&input.textarea, inner_width).lines.len() as u16;

    let max_height = ((f32::from(terminal_height) * INPUT_HEIGHT_MAX_PERCENT) as u16)
        .max(INPUT_HEIGHT_MIN);
    (visual_lines + 2).clamp(INPUT_HEIGHT_MIN, max_height)
}

/// Renders the textarea and places the terminal cursor in it.
pub fn render_input(input: &InputState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    if input.is_empty() {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            PLACEHOLDER,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));
        frame.render_widget(placeholder, inner);
        frame.set_cursor_position((inner.x, inner.y));
        return;
    }

    let wrapped = wrap_textarea(&input.textarea, inner.width as usize);
    let visible = inner.height as usize;
    let scroll = wrapped.cursor_row.saturating_sub(visible.saturating_sub(1));

    frame.render_widget(
        Paragraph::new(wrapped.lines).scroll((scroll as u16, 0)),
        inner,
    );

    let cursor_x = inner.x + (wrapped.cursor_col as u16).min(inner.width.saturating_sub(1));
    let cursor_y = inner.y + (wrapped.cursor_row - scroll) as u16;
    frame.set_cursor_position((cursor_x, cursor_y));
}
