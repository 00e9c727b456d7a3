//! Input feature reducer.
//!
//! Maps key and paste events onto the textarea and reports when the user
//! asked to submit or quit. Submission itself is handled by the app reducer.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::CursorMove;
use super::state::InputState;
use crate::common::sanitize_for_display;

/// What the app reducer should do after a key was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// The key only edited (or did not touch) the textarea.
    Edited,
    Submit,
    Quit,
}

/// Inserts pasted text after stripping control sequences.
pub fn handle_paste(input: &mut InputState, text: &str) {
    input.textarea.insert_str(&sanitize_for_display(text));
}

/// Handles a key press on the form.
pub fn handle_key(input: &mut InputState, key: KeyEvent) -> InputAction {
    if key.kind == KeyEventKind::Release {
        return InputAction::Edited;
    }

    let mods = Modifiers::from(&key);

    handle_control_keys(input, key.code, &mods)
        .or_else(|| handle_submission(input, key.code, &mods))
        .or_else(|| handle_line_editing(input, key.code, &mods))
        .or_else(|| handle_word_editing(input, key.code, &mods))
        .unwrap_or_else(|| {
            input.textarea.input(key);
            InputAction::Edited
        })
}

/// Parsed key modifiers.
struct Modifiers {
    ctrl: bool,
    shift: bool,
    alt: bool,
}

impl Modifiers {
    fn from(key: &KeyEvent) -> Self {
        Self {
            ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
            shift: key.modifiers.contains(KeyModifiers::SHIFT),
            alt: key.modifiers.contains(KeyModifiers::ALT),
        }
    }

    fn only_ctrl(&self) -> bool {
        self.ctrl && !self.shift && !self.alt
    }

    fn only_alt(&self) -> bool {
        self.alt && !self.ctrl && !self.shift
    }
}

// Ctrl+C, Esc
fn handle_control_keys(
    input: &mut InputState,
    code: KeyCode,
    mods: &Modifiers,
) -> Option<InputAction> {
    match code {
        // Ctrl+C clears the textarea first, quits when it is already empty.
        KeyCode::Char('c') if mods.ctrl => {
            if input.is_empty() {
                Some(InputAction::Quit)
            } else {
                input.clear();
                Some(InputAction::Edited)
            }
        }
        KeyCode::Esc => Some(InputAction::Quit),
        _ => None,
    }
}

// Enter, Shift/Alt+Enter, Ctrl+J
fn handle_submission(
    input: &mut InputState,
    code: KeyCode,
    mods: &Modifiers,
) -> Option<InputAction> {
    match code {
        KeyCode::Enter if mods.shift || mods.alt => {
            input.textarea.insert_newline();
            Some(InputAction::Edited)
        }
        KeyCode::Enter => Some(InputAction::Submit),
        KeyCode::Char('j') if mods.only_ctrl() => {
            input.textarea.insert_newline();
            Some(InputAction::Edited)
        }
        _ => None,
    }
}

// Ctrl+A, Ctrl+E, Ctrl+U, Ctrl+K
fn handle_line_editing(
    input: &mut InputState,
    code: KeyCode,
    mods: &Modifiers,
) -> Option<InputAction> {
    if !mods.only_ctrl() {
        return None;
    }
    match code {
        KeyCode::Char('a') => input.textarea.move_cursor(CursorMove::Head),
        KeyCode::Char('e') => input.textarea.move_cursor(CursorMove::End),
        KeyCode::Char('u') => input.textarea.kill_to_head(),
        KeyCode::Char('k') => input.textarea.kill_to_end(),
        _ => return None,
    }
    Some(InputAction::Edited)
}

// Ctrl+W, Alt+Backspace, Alt+b/f, Alt+Left/Right
fn handle_word_editing(
    input: &mut InputState,
    code: KeyCode,
    mods: &Modifiers,
) -> Option<InputAction> {
    match code {
        KeyCode::Char('w') if mods.only_ctrl() => input.textarea.delete_word_left(),
        KeyCode::Backspace if mods.only_alt() => input.textarea.delete_word_left(),
        KeyCode::Char('b') | KeyCode::Left if mods.only_alt() => input.textarea.move_word_left(),
        KeyCode::Char('f') | KeyCode::Right if mods.only_alt() => {
            input.textarea.move_word_right();
        }
        _ => return None,
    }
    Some(InputAction::Edited)
}
