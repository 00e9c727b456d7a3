//! Sentiment textarea: state, key handling and view.

mod render;
mod state;
mod text_buffer;
mod update;

pub use render::{PLACEHOLDER, calculate_input_height, render_input};
pub use state::InputState;
pub use text_buffer::{CursorMove, TextBuffer};
pub use update::{InputAction, handle_key, handle_paste};
