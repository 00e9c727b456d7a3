//! Application state.
//!
//! ```text
//! AppState
//! ├── form: FormController   (input snapshot + render status)
//! ├── input: InputState      (textarea being edited)
//! ├── task_seq: TaskSeq      (request id generator)
//! └── analysis: TaskState    (in-flight request)
//! ```
//!
//! The textarea is the editing surface; its contents are mirrored into the
//! form controller after every edit so validation always sees current text.

use senti_core::form::FormController;

use crate::common::{TaskSeq, TaskState};
use crate::input::InputState;

pub struct AppState {
    pub form: FormController,
    pub input: InputState,
    pub task_seq: TaskSeq,
    pub analysis: TaskState,
    /// Resolved sentiment endpoint, shown in the footer.
    pub endpoint: String,
    pub spinner_frame: usize,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            form: FormController::new(),
            input: InputState::new(),
            task_seq: TaskSeq::default(),
            analysis: TaskState::default(),
            endpoint: endpoint.into(),
            spinner_frame: 0,
            should_quit: false,
        }
    }

    /// Copies the textarea contents into the form controller.
    pub fn sync_form_text(&mut self) {
        self.form.set_text(self.input.get_text());
    }
}
