//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::Event;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::input::{self, InputAction};
use crate::state::AppState;

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            if app.form.is_loading() {
                app.spinner_frame = app.spinner_frame.wrapping_add(1);
            }
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::AnalysisStarted(started) => {
            app.analysis.on_started(started);
            vec![]
        }
        UiEvent::AnalysisCompleted(completed) => {
            if app.analysis.finish_if_active(completed.id) {
                app.form.settle(completed.result);
            } else {
                tracing::debug!(task = completed.id.0, "Dropping stale sentiment result");
            }
            vec![]
        }
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => {
            let action = input::handle_key(&mut app.input, key);
            app.sync_form_text();
            match action {
                InputAction::Edited => vec![],
                InputAction::Submit => submit(app),
                InputAction::Quit => vec![UiEffect::Quit],
            }
        }
        Event::Paste(text) => {
            input::handle_paste(&mut app.input, &text);
            app.sync_form_text();
            vec![]
        }
        _ => vec![],
    }
}

/// Starts a submission. Blank input shows the validation error without
/// producing an effect; a second Enter while loading is ignored.
fn submit(app: &mut AppState) -> Vec<UiEffect> {
    let Some(request) = app.form.begin_submit() else {
        return vec![];
    };
    app.spinner_frame = 0;
    let task = app.task_seq.next_id();
    vec![UiEffect::AnalyzeSentiment { task, request }]
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use senti_core::form::{FormStatus, VALIDATION_MESSAGE};
    use senti_core::sentiment::{Analysis, AnalyzeRequest, RequestError};

    use super::*;
    use crate::common::{TaskCompleted, TaskId, TaskStarted};

    fn app() -> AppState {
        AppState::new("http://127.0.0.1:8000/sentiment")
    }

    fn press(app: &mut AppState, code: KeyCode) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    fn type_text(app: &mut AppState, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    /// Runs the started/completed pair the runtime would send for `task`.
    fn settle(app: &mut AppState, task: TaskId, result: Result<Analysis, RequestError>) {
        update(app, UiEvent::AnalysisStarted(TaskStarted { id: task }));
        update(
            app,
            UiEvent::AnalysisCompleted(TaskCompleted { id: task, result }),
        );
    }

    fn submitted_task(effects: &[UiEffect]) -> TaskId {
        match effects {
            [UiEffect::AnalyzeSentiment { task, .. }] => *task,
            other => panic!("expected one AnalyzeSentiment effect, got {other:?}"),
        }
    }

    #[test]
    fn test_enter_on_blank_input_shows_validation_error() {
        let mut app = app();
        type_text(&mut app, "   ");

        let effects = press(&mut app, KeyCode::Enter);

        assert!(effects.is_empty());
        assert_eq!(app.form.error(), Some(VALIDATION_MESSAGE));
        assert!(!app.form.is_loading());
    }

    #[test]
    fn test_enter_sends_trimmed_text() {
        let mut app = app();
        type_text(&mut app, "  I love this!  ");

        let effects = press(&mut app, KeyCode::Enter);

        assert_eq!(
            effects,
            vec![UiEffect::AnalyzeSentiment {
                task: TaskId(0),
                request: AnalyzeRequest {
                    text: "I love this!".to_string()
                },
            }]
        );
        assert!(app.form.is_loading());
    }

    #[test]
    fn test_success_shows_result() {
        let mut app = app();
        type_text(&mut app, "I love this!");
        let task = submitted_task(&press(&mut app, KeyCode::Enter));

        settle(
            &mut app,
            task,
            Ok(Analysis {
                label: "positive".to_string(),
                confidence: 0.95,
            }),
        );

        let result = app.form.result().unwrap();
        assert_eq!(result.label, "positive");
        assert_eq!(result.confidence_percent(), "95.0%");
        assert!(app.form.error().is_none());
        assert!(!app.analysis.is_running());
    }

    #[test]
    fn test_http_error_releases_loading() {
        let mut app = app();
        type_text(&mut app, "ok");
        let task = submitted_task(&press(&mut app, KeyCode::Enter));

        settle(&mut app, task, Err(RequestError::http_status(500)));

        assert_eq!(app.form.error(), Some("HTTP error! status: 500"));
        assert!(!app.form.is_loading());
    }

    #[test]
    fn test_second_enter_while_loading_is_ignored() {
        let mut app = app();
        type_text(&mut app, "ok");
        submitted_task(&press(&mut app, KeyCode::Enter));

        assert!(press(&mut app, KeyCode::Enter).is_empty());
        assert!(app.form.is_loading());
    }

    #[test]
    fn test_editing_allowed_while_loading() {
        let mut app = app();
        type_text(&mut app, "ok");
        let task = submitted_task(&press(&mut app, KeyCode::Enter));

        type_text(&mut app, " then");
        assert_eq!(app.form.text(), "ok then");

        settle(&mut app, task, Err(RequestError::transport(None)));
        assert_eq!(app.form.error(), Some("Failed to analyze sentiment"));

        let effects = press(&mut app, KeyCode::Enter);
        match effects.as_slice() {
            [UiEffect::AnalyzeSentiment { request, .. }] => assert_eq!(request.text, "ok then"),
            other => panic!("unexpected effects {other:?}"),
        }
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut app = app();
        type_text(&mut app, "ok");
        let task = submitted_task(&press(&mut app, KeyCode::Enter));
        update(&mut app, UiEvent::AnalysisStarted(TaskStarted { id: task }));

        update(
            &mut app,
            UiEvent::AnalysisCompleted(TaskCompleted {
                id: TaskId(99),
                result: Err(RequestError::http_status(500)),
            }),
        );

        assert!(app.form.is_loading());
        assert_eq!(app.form.status(), &FormStatus::Loading);
    }

    #[test]
    fn test_paste_updates_form_text() {
        let mut app = app();
        update(
            &mut app,
            UiEvent::Terminal(Event::Paste("pasted\treview".to_string())),
        );
        assert_eq!(app.form.text(), "pasted    review");
    }

    #[test]
    fn test_escape_quits() {
        let mut app = app();
        assert_eq!(press(&mut app, KeyCode::Esc), vec![UiEffect::Quit]);
    }

    #[test]
    fn test_tick_advances_spinner_only_while_loading() {
        let mut app = app();
        update(&mut app, UiEvent::Tick);
        assert_eq!(app.spinner_frame, 0);

        type_text(&mut app, "ok");
        press(&mut app, KeyCode::Enter);
        update(&mut app, UiEvent::Tick);
        assert_eq!(app.spinner_frame, 1);
    }
}
