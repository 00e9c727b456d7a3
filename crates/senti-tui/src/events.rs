//! UI event types.
//!
//! All inputs to the TUI (terminal input, timer ticks, async results) are
//! converted to `UiEvent` before reaching the reducer.
//!
//! ## Task Lifecycle Events
//!
//! The sentiment request uses the runtime's task lifecycle:
//! - `AnalysisStarted` is sent once the request task is spawned
//! - `AnalysisCompleted` carries the outcome when it settles
//! - The reducer is the only place that mutates `TaskState`

use crossterm::event::Event as CrosstermEvent;
use senti_core::sentiment::{Analysis, RequestError};

use crate::common::{TaskCompleted, TaskStarted};

/// Outcome of one sentiment request.
pub type AnalysisOutcome = Result<Analysis, RequestError>;

#[derive(Debug)]
pub enum UiEvent {
    /// Timer tick; advances the spinner and triggers a render.
    Tick,

    /// Raw terminal input.
    Terminal(CrosstermEvent),

    AnalysisStarted(TaskStarted),

    AnalysisCompleted(TaskCompleted<AnalysisOutcome>),
}
