//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! The reducer never performs I/O or spawns tasks directly.

use senti_core::sentiment::AnalyzeRequest;

use crate::common::TaskId;

#[derive(Debug, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Send one classification request for the trimmed input.
    AnalyzeSentiment { task: TaskId, request: AnalyzeRequest },
}
