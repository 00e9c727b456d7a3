//! Shared leaf types for the TUI.
//!
//! This module must NOT import `UiEvent` or feature state.

pub mod task;
pub mod text;

pub use task::{TaskCompleted, TaskId, TaskSeq, TaskStarted, TaskState};
pub use text::{sanitize_for_display, truncate_with_ellipsis};
