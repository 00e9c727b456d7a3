//! Feature slices for the TUI.

pub mod input;
pub mod result;
