//! Runtime execution modes.
//!
//! - `tui`: Full-screen interactive form (optional feature)

#[cfg(feature = "tui")]
pub use senti_tui::run_interactive;

#[cfg(not(feature = "tui"))]
pub fn run_interactive(_client: senti_core::sentiment::SentimentClient) -> anyhow::Result<()> {
    anyhow::bail!("TUI support is disabled in this build (feature \"tui\").");
}
