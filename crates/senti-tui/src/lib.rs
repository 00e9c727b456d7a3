//! Full-screen sentiment form.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr, stdout};

use anyhow::Result;
pub use features::{input, result};
pub use runtime::TuiRuntime;
use senti_core::sentiment::SentimentClient;

/// Runs the interactive form until the user quits.
///
/// # Errors
/// Returns an error if no terminal is attached or terminal I/O fails.
pub fn run_interactive(client: SentimentClient) -> Result<()> {
    if !stdout().is_terminal() {
        anyhow::bail!(
            "The interactive form requires a terminal.\n\
             Use `senti analyze '...'` for non-interactive use."
        );
    }

    tracing::info!(endpoint = %client.endpoint().describe(), "Starting interactive form");

    let mut runtime = TuiRuntime::new(client)?;
    runtime.run()?;
    drop(runtime);

    writeln!(stderr(), "Goodbye!")?;
    Ok(())
}
