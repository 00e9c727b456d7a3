//! One-shot analysis: drives the form controller once and prints the outcome.

use std::io::{IsTerminal, Read};

use anyhow::{Context, Result};
use senti_core::form::{FormController, FormStatus};
use senti_core::sentiment::{FALLBACK_MESSAGE, SentimentClient};

pub async fn run(client: &SentimentClient, text: Option<String>, json: bool) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None => read_stdin()?,
    };

    let mut form = FormController::new();
    form.set_text(text);

    match form.submit(client).await {
        FormStatus::Success(analysis) => {
            if json {
                println!("{}", serde_json::to_string(analysis)?);
            } else {
                println!("Label: {}", analysis.label);
                println!("Confidence: {}", analysis.confidence_percent());
            }
            Ok(())
        }
        FormStatus::Failure(message) => anyhow::bail!("{message}"),
        FormStatus::Idle | FormStatus::Loading => anyhow::bail!(FALLBACK_MESSAGE),
    }
}

fn read_stdin() -> Result<String> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        anyhow::bail!("No text given. Pass TEXT or pipe it on stdin.");
    }

    let mut buf = String::new();
    stdin.read_to_string(&mut buf).context("read stdin")?;
    Ok(buf)
}
