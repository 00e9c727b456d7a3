//! Effect handlers.
//!
//! Pure async functions; the runtime spawns them and routes their results
//! back through the inbox.

use senti_core::sentiment::{AnalyzeRequest, RequestError, SentimentClient};

use crate::events::AnalysisOutcome;

/// Sends one sentiment request.
///
/// The request runs in its own task so a panic inside the client still
/// produces an outcome and the form leaves the loading state.
pub async fn analyze_sentiment(client: SentimentClient, request: AnalyzeRequest) -> AnalysisOutcome {
    let handle = tokio::spawn(async move { client.analyze(&request).await });
    match handle.await {
        Ok(outcome) => outcome,
        Err(err) => {
            tracing::error!(error = %err, "Sentiment request task failed");
            Err(RequestError::transport(None))
        }
    }
}
