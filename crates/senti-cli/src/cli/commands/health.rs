//! Health command handler.

use anyhow::Result;
use senti_core::sentiment::SentimentClient;

pub async fn run(client: &SentimentClient) -> Result<()> {
    let target = client
        .endpoint()
        .url("/health")
        .map_or_else(|_| client.endpoint().describe(), String::from);

    match client.health().await {
        Ok(status) if status.ok => {
            println!("ok ({target})");
            Ok(())
        }
        Ok(_) => anyhow::bail!("Service at {target} reported unhealthy"),
        Err(err) => anyhow::bail!("Health check failed for {target}: {err}"),
    }
}
