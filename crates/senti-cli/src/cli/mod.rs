//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use senti_core::config::Config;
use senti_core::logging;
use senti_core::sentiment::SentimentClient;

mod commands;

#[derive(Parser)]
#[command(name = "senti")]
#[command(version)]
#[command(about = "Sentiment analysis from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Origin prefix for the sentiment endpoint (overrides config)
    #[arg(long, global = true, env = "SENTI_API_BASE", value_name = "URL")]
    api_base: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Analyze a piece of text and print the result
    Analyze {
        /// Text to analyze (reads stdin when omitted)
        #[arg(value_name = "TEXT")]
        text: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check that the sentiment service is reachable
    Health,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Persist the API base used for requests
    SetApiBase {
        /// Origin prefix, e.g. https://api.example.com (empty for same origin)
        #[arg(value_name = "URL")]
        url: String,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::load().context("load config")?;

    // File logging is best effort; a read-only home must not block analysis.
    let _log_guard = match logging::init(&config.log_level) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: file logging disabled: {e:#}");
            None
        }
    };

    let client = || SentimentClient::from_config(&config, cli.api_base.as_deref());

    match cli.command {
        None => crate::modes::run_interactive(client()?),
        Some(Commands::Analyze { text, json }) => {
            commands::analyze::run(&client()?, text, json).await
        }
        Some(Commands::Health) => commands::health::run(&client()?).await,
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::SetApiBase { url } => commands::config::set_api_base(&url),
        },
    }
}
