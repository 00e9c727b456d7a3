//! Configuration management for senti.
//!
//! Loads configuration from ${SENTI_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use toml_edit::DocumentMut;

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

/// Loads the commented template with the user's keys laid over it.
///
/// Keys the template doesn't know are carried over unchanged.
fn overlay_on_template(user_config: &str) -> Result<DocumentMut> {
    let mut doc: DocumentMut = default_config_template()
        .parse()
        .context("Failed to parse default config template")?;
    let user_doc: DocumentMut = user_config.parse().context("Failed to parse user config")?;

    for (key, item) in user_doc.iter() {
        doc[key] = item.clone();
    }
    Ok(doc)
}

/// Trims an API base and checks that a non-empty value is a URL.
///
/// An empty base is valid and means same-origin.
///
/// # Errors
/// Returns an error if the base is non-empty and not a well-formed URL.
pub fn normalize_api_base(base: &str) -> Result<String> {
    let base = base.trim();
    if !base.is_empty() {
        url::Url::parse(base).with_context(|| format!("Invalid API base URL: {base}"))?;
    }
    Ok(base.to_string())
}

pub mod paths {
    //! Path resolution for senti configuration and data directories.
    //!
    //! SENTI_HOME resolution order:
    //! 1. SENTI_HOME environment variable (if set)
    //! 2. ~/.config/senti (default)

    use std::path::PathBuf;

    /// Returns the senti home directory.
    pub fn senti_home() -> PathBuf {
        if let Ok(home) = std::env::var("SENTI_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".senti"),
            |h| h.join(".config").join("senti"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        senti_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        senti_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Origin prefix for the classification endpoint (empty = same origin).
    pub api_base: String,

    /// Origin that relative requests resolve against when `api_base` is empty.
    pub origin: String,

    /// Log level for the log file.
    pub log_level: String,
}

impl Config {
    pub const DEFAULT_ORIGIN: &str = "http://127.0.0.1:8000";
    const DEFAULT_LOG_LEVEL: &str = "info";

    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Returns the API base to use, preferring an explicit override
    /// (`--api-base` / `SENTI_API_BASE`) over the config value.
    ///
    /// The result is trimmed and may be empty (same-origin). A non-empty
    /// base must be a well-formed URL.
    ///
    /// # Errors
    /// Returns an error if the chosen base is not a valid URL.
    pub fn effective_api_base(&self, override_base: Option<&str>) -> Result<String> {
        normalize_api_base(override_base.unwrap_or(&self.api_base))
    }

    /// Saves only the `api_base` field to the config file.
    ///
    /// # Errors
    /// Returns an error if `api_base` is not a valid URL, or if the file
    /// cannot be read, parsed or written.
    pub fn save_api_base(api_base: &str) -> Result<()> {
        Self::save_api_base_to(&paths::config_path(), api_base)
    }

    /// Saves only the `api_base` field to a specific config file path.
    ///
    /// Creates the file with default template if it doesn't exist.
    /// If file exists, merges user values into the latest template.
    ///
    /// # Errors
    /// Returns an error if `api_base` is not a valid URL, or if the file
    /// cannot be read, parsed or written.
    pub fn save_api_base_to(path: &Path, api_base: &str) -> Result<()> {
        let api_base = normalize_api_base(api_base)?;

        let mut doc = if path.exists() {
            let user_config = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            overlay_on_template(&user_config)
                .with_context(|| format!("Failed to parse config from {}", path.display()))?
        } else {
            default_config_template()
                .parse()
                .context("Failed to parse default config template")?
        };

        doc["api_base"] = toml_edit::value(api_base);

        Self::write_config(path, &doc.to_string())
    }

    /// Creates a default config file at the given path.
    ///
    /// # Errors
    /// Returns an error if the file already exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to move {} into place at {}",
                tmp_path.display(),
                path.display()
            )
        })?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            origin: Self::DEFAULT_ORIGIN.to_string(),
            log_level: Self::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
