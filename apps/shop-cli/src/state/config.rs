//! # Configuration State
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--json`, `--log`, `--close-command`)
//! 2. Environment variables (`SHOP_*`)
//! 3. Defaults (this file)
//!
//! ## Thread Safety
//! Read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};

/// Default session terminator.
pub const DEFAULT_CLOSE_COMMAND: &str = "Close";

/// Default log filter when neither `RUST_LOG` nor `SHOP_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// How responses are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// One human-readable message per command
    #[default]
    Text,

    /// One JSON object per command
    Json,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// `tracing-subscriber` filter directive, e.g. `"debug"` or `"shop_core=debug"`
    pub log_filter: String,

    /// Line that ends the session
    pub close_command: String,

    /// Response format
    pub output: OutputMode,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            close_command: DEFAULT_CLOSE_COMMAND.to_string(),
            output: OutputMode::Text,
        }
    }
}

impl ConfigState {
    /// Creates a config from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `SHOP_LOG`: log filter
    /// - `SHOP_CLOSE_COMMAND`: session terminator
    /// - `SHOP_JSON`: `1` or `true` switches to JSON output
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(filter) = lookup("SHOP_LOG").filter(|v| !v.trim().is_empty()) {
            config.log_filter = filter;
        }

        if let Some(close) = lookup("SHOP_CLOSE_COMMAND").filter(|v| !v.trim().is_empty()) {
            config.close_command = close.trim().to_string();
        }

        if let Some(json) = lookup("SHOP_JSON") {
            if matches!(json.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes") {
                config.output = OutputMode::Json;
            }
        }

        config
    }
}
