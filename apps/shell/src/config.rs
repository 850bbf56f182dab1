//! # Shell Configuration
//!
//! ## Configuration Sources (later overrides earlier)
//! 1. Defaults (this file)
//! 2. Config file (`shell.toml`)
//! 3. Environment variables (`SHOPHUB_*`)
//!
//! ## Example `shell.toml`
//! ```toml
//! store_name = "ShopHub"
//! catalog_path = "/srv/shophub/catalog.json"
//! load_delay_ms = 500
//! log_filter = "info,shophub=debug"
//! currency_symbol = "$"
//! ```
//!
//! Configuration is read-only after startup.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use shophub_core::Money;
use tracing::{debug, info};

/// Longest artificial catalog delay accepted.
const MAX_LOAD_DELAY_MS: u64 = 60_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Shown in the welcome banner.
    pub store_name: String,

    /// JSON catalog file. `None` uses the built-in demo catalog.
    pub catalog_path: Option<PathBuf>,

    /// Artificial delay before the catalog finishes loading, in milliseconds.
    /// Simulates a network fetch. Default: 500
    pub load_delay_ms: u64,

    /// Default tracing filter. `RUST_LOG` takes precedence.
    pub log_filter: String,

    /// Currency symbol for rendered prices.
    pub currency_symbol: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            store_name: "ShopHub".to_string(),
            catalog_path: None,
            load_delay_ms: 500,
            log_filter: "info,shophub=debug".to_string(),
            currency_symbol: "$".to_string(),
        }
    }
}

impl ShellConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// A missing config file is not an error; an unreadable or malformed one
    /// is.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading shell config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Platform config location, e.g. `~/.config/shophub/shell.toml` on Linux.
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "shophub", "shophub")
            .map(|dirs| dirs.config_dir().join("shell.toml"))
    }

    /// Applies `SHOPHUB_*` overrides read through `lookup`.
    ///
    /// ## Variables
    /// - `SHOPHUB_STORE_NAME`
    /// - `SHOPHUB_CATALOG_PATH`
    /// - `SHOPHUB_LOAD_DELAY_MS`
    /// - `SHOPHUB_LOG_FILTER`
    /// - `SHOPHUB_CURRENCY_SYMBOL`
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("SHOPHUB_STORE_NAME") {
            self.store_name = name;
        }

        if let Some(path) = lookup("SHOPHUB_CATALOG_PATH") {
            debug!(catalog_path = %path, "Overriding catalog path from environment");
            self.catalog_path = Some(PathBuf::from(path));
        }

        if let Some(delay) = lookup("SHOPHUB_LOAD_DELAY_MS") {
            self.load_delay_ms = delay.parse().map_err(|_| ConfigError::InvalidValue {
                key: "SHOPHUB_LOAD_DELAY_MS".to_string(),
                reason: format!("expected milliseconds, got '{}'", delay),
            })?;
        }

        if let Some(filter) = lookup("SHOPHUB_LOG_FILTER") {
            self.log_filter = filter;
        }

        if let Some(symbol) = lookup("SHOPHUB_CURRENCY_SYMBOL") {
            self.currency_symbol = symbol;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "store_name".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        if self.load_delay_ms > MAX_LOAD_DELAY_MS {
            return Err(ConfigError::InvalidValue {
                key: "load_delay_ms".to_string(),
                reason: format!("must be at most {}", MAX_LOAD_DELAY_MS),
            });
        }

        Ok(())
    }

    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }

    /// Formats money with the configured currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use shophub_core::Money;
    /// use shophub_shell::config::ShellConfig;
    ///
    /// let config = ShellConfig {
    ///     currency_symbol: "€".to_string(),
    ///     ..ShellConfig::default()
    /// };
    /// assert_eq!(config.format_price(Money::from_cents(29999)), "€299.99");
    /// ```
    pub fn format_price(&self, amount: Money) -> String {
        amount.to_string().replacen('$', &self.currency_symbol, 1)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}
