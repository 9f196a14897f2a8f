//! # Quote Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     HAVEN_MAX_NIGHTS=90                                                │
//! │     HAVEN_CURRENCY=EUR                                                 │
//! │     HAVEN_LOG=debug                                                    │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, else the platform config dir:                     │
//! │     ~/.config/stays/quote.toml (Linux)                                 │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [booking]
//! max_nights = 365   # 0 disables the cap
//!
//! [display]
//! currency = "USD"
//!
//! [logging]
//! filter = "info,haven=debug"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{QuoteError, QuoteResult};

// =============================================================================
// Sections
// =============================================================================

/// Booking rules applied on top of each listing's own settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingSettings {
    /// Longest stay accepted, in nights. 0 disables the cap.
    #[serde(default = "default_max_nights")]
    pub max_nights: i64,
}

fn default_max_nights() -> i64 {
    365
}

impl Default for BookingSettings {
    fn default() -> Self {
        BookingSettings {
            max_nights: default_max_nights(),
        }
    }
}

/// How amounts are rendered by the CLI and in logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// ISO 4217 code, e.g. "USD".
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            currency: default_currency(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directive. `RUST_LOG` still wins.
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "info,haven=debug".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            filter: default_filter(),
        }
    }
}

// =============================================================================
// Main Quote Configuration
// =============================================================================

/// Complete quote desk configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteConfig {
    #[serde(default)]
    pub booking: BookingSettings,

    #[serde(default)]
    pub display: DisplaySettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl QuoteConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (quote.toml)
    /// 3. Environment variables
    ///
    /// A missing file is only tolerated at the platform default path; a path
    /// the caller names must exist.
    pub fn load(config_path: Option<PathBuf>) -> QuoteResult<Self> {
        let mut config = Self::default();

        match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(QuoteError::ConfigLoadFailed(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                config = Self::from_file(&path)?;
            }
            None => match Self::default_config_path() {
                Some(path) if path.exists() => config = Self::from_file(&path)?,
                Some(path) => debug!(?path, "Config file not found, using defaults"),
                None => debug!("No platform config directory, using defaults"),
            },
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    fn from_file(path: &Path) -> QuoteResult<Self> {
        info!(?path, "Loading quote config from file");
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load quote config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a TOML document; missing sections take their defaults.
    pub fn from_toml(contents: &str) -> QuoteResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> QuoteResult<()> {
        if self.booking.max_nights < 0 {
            return Err(QuoteError::InvalidConfig(
                "booking.max_nights must be 0 or greater".into(),
            ));
        }

        let currency = &self.display.currency;
        if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(QuoteError::InvalidConfig(format!(
                "display.currency must be a 3-letter ISO code, got: '{}'",
                currency
            )));
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) -> QuoteResult<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from any key lookup (the environment in production).
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> QuoteResult<()> {
        if let Some(value) = lookup("HAVEN_MAX_NIGHTS") {
            let max = value.trim().parse::<i64>().map_err(|_| {
                QuoteError::InvalidConfig(format!(
                    "HAVEN_MAX_NIGHTS must be a whole number, got: '{}'",
                    value
                ))
            })?;
            debug!(max_nights = max, "Overriding max nights from environment");
            self.booking.max_nights = max;
        }

        if let Some(currency) = lookup("HAVEN_CURRENCY") {
            debug!(currency = %currency, "Overriding currency from environment");
            self.display.currency = currency.to_uppercase();
        }

        if let Some(filter) = lookup("HAVEN_LOG") {
            self.logging.filter = filter;
        }

        Ok(())
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "haven", "stays")
            .map(|dirs| dirs.config_dir().join("quote.toml"))
    }

    /// Returns the currency code.
    pub fn currency(&self) -> &str {
        &self.display.currency
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = QuoteConfig::default();
        assert_eq!(config.booking.max_nights, 365);
        assert_eq!(config.currency(), "USD");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = QuoteConfig::from_toml("[booking]\nmax_nights = 30\n").unwrap();
        assert_eq!(config.booking.max_nights, 30);
        assert_eq!(config.display.currency, "USD");
        assert_eq!(config.logging.filter, "info,haven=debug");
    }

    #[test]
    fn test_bundled_fixture() {
        let config = QuoteConfig::from_toml(include_str!("../fixtures/quote.toml")).unwrap();
        assert_eq!(config.booking.max_nights, 90);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = QuoteConfig::default();
        config.booking.max_nights = -1;
        assert!(config.validate().is_err());

        config.booking.max_nights = 0;
        assert!(config.validate().is_ok());

        config.display.currency = "usd".to_string();
        assert!(config.validate().is_err());

        config.display.currency = "EURO".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("HAVEN_MAX_NIGHTS", "90"),
            ("HAVEN_CURRENCY", "eur"),
            ("HAVEN_LOG", "warn"),
        ]
        .into_iter()
        .collect();

        let mut config = QuoteConfig::default();
        config
            .apply_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.booking.max_nights, 90);
        assert_eq!(config.currency(), "EUR");
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn test_bad_numeric_override_is_rejected() {
        let mut config = QuoteConfig::default();
        let result =
            config.apply_overrides(|key| (key == "HAVEN_MAX_NIGHTS").then(|| "lots".to_string()));
        assert!(matches!(result, Err(QuoteError::InvalidConfig(msg)) if msg.contains("lots")));
        assert_eq!(config.booking.max_nights, 365);
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let path = std::env::temp_dir().join(format!(
            "haven-quote-missing-{}/quote.toml",
            std::process::id()
        ));
        assert!(matches!(
            QuoteConfig::load(Some(path)),
            Err(QuoteError::ConfigLoadFailed(msg)) if msg.contains("not found")
        ));
    }

    #[test]
    fn test_load_from_explicit_file() {
        let path = std::env::temp_dir().join(format!("haven-quote-{}.toml", std::process::id()));
        std::fs::write(&path, "[display]\ncurrency = \"GBP\"\n").unwrap();

        let config = QuoteConfig::load(Some(path.clone())).unwrap();
        std::fs::remove_file(&path).unwrap();

        // HAVEN_CURRENCY may be set in the environment running the tests
        if std::env::var("HAVEN_CURRENCY").is_err() {
            assert_eq!(config.currency(), "GBP");
        }
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = toml::to_string_pretty(&QuoteConfig::default()).unwrap();
        assert!(toml_str.contains("[booking]"));
        assert!(toml_str.contains("[display]"));
        assert_eq!(QuoteConfig::from_toml(&toml_str).unwrap(), QuoteConfig::default());
    }
}
