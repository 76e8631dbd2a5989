// src/models/config.rs

//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScrapeError};
use crate::models::RuleSet;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP and retry behavior settings
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Wiki location and roster settings
    #[serde(default)]
    pub source: SourceConfig,

    /// Extraction rule tables
    #[serde(default)]
    pub rules: RuleSet,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.fetch.user_agent.trim().is_empty() {
            return Err(ScrapeError::config("fetch.user_agent is empty"));
        }
        if self.fetch.timeout_secs == 0 {
            return Err(ScrapeError::config("fetch.timeout_secs must be > 0"));
        }
        if self.fetch.max_attempts == 0 {
            return Err(ScrapeError::config("fetch.max_attempts must be > 0"));
        }
        if self.source.base_url.trim().is_empty() {
            return Err(ScrapeError::config("source.base_url is empty"));
        }
        if self.rules.personality_types.is_empty() {
            return Err(ScrapeError::config("rules.personality_types is empty"));
        }
        if self.rules.fame_types.is_empty() {
            return Err(ScrapeError::config("rules.fame_types is empty"));
        }
        if self.rules.strategy_types.is_empty() {
            return Err(ScrapeError::config("rules.strategy_types is empty"));
        }
        if self.rules.interest_widths.is_empty() {
            return Err(ScrapeError::config("rules.interest_widths is empty"));
        }
        if self.rules.rate_limit_markers.is_empty() {
            return Err(ScrapeError::config("rules.rate_limit_markers is empty"));
        }
        Ok(())
    }
}

/// HTTP client and retry behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Total fetch attempts per page, first try included
    #[serde(default = "defaults::max_attempts")]
    pub max_attempts: u32,

    /// Base backoff delay in milliseconds; retry n waits n times this
    #[serde(default = "defaults::base_delay")]
    pub base_delay_ms: u64,

    /// Delay between successful requests in milliseconds
    #[serde(default = "defaults::request_delay")]
    pub request_delay_ms: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            max_attempts: defaults::max_attempts(),
            base_delay_ms: defaults::base_delay(),
            request_delay_ms: defaults::request_delay(),
        }
    }
}

/// Which wiki to scrape and which roster file to read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Base URL; officer names are appended query-escaped
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Default roster file path
    #[serde(default = "defaults::roster_file")]
    pub roster_file: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            roster_file: defaults::roster_file(),
        }
    }
}

mod defaults {
    pub fn user_agent() -> String {
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn max_attempts() -> u32 {
        3
    }
    pub fn base_delay() -> u64 {
        2000
    }
    pub fn request_delay() -> u64 {
        500
    }
    pub fn base_url() -> String {
        "https://wikiwiki.jp/sangokushi8r/".into()
    }
    pub fn roster_file() -> String {
        "characters.json".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.fetch.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_attempts() {
        let mut config = Config::default();
        config.fetch.max_attempts = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [fetch]
            max_attempts = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.fetch.max_attempts, 5);
        assert_eq!(config.fetch.timeout_secs, 30);
        assert_eq!(config.source.base_url, "https://wikiwiki.jp/sangokushi8r/");
    }
}
