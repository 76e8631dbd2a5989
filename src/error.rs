// src/error.rs

//! Unified error handling for the scraper application.

use thiserror::Error;

/// Result type alias for scraper operations.
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request could not be built or sent
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote host answered 429
    #[error("rate limited: {0}")]
    RateLimited(String),

    /// Any other non-200 HTTP status
    #[error("HTTP status error: {status} {reason}")]
    Status { status: u16, reason: String },

    /// Response body could not be parsed as an HTML document
    #[error("HTML parse error: {0}")]
    Parse(String),

    /// Rate limited through every allowed attempt
    #[error("retry limit reached after {attempts} attempts")]
    RetriesExhausted { attempts: u32 },

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Roster loading or validation error
    #[error("Roster error: {0}")]
    Roster(String),
}

impl ScrapeError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an HTML parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Create a roster error.
    pub fn roster(message: impl Into<String>) -> Self {
        Self::Roster(message.into())
    }

    /// True when this error means the remote source is throttling us.
    ///
    /// Matches the dedicated variants as well as any error whose text carries
    /// one of the configured rate-limit markers. Callers use this both for the
    /// retry decision and to abort a batch instead of skipping one item.
    pub fn is_rate_limit(&self, markers: &[String]) -> bool {
        match self {
            Self::RateLimited(_) | Self::RetriesExhausted { .. } => true,
            other => {
                let text = other.to_string();
                markers.iter().any(|marker| text.contains(marker.as_str()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markers() -> Vec<String> {
        vec!["429".to_string(), "Too Many Requests".to_string()]
    }

    #[test]
    fn test_rate_limited_variant_matches() {
        let err = ScrapeError::RateLimited("429 Too Many Requests".to_string());
        assert!(err.is_rate_limit(&markers()));
    }

    #[test]
    fn test_exhausted_variant_matches() {
        let err = ScrapeError::RetriesExhausted { attempts: 3 };
        assert!(err.is_rate_limit(&markers()));
    }

    #[test]
    fn test_marker_in_text_matches() {
        let err = ScrapeError::Parse("server said: Too Many Requests".to_string());
        assert!(err.is_rate_limit(&markers()));
    }

    #[test]
    fn test_plain_status_error_does_not_match() {
        let err = ScrapeError::Status {
            status: 404,
            reason: "Not Found".to_string(),
        };
        assert!(!err.is_rate_limit(&markers()));
    }
}
