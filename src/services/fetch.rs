// src/services/fetch.rs

//! Page fetching with rate-limit retry.
//!
//! The wiki throttles aggressively. A 429 response (or an error carrying a
//! throttling marker) is retried with a growing delay; any other failure is
//! returned immediately. Exhausting the retries yields a distinct error so
//! callers can stop a whole batch instead of skipping one page.

use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;
use scraper::Html;

use crate::error::{Result, ScrapeError};
use crate::models::{FetchConfig, RuleSet};

/// Fetches wiki pages, absorbing transient rate limiting.
pub struct PageFetcher<'a> {
    client: &'a Client,
    config: &'a FetchConfig,
    rules: &'a RuleSet,
}

impl<'a> PageFetcher<'a> {
    pub fn new(client: &'a Client, config: &'a FetchConfig, rules: &'a RuleSet) -> Self {
        Self {
            client,
            config,
            rules,
        }
    }

    /// Fetch and parse one page, retrying on rate limiting.
    pub fn fetch(&self, url: &str) -> Result<Html> {
        retry_rate_limited(self.config, &self.rules.rate_limit_markers, || {
            self.fetch_once(url)
        })
    }

    /// One GET attempt: status classification, body read, HTML parse.
    fn fetch_once(&self, url: &str) -> Result<Html> {
        let response = self.client.get(url).send()?;

        let status = response.status();
        if status.as_u16() == 429 {
            return Err(ScrapeError::RateLimited("429 Too Many Requests".to_string()));
        }
        if status.as_u16() != 200 {
            return Err(ScrapeError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        let body = response.text()?;
        parse_document(&body)
    }
}

/// Parse a response body into an HTML document.
///
/// The underlying parser recovers from malformed markup, so the parse
/// failure this layer can actually detect is a body with nothing in it.
pub fn parse_document(body: &str) -> Result<Html> {
    if body.trim().is_empty() {
        return Err(ScrapeError::parse("empty response body"));
    }
    Ok(Html::parse_document(body))
}

/// Drive the retry loop around one fetch attempt.
///
/// Rate-limit failures sleep [`backoff_delay`] and retry, up to
/// `config.max_attempts` total attempts; hitting the limit maps to
/// [`ScrapeError::RetriesExhausted`]. Any other failure returns immediately.
pub fn retry_rate_limited<T>(
    config: &FetchConfig,
    markers: &[String],
    mut attempt_fn: impl FnMut() -> Result<T>,
) -> Result<T> {
    let mut retries = 0;
    loop {
        match attempt_fn() {
            Ok(value) => return Ok(value),
            Err(err) if err.is_rate_limit(markers) => {
                retries += 1;
                if retries >= config.max_attempts {
                    return Err(ScrapeError::RetriesExhausted {
                        attempts: config.max_attempts,
                    });
                }

                let delay = backoff_delay(config, retries);
                log::warn!(
                    "rate limited, retrying in {:?} (attempt {}/{})",
                    delay,
                    retries + 1,
                    config.max_attempts
                );
                thread::sleep(delay);
            }
            Err(err) => return Err(err),
        }
    }
}

/// Backoff before retry number `retry` (1-based): `base_delay * retry`.
pub fn backoff_delay(config: &FetchConfig, retry: u32) -> Duration {
    Duration::from_millis(config.base_delay_ms * u64::from(retry))
}
