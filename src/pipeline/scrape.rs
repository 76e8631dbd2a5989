// src/pipeline/scrape.rs

//! Scraping pipeline: fetch, parse, extract, one officer at a time.

use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::Result;
use crate::models::{Character, Config};
use crate::services::{CharacterExtractor, PageFetcher};

/// Summary of one batch run.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub characters: Vec<Character>,
    pub attempted: usize,
    pub failures: usize,
}

/// Fetch and extract a single officer page.
pub fn scrape_character(
    fetcher: &PageFetcher,
    extractor: &CharacterExtractor,
    url: &str,
) -> Result<Character> {
    let doc = fetcher.fetch(url)?;
    Ok(extractor.extract(&doc))
}

/// Process every target URL in order, strictly sequentially.
///
/// A failed page is logged and skipped. A rate-limit failure that survived
/// the retry layer means the wiki is throttling us, so the rest of the
/// batch is aborted rather than hammered.
pub fn run_batch(config: &Config, client: &Client, urls: &[String]) -> Result<BatchOutcome> {
    let fetcher = PageFetcher::new(client, &config.fetch, &config.rules);
    let extractor = CharacterExtractor::new(&config.rules);

    let mut outcome = BatchOutcome {
        attempted: urls.len(),
        ..BatchOutcome::default()
    };
    let delay = Duration::from_millis(config.fetch.request_delay_ms);

    for (index, url) in urls.iter().enumerate() {
        log::info!("processing ({}/{}): {}", index + 1, urls.len(), url);

        match scrape_character(&fetcher, &extractor, url) {
            Ok(character) => {
                outcome.characters.push(character);

                // Self-throttle between successful requests; never after the last.
                if index < urls.len() - 1 && !delay.is_zero() {
                    thread::sleep(delay);
                }
            }
            Err(err) if err.is_rate_limit(&config.rules.rate_limit_markers) => {
                log::error!("rate limit reached, aborting batch at {url}: {err}");
                return Err(err);
            }
            Err(err) => {
                outcome.failures += 1;
                log::warn!("failed to process {url}: {err}");
            }
        }
    }

    Ok(outcome)
}
