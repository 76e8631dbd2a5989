// src/pipeline/roster.rs

//! Roster loading: officer name lists grouped by category.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use crate::error::{Result, ScrapeError};
use crate::utils::url;

/// Officer names grouped by category, as stored in the roster JSON file.
#[derive(Debug, Clone)]
pub struct Roster {
    categories: BTreeMap<String, Vec<String>>,
}

impl Roster {
    /// Load the roster from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let categories = serde_json::from_str(&content)?;
        Ok(Self { categories })
    }

    /// Category names with their officer counts, for listings.
    pub fn summaries(&self) -> Vec<(&str, usize)> {
        self.categories
            .iter()
            .map(|(name, officers)| (name.as_str(), officers.len()))
            .collect()
    }

    /// Officer names in one category, or `None` when it doesn't exist.
    pub fn names(&self, category: &str) -> Option<&[String]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    /// Build the page URL list for a category.
    ///
    /// Duplicate names would hit the same page twice, so they are rejected
    /// up front rather than silently re-scraped.
    pub fn target_urls(&self, category: &str, base_url: &str) -> Result<Vec<String>> {
        let names = self
            .names(category)
            .ok_or_else(|| ScrapeError::roster(format!("category '{category}' not found")))?;

        let urls: Vec<String> = names
            .iter()
            .map(|name| url::page_url(base_url, name))
            .collect();

        let duplicates = find_duplicates(&urls);
        if !duplicates.is_empty() {
            return Err(ScrapeError::roster(format!(
                "duplicate target URLs: {}",
                duplicates.join(", ")
            )));
        }

        Ok(urls)
    }
}

/// Report each URL that appears more than once, with 1-based positions.
fn find_duplicates(urls: &[String]) -> Vec<String> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut duplicates = Vec::new();

    for (index, url) in urls.iter().enumerate() {
        match seen.get(url.as_str()) {
            Some(first) => {
                let info = format!("{url} (positions {}, {})", first + 1, index + 1);
                if !duplicates.contains(&info) {
                    duplicates.push(info);
                }
            }
            None => {
                seen.insert(url, index);
            }
        }
    }

    duplicates
}
