// src/models/mod.rs

//! Domain models for the scraper application.

mod character;
mod config;
mod rules;

// Re-export all public types
pub use character::Character;
pub use config::{Config, FetchConfig, SourceConfig};
pub use rules::RuleSet;
