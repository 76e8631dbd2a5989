// src/services/mod.rs

//! Service layer: the extraction engine and the fetch layer.
//!
//! - Table classification (`TableClassifier`)
//! - Field extraction (`ProfileExtractor`, `TalentExtractor`,
//!   `InterestExtractor`, `MoveExtractor`)
//! - Record assembly (`CharacterExtractor`)
//! - Page fetching with rate-limit retry (`PageFetcher`)

mod classify;
mod extract;
mod fetch;
mod interests;
mod moves;
mod profile;
mod talent;

pub use classify::{TableClassifier, TableKind};
pub use extract::CharacterExtractor;
pub use fetch::{PageFetcher, backoff_delay, retry_rate_limited};
pub use interests::InterestExtractor;
pub use moves::MoveExtractor;
pub use profile::ProfileExtractor;
pub use talent::TalentExtractor;
