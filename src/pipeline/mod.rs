// src/pipeline/mod.rs

//! Pipeline entry points.
//!
//! - `roster`: load officer name lists and build target URLs
//! - `scrape`: fetch and extract characters, one page at a time

pub mod roster;
pub mod scrape;

pub use roster::Roster;
pub use scrape::{BatchOutcome, run_batch, scrape_character};
