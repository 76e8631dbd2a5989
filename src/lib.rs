// src/lib.rs

//! busho_scrape library
//!
//! Turns officer biography pages from the Sangokushi 8 Remake wiki into
//! structured character records for a strategy-game dataset.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod utils;
