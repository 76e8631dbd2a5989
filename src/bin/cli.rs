//! busho_scrape CLI
//!
//! Fetches the officer pages for one roster category and prints the
//! collected records as JSON, sorted by death year.

use std::path::PathBuf;

use busho_scrape::{
    error::Result,
    models::Config,
    pipeline::{self, Roster},
    utils::http,
};
use clap::{Parser, Subcommand};

/// Sangokushi 8 Remake officer scraper
#[derive(Parser, Debug)]
#[command(name = "busho", version, about = "Sangokushi 8 Remake officer scraper")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scrape every officer in a roster category
    Scrape {
        /// Roster category to process
        category: String,

        /// Path to the roster file (default: from config)
        #[arg(long)]
        roster: Option<PathBuf>,
    },

    /// List roster categories and their officer counts
    Categories {
        /// Path to the roster file (default: from config)
        #[arg(long)]
        roster: Option<PathBuf>,
    },

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default(&cli.config);

    match cli.command {
        Command::Scrape { category, roster } => {
            let roster_path =
                roster.unwrap_or_else(|| PathBuf::from(&config.source.roster_file));
            let roster = Roster::load(&roster_path)?;

            let urls = match roster.target_urls(&category, &config.source.base_url) {
                Ok(urls) => urls,
                Err(err) => {
                    print_categories(&roster);
                    return Err(err);
                }
            };

            log::info!("processing category '{}' ({} officers)", category, urls.len());

            let client = http::create_client(&config.fetch)?;
            let mut outcome = pipeline::run_batch(&config, &client, &urls)?;

            // Ascending death year, matching the dataset's ordering.
            outcome.characters.sort_by_key(|c| c.death_year);

            let json = serde_json::to_string_pretty(&outcome.characters)?;
            println!("{json}");

            if outcome.failures > 0 {
                log::warn!("{} of {} pages failed", outcome.failures, outcome.attempted);
            }

            copy_to_clipboard(&json);
        }

        Command::Categories { roster } => {
            let roster_path =
                roster.unwrap_or_else(|| PathBuf::from(&config.source.roster_file));
            let roster = Roster::load(&roster_path)?;
            print_categories(&roster);
        }

        Command::Validate => {
            config.validate()?;
            log::info!("configuration OK");
        }
    }

    Ok(())
}

fn print_categories(roster: &Roster) {
    eprintln!("Available categories:");
    for (name, count) in roster.summaries() {
        eprintln!("  {name} ({count} officers)");
    }
}

/// Copy the JSON to the system clipboard; macOS only, best effort.
#[cfg(target_os = "macos")]
fn copy_to_clipboard(text: &str) {
    use std::io::Write;
    use std::process::{Command, Stdio};

    let spawned = Command::new("pbcopy").stdin(Stdio::piped()).spawn();
    let Ok(mut child) = spawned else {
        log::warn!("failed to launch pbcopy");
        return;
    };

    let write_result = child
        .stdin
        .as_mut()
        .map(|stdin| stdin.write_all(text.as_bytes()));
    drop(child.stdin.take());

    match (write_result, child.wait()) {
        (Some(Ok(())), Ok(status)) if status.success() => {
            log::info!("copied result to clipboard");
        }
        _ => log::warn!("clipboard copy failed"),
    }
}

#[cfg(not(target_os = "macos"))]
fn copy_to_clipboard(_text: &str) {}
