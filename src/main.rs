//! Aircraft-Scrape main entry point
//!
//! This is the command-line interface for the aircraft listing scraper.

use aircraft_scrape::config::{load_config_or_default, Config};
use aircraft_scrape::source::{build_http_client, load_document, FilePageSource, HttpPageSource};
use aircraft_scrape::{compare_and_write, extract_listings, format_html_report, write_listings};
use aircraft_scrape::ListingRecord;
use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Aircraft-Scrape: listing extraction for aircraft-for-sale result pages
///
/// Reads one results page, extracts a record per listing row and writes the
/// records to a JSON file.
#[derive(Parser, Debug)]
#[command(name = "aircraft-scrape")]
#[command(version)]
#[command(about = "Extracts aircraft listings from a results page", long_about = None)]
struct Cli {
    /// Results page URL, or path to a saved HTML page
    #[arg(value_name = "SOURCE")]
    source: String,

    /// Destination JSON file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Previous output to compare against; prints an HTML change report
    #[arg(long, value_name = "OLD_JSON")]
    compare: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = load_config_or_default(cli.config.as_deref()).with_context(|| match &cli.config {
        Some(path) => format!("Failed to load configuration from {}", path.display()),
        None => "Invalid default configuration".to_string(),
    })?;

    let records = match scrape(&config, &cli.source).await {
        Ok(records) => records,
        Err(e) => {
            tracing::error!("Scrape failed: {:#}", e);
            return Err(e);
        }
    };

    match &cli.compare {
        Some(previous) => handle_compare(&cli.output, &records, previous)?,
        None => write_listings(&cli.output, &records)
            .with_context(|| format!("Failed to write {}", cli.output.display()))?,
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("aircraft_scrape=info,warn"),
            1 => EnvFilter::new("aircraft_scrape=debug,info"),
            2 => EnvFilter::new("aircraft_scrape=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the results page and extracts its listings
async fn scrape(config: &Config, source: &str) -> anyhow::Result<Vec<ListingRecord>> {
    let ready_selector = config.site.ready_selector.as_str();

    let loaded = if source.starts_with("http://") || source.starts_with("https://") {
        let client = build_http_client(&config.user_agent, &config.fetch)
            .context("Failed to build HTTP client")?;
        load_document(&HttpPageSource::new(client, source), ready_selector).await
    } else {
        load_document(&FilePageSource::new(source), ready_selector).await
    };
    let document = loaded.with_context(|| format!("Failed to load results page {}", source))?;

    let records = extract_listings(&document, &config.site.base_url);
    tracing::info!("Extracted {} listings", records.len());
    Ok(records)
}

/// Handles --compare: diffs against a previous run, writes, prints the report
fn handle_compare(
    output: &Path,
    records: &[ListingRecord],
    previous: &Path,
) -> anyhow::Result<()> {
    let report = compare_and_write(output, records, previous).with_context(|| {
        format!(
            "Failed to compare against {} and write {}",
            previous.display(),
            output.display()
        )
    })?;

    match report {
        Some(report) => {
            tracing::info!("{} listings changed since the previous run", report.len());
            println!("{}", format_html_report(&report));
        }
        None => println!("No changes"),
    }

    Ok(())
}
