//! Aircraft-Scrape: listing extraction for aircraft-for-sale result pages
//!
//! This crate reads one rendered results page of the marketplace, turns every
//! listing row into a flat [`ListingRecord`], and writes the records out as a
//! JSON array. It can also compare a fresh run against a previous one and
//! render the changes as an HTML report.

pub mod config;
pub mod extract;
pub mod output;
pub mod source;

use thiserror::Error;

/// Main error type for Aircraft-Scrape operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Fetch { url: String, source: reqwest::Error },

    #[error("Unexpected HTTP status {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Page {source_name} is not ready: selector '{selector}' not found")]
    PageNotReady {
        source_name: String,
        selector: String,
    },

    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid CSS selector in config: {0}")]
    InvalidSelector(String),
}

/// Errors raised while writing or reading listing files
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Aircraft-Scrape operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for output operations
pub type OutputResult<T> = std::result::Result<T, OutputError>;

// Re-export commonly used types
pub use config::Config;
pub use extract::{extract_listings, ListingRecord};
pub use output::{
    compare_and_write, diff, format_html_report, load_listings, write_listings, ChangeReport,
};
pub use source::{load_document, FilePageSource, HttpPageSource, PageSource};
