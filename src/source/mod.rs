//! Page sources supplying the results page HTML
//!
//! This module contains the glue around the extraction core:
//! - Fetching a results page over HTTP
//! - Reading a saved results page from disk
//! - Checking that the page finished rendering before it is parsed

mod fetcher;
mod file;

pub use fetcher::{build_http_client, HttpPageSource};
pub use file::FilePageSource;

use crate::{ConfigError, ScrapeError};
use scraper::{Html, Selector};
use std::future::Future;

/// Something that can produce the HTML of a results page
pub trait PageSource {
    /// Human readable origin of the page, used in logs and errors
    fn describe(&self) -> String;

    /// Returns the page HTML
    fn fetch_html(&self) -> impl Future<Output = Result<String, ScrapeError>> + Send;
}

/// Fetches a page and parses it into a document
///
/// When `ready_selector` is non-empty the page must contain a matching
/// element, otherwise it is treated as incomplete and rejected with
/// [`ScrapeError::PageNotReady`]. The check runs once; there is no waiting.
///
/// # Arguments
///
/// * `source` - Where the page comes from
/// * `ready_selector` - CSS selector of an element marking a complete page
///
/// # Returns
///
/// * `Ok(Html)` - The parsed page
/// * `Err(ScrapeError)` - The page could not be fetched or is incomplete
pub async fn load_document<S: PageSource>(
    source: &S,
    ready_selector: &str,
) -> Result<Html, ScrapeError> {
    tracing::info!("Loading results page from {}", source.describe());
    let html = source.fetch_html().await?;
    tracing::debug!("Received {} bytes of HTML", html.len());

    let document = Html::parse_document(&html);

    if !ready_selector.is_empty() && !is_ready(&document, ready_selector)? {
        return Err(ScrapeError::PageNotReady {
            source_name: source.describe(),
            selector: ready_selector.to_string(),
        });
    }

    Ok(document)
}

/// Returns true if `document` contains an element matching `ready_selector`
fn is_ready(document: &Html, ready_selector: &str) -> Result<bool, ConfigError> {
    let selector = Selector::parse(ready_selector)
        .map_err(|e| ConfigError::InvalidSelector(format!("'{}': {:?}", ready_selector, e)))?;
    Ok(document.select(&selector).next().is_some())
}
