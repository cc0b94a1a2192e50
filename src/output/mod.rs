//! Output module for listing files and change reports
//!
//! This module handles:
//! - Writing extracted listings as a flat JSON array
//! - Reading a previous run's listings back
//! - Comparing two runs and rendering the changes as HTML

mod html;
mod json;
mod report;

pub use html::format_html_report;
pub use json::{load_listings, write_listings};
pub use report::{diff, ChangeReport};

use crate::extract::ListingRecord;
use crate::Result;
use std::path::Path;

/// Compares `records` against a previous run, then writes them to `output`
///
/// The previous listings are read before anything is written, so `previous`
/// may be the same file as `output`: the old run is compared first and then
/// replaced by the new one.
///
/// # Returns
///
/// * `Ok(Some(report))` - Listings changed since the previous run
/// * `Ok(None)` - Nothing changed
/// * `Err(ScrapeError)` - The previous file could not be read or the output
///   could not be written
pub fn compare_and_write(
    output: &Path,
    records: &[ListingRecord],
    previous: &Path,
) -> Result<Option<ChangeReport>> {
    let old = load_listings(previous)?;
    write_listings(output, records)?;
    Ok(diff(records, &old))
}
