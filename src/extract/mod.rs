//! Listing extraction from a rendered results page
//!
//! This module contains the parsing rules of the crate:
//! - Whitespace normalization of cell text
//! - Locating the listing rows of the results table
//! - One extractor per field group
//! - Assembling the extractor outputs into one record per row
//!
//! Extraction never fails. Missing elements degrade field by field, so the
//! number of records always equals the number of rows located.

mod fields;
mod record;
mod rows;
mod text;

pub use fields::{
    extract_broker, extract_description, extract_price, extract_specs, extract_thumbnail,
    extract_title, extract_updated_at, BROKER_FIELDS, SPEC_FIELDS,
};
pub use record::{assemble, BrokerInfo, ListingRecord, Specs, TitleInfo};
pub use rows::{locate_rows, Row};
pub use text::normalize;

use scraper::Html;

/// Extracts one listing record per row of the results page
///
/// # Arguments
///
/// * `document` - The parsed results page
/// * `base_url` - Site prefix prepended to each detail link
///
/// # Returns
///
/// The records in row order. A page without listing rows yields an empty
/// vector.
///
/// # Example
///
/// ```
/// use aircraft_scrape::extract::extract_listings;
/// use scraper::Html;
///
/// let html = r#"<table class="listings"><tr><td class="photo"></td>
///     <td><a id="aDetailsLink" href="/listing/1">Piper Cub</a></td></tr></table>"#;
/// let document = Html::parse_document(html);
/// let records = extract_listings(&document, "http://www.controller.com");
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].title, "Piper Cub");
/// ```
pub fn extract_listings(document: &Html, base_url: &str) -> Vec<ListingRecord> {
    let rows = locate_rows(document);
    tracing::debug!("Located {} listing rows", rows.len());

    let records: Vec<ListingRecord> = rows.into_iter().map(|row| assemble(row, base_url)).collect();

    let without_specs = records.iter().filter(|r| !r.has_specs()).count();
    tracing::debug!(
        "Extracted {} listings ({} without specs)",
        records.len(),
        without_specs
    );

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_record_per_row() {
        let html = r#"<table class="listings">
            <tr><td class="photo"></td><td><a id="aDetailsLink" href="/a">A</a></td></tr>
            <tr><td class="photo"></td></tr>
            <tr><td class="photo"></td><td><a id="aDetailsLink" href="/c">C</a></td></tr>
        </table>"#;
        let document = Html::parse_document(html);
        let records = extract_listings(&document, "http://www.controller.com");

        assert_eq!(records.len(), locate_rows(&document).len());
        let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "", "C"]);
    }

    #[test]
    fn test_no_rows_gives_empty_output() {
        let document = Html::parse_document("<html><body></body></html>");
        assert!(extract_listings(&document, "http://www.controller.com").is_empty());
    }
}
