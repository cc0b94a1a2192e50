//! Locating the listing rows of a results page

use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;

/// A single listing row of the results table
///
/// Rows borrow from the parsed document; every extractor only reads them.
pub type Row<'a> = ElementRef<'a>;

static PHOTO_CELL: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".listings > tbody > tr > td.photo").expect("photo cell selector is valid")
});

static LISTING_TR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".listings tr").expect("listing row selector is valid"));

/// Returns the rows that hold a listing, in document order
///
/// A row is any `tr` inside a `.listings` table that is an ancestor of a
/// listing's photo cell. Each row appears once even when it wraps several
/// photo cells. A page without listings yields an empty vector.
pub fn locate_rows(document: &Html) -> Vec<Row<'_>> {
    let mut ancestors = HashSet::new();

    for cell in document.select(&PHOTO_CELL) {
        for node in cell.ancestors() {
            if let Some(element) = ElementRef::wrap(node) {
                if element.value().name() == "tr" {
                    ancestors.insert(element.id());
                }
            }
        }
    }

    if ancestors.is_empty() {
        return Vec::new();
    }

    // `.listings tr` walks the tree in document order, which gives the
    // ordering and keeps rows outside a listings table out.
    document
        .select(&LISTING_TR)
        .filter(|row| ancestors.contains(&row.id()))
        .collect()
}
