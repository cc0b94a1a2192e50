//! Per-field extractors for a listing row
//!
//! Every extractor is a pure read of one row. None of them fail: a missing
//! element degrades to an empty string, or to `None` where the field group is
//! optional (the specs block). The return types carry that contract.
//!
//! # Layout assumptions
//!
//! | field group | source inside the row |
//! |-------------|-----------------------|
//! | link, title | `#aDetailsLink` anchor |
//! | price | `#auction-CNTprice` |
//! | desc | `.listing-summary tr:nth-child(1) span` |
//! | thumb | `td.photo img` |
//! | updatedAt | `span.date-time3` |
//! | specs | `td.med` whose first child is a `span.listings-label` |
//! | broker | `td.comp-info` and its direct `a` child |
//!
//! The specs and broker blocks are bound to field names by line position.
//! That mirrors the fixed layout of the results table and will silently
//! mis-assign values if the site reorders those lines.
//!
//! The broker block only merges consecutive newlines. A line holding nothing
//! but whitespace survives as an empty line and shifts every field after it.

use super::record::{BrokerInfo, Specs, TitleInfo};
use super::rows::Row;
use super::text::normalize;
use regex::Regex;
use scraper::{ElementRef, Node, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;

/// Field order of the specs block
pub const SPEC_FIELDS: [&str; 4] = ["sn", "reg", "tt", "pax"];

/// Field order of the broker block
pub const BROKER_FIELDS: [&str; 4] = ["brokerName", "location", "phone", "phone2"];

static DETAILS_LINK: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("#aDetailsLink").expect("details link selector is valid")
});
static PRICE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("#auction-CNTprice").expect("price selector is valid"));
static DESCRIPTION: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".listing-summary tr:nth-child(1) span")
        .expect("description selector is valid")
});
static THUMBNAIL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td.photo img").expect("thumbnail selector is valid"));
static UPDATED_AT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.date-time3").expect("updated-at selector is valid"));
static SPECS_LABEL: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("td.med > span.listings-label:nth-child(1)")
        .expect("specs label selector is valid")
});
static BROKER_CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td.comp-info").expect("broker cell selector is valid"));

static NEWLINE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n+").expect("newline pattern is valid"));
static PHONE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Phone:\s*").expect("phone prefix pattern is valid"));
static ALT_PHONE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^or\s+").expect("alternate phone prefix pattern is valid"));

/// Concatenated text of every element in the row matching `selector`
fn text_of(row: Row<'_>, selector: &Selector) -> String {
    row.select(selector).flat_map(|element| element.text()).collect()
}

/// Binds `lines` to a fixed list of field names by position
///
/// Missing trailing fields come back as `None`; extra lines are dropped.
fn bind_positional<const N: usize>(lines: &[&str]) -> [Option<String>; N] {
    std::array::from_fn(|i| lines.get(i).map(|line| line.to_string()))
}

/// Extracts the detail link and title
///
/// `base_url` is prepended to the anchor's `href` as-is. Without an anchor the
/// link is just `base_url` and the title is empty.
pub fn extract_title(row: Row<'_>, base_url: &str) -> TitleInfo {
    match row.select(&DETAILS_LINK).next() {
        Some(anchor) => TitleInfo {
            link: format!("{}{}", base_url, anchor.value().attr("href").unwrap_or("")),
            title: anchor.text().collect::<String>().trim().to_string(),
        },
        None => TitleInfo {
            link: base_url.to_string(),
            title: String::new(),
        },
    }
}

/// Extracts the price text exactly as displayed
pub fn extract_price(row: Row<'_>) -> String {
    text_of(row, &PRICE)
}

/// Extracts the trimmed summary line of the listing
pub fn extract_description(row: Row<'_>) -> String {
    text_of(row, &DESCRIPTION).trim().to_string()
}

/// Extracts the thumbnail image URL
pub fn extract_thumbnail(row: Row<'_>) -> String {
    row.select(&THUMBNAIL)
        .next()
        .and_then(|img| img.value().attr("src"))
        .unwrap_or("")
        .to_string()
}

/// Extracts the last-updated timestamp with its `Updated:` label removed
pub fn extract_updated_at(row: Row<'_>) -> String {
    text_of(row, &UPDATED_AT)
        .replacen("Updated:", "", 1)
        .trim()
        .to_string()
}

/// Text of a cell with every child element replaced by a line break
///
/// Label spans and `<br>`s both become `\n`, so only the values remain.
fn text_without_labels(cell: ElementRef<'_>) -> String {
    let mut text = String::new();
    for child in cell.children() {
        match child.value() {
            Node::Text(t) => text.push_str(t),
            Node::Element(_) => text.push('\n'),
            _ => {}
        }
    }
    text
}

/// Extracts the serial/registration/total-time/passenger block
///
/// Returns `None` when the row carries no specs text. A block with fewer than
/// four lines leaves the trailing fields `None`; a block with more keeps the
/// first four. Both cases are logged since they point at layout drift.
pub fn extract_specs(row: Row<'_>) -> Option<Specs> {
    let mut seen = HashSet::new();
    let raw: String = row
        .select(&SPECS_LABEL)
        .filter_map(|label| label.parent().and_then(ElementRef::wrap))
        .filter(|cell| seen.insert(cell.id()))
        .map(text_without_labels)
        .collect();

    let block = normalize(&raw);
    if block.is_empty() {
        return None;
    }

    let lines: Vec<&str> = block.lines().map(str::trim).collect();
    if lines.len() != SPEC_FIELDS.len() {
        tracing::warn!(
            "Specs block has {} lines, expected {} ({}): {:?}",
            lines.len(),
            SPEC_FIELDS.len(),
            SPEC_FIELDS.join(", "),
            block
        );
    }

    let [sn, reg, tt, pax] = bind_positional::<4>(&lines);
    Some(Specs { sn, reg, tt, pax })
}

/// Extracts broker name, location, phone numbers and broker URL
///
/// The cell text is split into lines bound to [`BROKER_FIELDS`]. `Phone:` is
/// stripped from the first phone and `or ` from the second. Missing lines and
/// a missing cell yield empty strings.
pub fn extract_broker(row: Row<'_>) -> BrokerInfo {
    let cell_text = text_of(row, &BROKER_CELL);
    let collapsed = NEWLINE_RUN.replace_all(cell_text.trim(), "\n");
    let lines: Vec<&str> = collapsed.split('\n').map(str::trim).collect();

    if lines.len() < BROKER_FIELDS.len() {
        tracing::debug!(
            "Broker block has {} lines, expected {}",
            lines.len(),
            BROKER_FIELDS.len()
        );
    }

    let [broker_name, location, phone, phone2] = bind_positional::<4>(&lines);
    let phone = phone.unwrap_or_default();
    let phone2 = phone2.unwrap_or_default();

    let broker_url = row
        .select(&BROKER_CELL)
        .next()
        .and_then(|cell| {
            cell.children()
                .filter_map(ElementRef::wrap)
                .find(|child| child.value().name() == "a")
        })
        .and_then(|anchor| anchor.value().attr("href"))
        .unwrap_or("")
        .to_string();

    BrokerInfo {
        broker_name: broker_name.unwrap_or_default(),
        location: location.unwrap_or_default(),
        phone: PHONE_PREFIX.replace(&phone, "").into_owned(),
        phone2: ALT_PHONE_PREFIX.replace(&phone2, "").into_owned(),
        broker_url,
    }
}
