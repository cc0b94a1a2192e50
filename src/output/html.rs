//! HTML rendering of a change report
//!
//! Produces the e-mail friendly report body: one section per change category,
//! each a table with thumbnail, linked title, price, description and the
//! serial / tail / total time details.

use crate::extract::ListingRecord;
use crate::output::report::ChangeReport;
use maud::{html, Markup};

/// Shown for a specs field the listing did not carry
const UNKNOWN: &str = "???";

/// Formats a change report as an HTML fragment
///
/// Empty categories are omitted. Section order: new, price change, updated,
/// removed.
pub fn format_html_report(report: &ChangeReport) -> String {
    html! {
        (section("New Aircraft", &report.new))
        (section("Price Change", &report.price))
        (section("Updated", &report.updated))
        (section("Removed", &report.removed))
    }
    .into_string()
}

fn section(title: &str, aircraft: &[ListingRecord]) -> Markup {
    html! {
        @if !aircraft.is_empty() {
            h1 { (title) }
            table {
                @for listing in aircraft {
                    (aircraft_row(listing))
                }
            }
        }
    }
}

fn aircraft_row(listing: &ListingRecord) -> Markup {
    html! {
        tr {
            td { img src=(listing.thumb); }
            td {
                a href=(listing.link) { (listing.title) }
                " - "
                b { (listing.price) }
                br;
                " " (listing.desc)
            }
            td {
                dl {
                    dt { "Serial #:" } dd { (listing.sn.as_deref().unwrap_or(UNKNOWN)) }
                    dt { "Tail #:" } dd { (listing.reg.as_deref().unwrap_or(UNKNOWN)) }
                    dt { "Total Time:" } dd { (listing.tt.as_deref().unwrap_or(UNKNOWN)) }
                }
            }
        }
    }
}
