//! Listing records and their assembly from a row

use super::fields::{
    extract_broker, extract_description, extract_price, extract_specs, extract_thumbnail,
    extract_title, extract_updated_at,
};
use super::rows::Row;
use serde::{Deserialize, Serialize};

/// Detail link and title of a listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleInfo {
    pub link: String,
    pub title: String,
}

/// Serial number, registration, total time and passenger count
///
/// Produced only when the row has a specs block. A short block leaves the
/// trailing fields `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Specs {
    pub sn: Option<String>,
    pub reg: Option<String>,
    pub tt: Option<String>,
    pub pax: Option<String>,
}

/// Seller details from the broker cell
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrokerInfo {
    pub broker_name: String,
    pub location: String,
    pub phone: String,
    pub phone2: String,
    pub broker_url: String,
}

/// One aircraft listing as written to the output file
///
/// Field names follow the JSON contract of the downstream pipeline. The four
/// specs fields serialize as `null` when the row has no specs block; every
/// other field is a string, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListingRecord {
    pub link: String,
    pub title: String,
    pub price: String,
    pub desc: String,
    pub thumb: String,
    pub updated_at: String,
    pub sn: Option<String>,
    pub reg: Option<String>,
    pub tt: Option<String>,
    pub pax: Option<String>,
    pub broker_name: String,
    pub location: String,
    pub phone: String,
    pub phone2: String,
    #[serde(rename = "brokerURL")]
    pub broker_url: String,
}

impl ListingRecord {
    /// Returns true if the record carries any specs field
    pub fn has_specs(&self) -> bool {
        self.sn.is_some() || self.reg.is_some() || self.tt.is_some() || self.pax.is_some()
    }

    fn merge_title(&mut self, info: TitleInfo) {
        self.link = info.link;
        self.title = info.title;
    }

    fn merge_specs(&mut self, specs: Option<Specs>) {
        let specs = specs.unwrap_or_default();
        self.sn = specs.sn;
        self.reg = specs.reg;
        self.tt = specs.tt;
        self.pax = specs.pax;
    }

    fn merge_broker(&mut self, broker: BrokerInfo) {
        self.broker_name = broker.broker_name;
        self.location = broker.location;
        self.phone = broker.phone;
        self.phone2 = broker.phone2;
        self.broker_url = broker.broker_url;
    }
}

/// Runs every field extractor on `row` and merges the results
///
/// Extractors are applied in a fixed order: the single-cell reads, then
/// title, specs and broker. Each writes a disjoint set of fields; should two
/// ever target the same field, the one applied later wins.
pub fn assemble(row: Row<'_>, base_url: &str) -> ListingRecord {
    let mut record = ListingRecord {
        price: extract_price(row),
        desc: extract_description(row),
        thumb: extract_thumbnail(row),
        updated_at: extract_updated_at(row),
        ..ListingRecord::default()
    };

    record.merge_title(extract_title(row, base_url));
    record.merge_specs(extract_specs(row));
    record.merge_broker(extract_broker(row));

    tracing::trace!("Assembled listing '{}' ({})", record.title, record.link);
    record
}
