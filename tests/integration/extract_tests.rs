//! End-to-end extraction against a saved results page

use aircraft_scrape::extract::{extract_listings, locate_rows};
use aircraft_scrape::source::{load_document, FilePageSource};
use aircraft_scrape::{load_listings, write_listings, ListingRecord};
use std::path::PathBuf;

const BASE_URL: &str = "http://www.controller.com";

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/results_page.html")
}

async fn fixture_records() -> Vec<ListingRecord> {
    let document = load_document(&FilePageSource::new(fixture_path()), "#footer_copyright")
        .await
        .expect("fixture page loads");
    extract_listings(&document, BASE_URL)
}

#[tokio::test]
async fn test_one_record_per_listing_row() {
    let document = load_document(&FilePageSource::new(fixture_path()), "#footer_copyright")
        .await
        .unwrap();
    let rows = locate_rows(&document);
    let records = extract_listings(&document, BASE_URL);

    assert_eq!(rows.len(), 3);
    assert_eq!(records.len(), rows.len());

    let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "2004 CIRRUS SR22",
            "1978 PIPER ARCHER II",
            "1999 BEECH A36 BONANZA"
        ]
    );
}

#[tokio::test]
async fn test_fully_populated_listing() {
    let records = fixture_records().await;
    let cirrus = &records[0];

    assert_eq!(
        cirrus.link,
        "http://www.controller.com/listing/for-sale/42/2004-cirrus-sr22"
    );
    assert_eq!(cirrus.price, "US $249,500");
    assert_eq!(
        cirrus.desc,
        "G2, TKS known ice, one owner, hangared since new."
    );
    assert_eq!(cirrus.thumb, "http://img.example.com/thumbs/42.jpg");
    assert_eq!(cirrus.updated_at, "2/2/2014 10:00:00 AM");
    assert_eq!(cirrus.sn.as_deref(), Some("0001"));
    assert_eq!(cirrus.reg.as_deref(), Some("N12AB"));
    assert_eq!(cirrus.tt.as_deref(), Some("1500"));
    assert_eq!(cirrus.pax.as_deref(), Some("6"));
    assert_eq!(cirrus.broker_name, "Acme Aviation");
    assert_eq!(cirrus.location, "Dallas, TX");
    assert_eq!(cirrus.phone, "555-1111");
    assert_eq!(cirrus.phone2, "555-2222");
    assert_eq!(cirrus.broker_url, "http://www.acme-aviation.example.com");
}

#[tokio::test]
async fn test_listing_without_specs_and_short_broker_block() {
    let records = fixture_records().await;
    let piper = &records[1];

    assert_eq!(piper.sn, None);
    assert_eq!(piper.reg, None);
    assert_eq!(piper.tt, None);
    assert_eq!(piper.pax, None);
    assert_eq!(piper.price, "Call for Price");
    assert_eq!(piper.broker_name, "Private Seller");
    assert_eq!(piper.location, "Tulsa, OK");
    assert_eq!(piper.phone, "");
    assert_eq!(piper.phone2, "");
    assert_eq!(piper.broker_url, "");
}

#[tokio::test]
async fn test_sparse_listing_degrades_per_field() {
    let records = fixture_records().await;
    let beech = &records[2];

    assert_eq!(beech.thumb, "");
    assert_eq!(beech.desc, "");
    assert_eq!(beech.updated_at, "");
    assert_eq!(beech.sn.as_deref(), Some("E-3190"));
    assert_eq!(beech.reg.as_deref(), Some("N90BB"));
    assert_eq!(beech.tt, None);
    assert_eq!(beech.pax, None);
    assert_eq!(beech.broker_name, "");
    assert_eq!(beech.phone, "");
}

#[tokio::test]
async fn test_written_file_matches_wire_contract() {
    let records = fixture_records().await;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("aircraft.json");

    write_listings(&path, &records).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let array = value.as_array().unwrap();
    assert_eq!(array.len(), 3);
    assert_eq!(array[0]["updatedAt"], "2/2/2014 10:00:00 AM");
    assert_eq!(array[0]["brokerURL"], "http://www.acme-aviation.example.com");
    assert!(array[1]["sn"].is_null());
    assert!(array[1]["pax"].is_null());

    assert_eq!(load_listings(&path).unwrap(), records);
}

#[tokio::test]
async fn test_page_without_listings_gives_empty_array() {
    let dir = tempfile::tempdir().unwrap();
    let page = dir.path().join("empty.html");
    std::fs::write(
        &page,
        r#"<html><body><p>No aircraft match your search.</p><p id="footer_copyright">(c)</p></body></html>"#,
    )
    .unwrap();

    let document = load_document(&FilePageSource::new(&page), "#footer_copyright")
        .await
        .unwrap();
    let records = extract_listings(&document, BASE_URL);
    assert!(records.is_empty());

    let out = dir.path().join("aircraft.json");
    write_listings(&out, &records).unwrap();
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "[]");
}
