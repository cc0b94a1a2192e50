//! HTTP page source tests
//!
//! These tests use wiremock to serve results pages from a local mock server.

use aircraft_scrape::config::{FetchConfig, UserAgentConfig};
use aircraft_scrape::extract::extract_listings;
use aircraft_scrape::source::{build_http_client, load_document, HttpPageSource};
use aircraft_scrape::ScrapeError;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_source(url: String) -> HttpPageSource {
    let user_agent = UserAgentConfig {
        crawler_name: "TestScraper".to_string(),
        crawler_version: "1.0.0".to_string(),
        contact_url: "https://example.com/contact".to_string(),
    };
    let fetch = FetchConfig {
        timeout_secs: 5,
        connect_timeout_secs: 2,
    };
    let client = build_http_client(&user_agent, &fetch).expect("client builds");
    HttpPageSource::new(client, url)
}

fn results_page() -> String {
    std::fs::read_to_string(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/results_page.html"
    ))
    .expect("fixture exists")
}

#[tokio::test]
async fn test_fetch_and_extract_over_http() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/listings/aircraft"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(results_page())
                .insert_header("content-type", "text/html"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let source = create_source(format!("{}/listings/aircraft", mock_server.uri()));
    let document = load_document(&source, "#footer_copyright").await.unwrap();
    let records = extract_listings(&document, "http://www.controller.com");

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].reg.as_deref(), Some("N12AB"));
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/listings/aircraft"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let source = create_source(format!("{}/listings/aircraft", mock_server.uri()));
    let result = load_document(&source, "#footer_copyright").await;

    assert!(matches!(
        result,
        Err(ScrapeError::HttpStatus { status: 503, .. })
    ));
}

#[tokio::test]
async fn test_truncated_page_is_not_ready() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/listings/aircraft"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><body><table class=\"listings\"></table>"),
        )
        .mount(&mock_server)
        .await;

    let source = create_source(format!("{}/listings/aircraft", mock_server.uri()));
    let result = load_document(&source, "#footer_copyright").await;

    assert!(matches!(result, Err(ScrapeError::PageNotReady { .. })));
}

#[tokio::test]
async fn test_unreachable_host_is_fetch_error() {
    // Port 9 (discard) on localhost is expected to refuse connections
    let source = create_source("http://127.0.0.1:9/listings".to_string());
    let result = load_document(&source, "").await;

    assert!(matches!(result, Err(ScrapeError::Fetch { .. })));
}
