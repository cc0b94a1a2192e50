//! Integration tests for Aircraft-Scrape

mod extract_tests;
mod fetch_tests;
