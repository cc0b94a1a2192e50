//! HTTP page source
//!
//! Builds an HTTP client identifying the scraper and fetches the results page
//! with a single GET. Navigation retries are left to the caller.

use crate::config::{FetchConfig, UserAgentConfig};
use crate::source::PageSource;
use crate::ScrapeError;
use reqwest::Client;
use std::time::Duration;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `user_agent` - How the scraper identifies itself
/// * `fetch` - Request timeouts
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(
    user_agent: &UserAgentConfig,
    fetch: &FetchConfig,
) -> Result<Client, reqwest::Error> {
    // Format: Name/Version (+ContactURL)
    let user_agent = format!(
        "{}/{} (+{})",
        user_agent.crawler_name, user_agent.crawler_version, user_agent.contact_url
    );

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(fetch.timeout_secs))
        .connect_timeout(Duration::from_secs(fetch.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Results page served over HTTP
#[derive(Debug, Clone)]
pub struct HttpPageSource {
    client: Client,
    url: String,
}

impl HttpPageSource {
    /// Creates a source fetching `url` with `client`
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

impl PageSource for HttpPageSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch_html(&self) -> Result<String, ScrapeError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|source| ScrapeError::Fetch {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("GET {} returned {}", self.url, status);
            return Err(ScrapeError::HttpStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| ScrapeError::Fetch {
            url: self.url.clone(),
            source,
        })
    }
}
