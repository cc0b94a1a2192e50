use serde::Deserialize;

/// Main configuration structure for Aircraft-Scrape
///
/// Every section is optional in the TOML file; missing sections and keys
/// take the defaults below.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub fetch: FetchConfig,
}

/// Marketplace layout settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Prefix prepended to each listing's detail link
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Element that only appears once the results page is complete
    ///
    /// An empty string disables the check.
    #[serde(rename = "ready-selector")]
    pub ready_selector: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://www.controller.com".to_string(),
            ready_selector: "#footer_copyright".to_string(),
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the scraper
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the scraper
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the scraper
    #[serde(rename = "contact-url")]
    pub contact_url: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: env!("CARGO_PKG_NAME").to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: "https://example.com/about".to_string(),
        }
    }
}

/// HTTP fetch settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Total request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Connection timeout (seconds)
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}
