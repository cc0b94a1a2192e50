//! Configuration module for Aircraft-Scrape
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Without a file the built-in defaults apply.
//!
//! # Example
//!
//! ```no_run
//! use aircraft_scrape::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("scrape.toml")).unwrap();
//! println!("Detail links are prefixed with: {}", config.site.base_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, FetchConfig, SiteConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{load_config, load_config_or_default, parse_config};
pub use validation::validate;
