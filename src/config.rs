//! Configuration management

use anyhow::{Context, Result};

use crate::defaults::{default_url_opener, DEFAULT_LOGS_DIR};
use crate::types::Platform;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Platform whose native map schemes are tried before the web fallback
    pub platform: Platform,

    /// Command that hands a URL to the desktop (xdg-open, open, ...)
    pub url_opener: String,

    /// Directory for the rolling log file
    pub logs_dir: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let platform = match lookup("FIXIT_PLATFORM") {
            Some(value) if !value.trim().is_empty() => value
                .parse::<Platform>()
                .with_context(|| format!("FIXIT_PLATFORM has invalid value '{}'", value))?,
            _ => Platform::default(),
        };

        let url_opener = lookup("FIXIT_URL_OPENER")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| default_url_opener().to_string());

        let logs_dir = lookup("LOGS_DIR").unwrap_or_else(|| DEFAULT_LOGS_DIR.to_string());

        Ok(Self {
            platform,
            url_opener,
            logs_dir,
        })
    }
}
