//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use reqwest::Url;
use std::env;
use std::time::Duration;

use crate::constants::{api, cache};
use crate::error::{Error, Result};

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Verse endpoint, without query parameters
    pub api_url: String,
    /// `language` query parameter sent to the verse API
    pub language: String,
    /// `type` query parameter sent to the verse API
    pub verse_type: String,
    /// How long a fetched verse stays cached
    pub cache_ttl: Duration,
    /// Upper bound on a single verse request
    pub http_timeout: Duration,
    /// Prefix for verse cache keys
    pub cache_prefix: String,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            api_url: api::DEFAULT_URL.to_string(),
            language: api::DEFAULT_LANGUAGE.to_string(),
            verse_type: api::DEFAULT_VERSE_TYPE.to_string(),
            cache_ttl: Duration::from_secs(cache::DEFAULT_TTL_SECS),
            http_timeout: Duration::from_secs(api::DEFAULT_TIMEOUT_SECS),
            cache_prefix: cache::DEFAULT_KEY_PREFIX.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Unset variables keep their defaults. Numbers that fail to parse are
    /// ignored the same way; zero durations and malformed URLs are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("VERSE_API_URL") {
            config.api_url = url;
        }
        validate_api_url(&config.api_url)?;

        if let Some(language) = lookup("VERSE_LANGUAGE").filter(|s| !s.is_empty()) {
            config.language = language;
        }

        if let Some(verse_type) = lookup("VERSE_TYPE").filter(|s| !s.is_empty()) {
            config.verse_type = verse_type;
        }

        let ttl_secs = lookup("VERSE_CACHE_TTL_SECS").and_then(|s| parse_secs(&s));
        if let Some(secs) = ttl_secs {
            if secs == 0 {
                return Err(Error::config(
                    "VERSE_CACHE_TTL_SECS must be greater than zero",
                    "Unset it to cache verses for one hour",
                ));
            }
            config.cache_ttl = Duration::from_secs(secs);
        }

        let timeout_secs = lookup("VERSE_HTTP_TIMEOUT_SECS").and_then(|s| parse_secs(&s));
        if let Some(secs) = timeout_secs {
            if secs == 0 {
                return Err(Error::config(
                    "VERSE_HTTP_TIMEOUT_SECS must be greater than zero",
                    "Use a few seconds so a slow verse API cannot stall page rendering",
                ));
            }
            config.http_timeout = Duration::from_secs(secs);
        }

        if let Some(prefix) = lookup("VERSE_CACHE_PREFIX") {
            config.cache_prefix = prefix;
        }

        Ok(config)
    }
}

fn parse_secs(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}

/// Reject anything that is not an absolute http(s) URL.
fn validate_api_url(raw: &str) -> Result<()> {
    let url = Url::parse(raw).map_err(|e| {
        Error::config(
            format!("Invalid VERSE_API_URL {raw:?}: {e}"),
            "Use an absolute URL such as https://dailyverses.net/getrandomverse.ashx",
        )
    })?;

    match url.scheme() {
        "https" => Ok(()),
        "http" => {
            tracing::warn!("VERSE_API_URL uses plaintext http: {raw}");
            Ok(())
        }
        other => Err(Error::config(
            format!("Unsupported VERSE_API_URL scheme {other:?}"),
            "Only http and https endpoints are supported",
        )),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_use_encrypted_endpoint() {
        let config = from_pairs(&[]).unwrap();
        assert_eq!(config.api_url, "https://dailyverses.net/getrandomverse.ashx");
        assert_eq!(config.language, "en");
        assert_eq!(config.verse_type, "random1_6");
        assert_eq!(config.cache_ttl, Duration::from_secs(3600));
        assert_eq!(config.http_timeout, Duration::from_secs(5));
        assert_eq!(config.cache_prefix, "verse_");
        assert_eq!(config.app_name(), "daily-verse");
    }

    #[test]
    fn overrides_are_applied() {
        let config = from_pairs(&[
            ("VERSE_API_URL", "http://localhost:8080/getrandomverse.ashx"),
            ("VERSE_LANGUAGE", "nl"),
            ("VERSE_CACHE_TTL_SECS", "60"),
            ("VERSE_HTTP_TIMEOUT_SECS", " 2 "),
            ("VERSE_CACHE_PREFIX", "duckdev_bible_verse_"),
        ])
        .unwrap();

        assert_eq!(config.api_url, "http://localhost:8080/getrandomverse.ashx");
        assert_eq!(config.language, "nl");
        assert_eq!(config.verse_type, "random1_6");
        assert_eq!(config.cache_ttl, Duration::from_secs(60));
        assert_eq!(config.http_timeout, Duration::from_secs(2));
        assert_eq!(config.cache_prefix, "duckdev_bible_verse_");
    }

    #[test]
    fn unparseable_numbers_keep_defaults() {
        let config = from_pairs(&[("VERSE_CACHE_TTL_SECS", "an hour")]).unwrap();
        assert_eq!(config.cache_ttl, Duration::from_secs(3600));
    }

    #[test]
    fn zero_ttl_is_rejected() {
        let err = from_pairs(&[("VERSE_CACHE_TTL_SECS", "0")]).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = from_pairs(&[("VERSE_HTTP_TIMEOUT_SECS", "0")]).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn bad_urls_are_rejected() {
        assert!(from_pairs(&[("VERSE_API_URL", "not a url")]).is_err());
        assert!(from_pairs(&[("VERSE_API_URL", "ftp://dailyverses.net/x")]).is_err());
    }
}
