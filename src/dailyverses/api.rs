use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::verses::{Slot, VerseSource};

/// Client for the `DailyVerses` random verse endpoint
///
/// Requests are bounded by the configured timeout so a slow upstream
/// cannot hold up page rendering.
#[derive(Clone)]
pub struct DailyVersesClient {
    endpoint: Url,
    language: String,
    verse_type: String,
    client: Client,
}

impl DailyVersesClient {
    /// Create a new client from config
    pub fn new(config: &Config) -> Result<Self> {
        let endpoint = Url::parse(&config.api_url).map_err(|e| {
            Error::config(
                format!("Invalid VERSE_API_URL {:?}: {e}", config.api_url),
                "Use an absolute URL such as https://dailyverses.net/getrandomverse.ashx",
            )
        })?;

        let client = Client::builder()
            .timeout(config.http_timeout)
            .build()
            .map_err(client_setup_error)?;

        Ok(Self {
            endpoint,
            language: config.language.clone(),
            verse_type: config.verse_type.clone(),
            client,
        })
    }

    /// Full request URL for a slot
    pub fn verse_url(&self, slot: Slot) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("language", &self.language)
            .append_pair("type", &self.verse_type)
            .append_pair("position", &slot.to_string());
        url
    }
}

#[async_trait]
impl VerseSource for DailyVersesClient {
    async fn fetch(&self, slot: Slot) -> Result<String> {
        let resp = self.client
            .get(self.verse_url(slot))
            .send()
            .await
            .map_err(|e| Error::Network(format!("Verse request for slot {slot} failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::upstream_status(
                format!("Verse request for slot {slot} returned {status}"),
                status.as_u16(),
            ));
        }

        let body = resp.text().await.map_err(|e| {
            Error::Network(format!("Reading verse body for slot {slot} failed: {e}"))
        })?;

        if body.is_empty() {
            return Err(Error::EmptyResponse);
        }

        Ok(body)
    }
}

/// The HTTP client could not be set up locally (TLS backend, resolver).
fn client_setup_error(e: impl std::fmt::Display) -> Error {
    Error::config(
        format!("Failed to build HTTP client: {e}"),
        "Check the system TLS certificates and proxy environment variables",
    )
}
