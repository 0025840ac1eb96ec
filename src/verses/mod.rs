//! Verse retrieval.
//!
//! [`VerseProvider`] draws a slot, serves the cached verse for it when one
//! is fresh, otherwise asks the upstream source once, and falls back to a
//! fixed verse when nothing usable comes back. It never fails.

/// Slot type and slot pickers
pub mod slot;
/// Upstream source seam
pub mod source;
/// Post-processing hook
pub mod transform;

use futures::stream::{self, StreamExt};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use crate::cache::{MemoryCache, VerseCache};
use crate::config::Config;
use crate::constants::cache::{DEFAULT_KEY_PREFIX, DEFAULT_TTL_SECS};
use crate::constants::fallback::DEFAULT_VERSE_HTML;
use crate::dailyverses::DailyVersesClient;
use crate::error::Result;

pub use slot::{FixedSlot, RandomSlotPicker, Slot, SlotPicker};
pub use source::VerseSource;
pub use transform::{Identity, VerseTransformer};

/// Where a resolved verse came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerseOrigin {
    /// Served from the cache.
    Cache,
    /// Fetched from the verse API on this request.
    Upstream,
    /// Replaced or rewritten by the transformer.
    Transformed,
    /// The default verse.
    Fallback,
}

/// A verse ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedVerse {
    /// Slot drawn for this request.
    pub slot: Slot,
    /// Verse HTML; never empty.
    pub html: String,
    /// How the HTML was obtained.
    pub origin: VerseOrigin,
}

/// Escape every comma as `&#44;` so callers that split on commas cannot
/// break the fragment apart. Nothing else is touched.
pub fn escape_commas(body: &str) -> String {
    body.replace(',', "&#44;")
}

/// Cache-or-fetch verse provider.
///
/// Built once by the host and shared by reference. Concurrent misses on
/// the same slot may both fetch and both write; the last write wins.
pub struct VerseProvider {
    cache: Arc<dyn VerseCache>,
    source: Arc<dyn VerseSource>,
    slots: Arc<dyn SlotPicker>,
    transformer: Arc<dyn VerseTransformer>,
    ttl: Duration,
    key_prefix: String,
}

impl VerseProvider {
    /// Create a provider with a random slot picker, no transformer, and the
    /// default TTL and key prefix.
    pub fn new(cache: Arc<dyn VerseCache>, source: Arc<dyn VerseSource>) -> Self {
        Self {
            cache,
            source,
            slots: Arc::new(RandomSlotPicker),
            transformer: Arc::new(Identity),
            ttl: Duration::from_secs(DEFAULT_TTL_SECS),
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
        }
    }

    /// Create a provider backed by an in-memory cache and the `DailyVerses` API.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = DailyVersesClient::new(config)?;
        Ok(Self::new(Arc::new(MemoryCache::new()), Arc::new(client))
            .with_ttl(config.cache_ttl)
            .with_key_prefix(config.cache_prefix.clone()))
    }

    /// Replace the slot picker.
    #[must_use]
    pub fn with_slot_picker(mut self, slots: Arc<dyn SlotPicker>) -> Self {
        self.slots = slots;
        self
    }

    /// Install a transformer.
    #[must_use]
    pub fn with_transformer(mut self, transformer: Arc<dyn VerseTransformer>) -> Self {
        self.transformer = transformer;
        self
    }

    /// Set how long fetched verses stay cached.
    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Set the cache key prefix.
    #[must_use]
    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = prefix.into();
        self
    }

    /// Cache key for `slot`.
    pub fn cache_key(&self, slot: Slot) -> String {
        format!("{}{}", self.key_prefix, slot)
    }

    /// Verse HTML for display. Always non-empty.
    pub async fn verse_html(&self) -> String {
        self.resolve().await.html
    }

    /// Resolve `count` verses in order, with at most `concurrency` of them
    /// in flight at once.
    pub async fn resolve_many(&self, count: usize, concurrency: usize) -> Vec<ResolvedVerse> {
        stream::iter(0..count)
            .map(|_| self.resolve())
            .buffered(concurrency.max(1))
            .collect()
            .await
    }

    /// Resolve a verse and report where it came from.
    pub async fn resolve(&self) -> ResolvedVerse {
        let slot = self.slots.pick();
        let key = self.cache_key(slot);

        let (candidate, origin) = match self.cached(&key).await {
            Some(verse) => {
                tracing::debug!("Verse cache hit for slot {slot}");
                (verse, VerseOrigin::Cache)
            }
            None => {
                tracing::debug!("Verse cache miss for slot {slot}");
                match self.fetch_and_store(slot, &key).await {
                    Some(verse) => (verse, VerseOrigin::Upstream),
                    None => (String::new(), VerseOrigin::Fallback),
                }
            }
        };

        let html = self.transformer.transform(&candidate, slot);
        if html.is_empty() {
            return ResolvedVerse {
                slot,
                html: DEFAULT_VERSE_HTML.to_string(),
                origin: VerseOrigin::Fallback,
            };
        }

        let origin = if html == candidate { origin } else { VerseOrigin::Transformed };
        ResolvedVerse { slot, html, origin }
    }

    /// Non-empty cached verse, treating cache errors as a miss.
    async fn cached(&self, key: &str) -> Option<String> {
        match self.cache.get(key).await {
            Ok(verse) => verse.filter(|v| !v.is_empty()),
            Err(e) => {
                tracing::warn!("Reading {key} from verse cache failed: {e}");
                None
            }
        }
    }

    /// Single upstream attempt; caches and returns the escaped body.
    async fn fetch_and_store(&self, slot: Slot, key: &str) -> Option<String> {
        let body = match self.source.fetch(slot).await {
            Ok(body) if body.is_empty() => {
                tracing::warn!("Verse API returned an empty body for slot {slot}");
                return None;
            }
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Fetching verse for slot {slot} failed: {e}");
                return None;
            }
        };

        let verse = escape_commas(&body);
        if let Err(e) = self.cache.set(key, &verse, self.ttl).await {
            tracing::warn!("Storing {key} in verse cache failed: {e}");
        }
        Some(verse)
    }
}
