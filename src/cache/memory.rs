use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::time::Duration;

use super::{Clock, SystemClock, VerseCache};
use crate::error::{Error, Result};

/// Thread-safe verse cache with per-entry TTL expiration.
///
/// An entry written at `T` with a TTL of `d` is served while `now < T + d`
/// and dropped on the first read at or after `T + d`. This is one second
/// stricter than `WordPress` transients, which still serve the entry at
/// exactly `T + d`.
pub struct MemoryCache<C = SystemClock> {
    entries: DashMap<String, CacheEntry>,
    clock: C,
}

struct CacheEntry {
    value: String,
    expires_at: DateTime<Utc>,
}

impl MemoryCache {
    /// Create an empty cache on the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> MemoryCache<C> {
    /// Create an empty cache that reads time from `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self {
            entries: DashMap::new(),
            clock,
        }
    }

    /// Number of stored entries, expired ones included until purged.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every expired entry, returning how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| now < entry.expires_at);
        let removed = before.saturating_sub(self.entries.len());
        if removed > 0 {
            tracing::debug!("Purged {removed} expired verses");
        }
        removed
    }
}

#[async_trait]
impl<C: Clock> VerseCache for MemoryCache<C> {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let now = self.clock.now();

        if let Some(entry) = self.entries.get(key) {
            if now < entry.expires_at {
                return Ok(Some(entry.value.clone()));
            }
        }

        // Guard above is released; safe to take the shard write lock.
        self.entries.remove_if(key, |_, entry| now >= entry.expires_at);
        Ok(None)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<()> {
        let ttl = chrono::Duration::from_std(ttl)
            .map_err(|e| Error::CacheUnavailable(format!("TTL {ttl:?} out of range: {e}")))?;
        let expires_at = self
            .clock
            .now()
            .checked_add_signed(ttl)
            .ok_or_else(|| Error::CacheUnavailable(format!("TTL {ttl} overflows the clock")))?;

        self.entries.insert(
            key.to_string(),
            CacheEntry {
                value: value.to_string(),
                expires_at,
            },
        );
        Ok(())
    }
}
