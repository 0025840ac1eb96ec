//! Verse cache.
//!
//! Any expiring key-value store can back the provider; the in-memory
//! implementation is what the binary uses.

/// In-memory TTL cache
pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;

use crate::error::Result;

pub use memory::MemoryCache;

/// Expiring key-value store for verse HTML.
///
/// Errors are reported as [`crate::error::Error::CacheUnavailable`]; the
/// provider treats them as a miss.
#[async_trait]
pub trait VerseCache: Send + Sync {
    /// Fetch an unexpired value.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a value, replacing any previous one, for `ttl`.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<()>;
}

/// Source of the current time for expiry decisions.
pub trait Clock: Send + Sync {
    /// Current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
