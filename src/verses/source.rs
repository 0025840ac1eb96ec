//! Upstream verse source.

use async_trait::async_trait;

use super::slot::Slot;
use crate::error::Result;

/// Fetches verse HTML for a slot from somewhere remote.
///
/// One call is one request: no retries. Implementations should report
/// transport failures as `Network`, non-2xx answers as `Upstream` and
/// empty bodies as `EmptyResponse`.
#[async_trait]
pub trait VerseSource: Send + Sync {
    /// Fetch the raw verse body for `slot`.
    async fn fetch(&self, slot: Slot) -> Result<String>;
}
