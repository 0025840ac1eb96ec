//! `DailyVerses` API integration.
//!
//! Fetches random verse fragments from `getrandomverse.ashx`.

/// HTTP client for the verse endpoint
pub mod api;

pub use api::DailyVersesClient;
