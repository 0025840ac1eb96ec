//! Application error types.
//!
//! Verse lookups never surface these to callers; they are recovered inside
//! the provider and logged. Only configuration errors reach the host.

use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// Network error (connection, timeout, DNS)
    #[error("Network error: {0}")]
    Network(String),

    /// Verse API answered with a non-success status
    #[error("Verse API error: {message}")]
    Upstream {
        /// Human-readable error description.
        message: String,
        /// HTTP status code returned by the API.
        status: u16,
        /// Actionable suggestion for resolving the error.
        hint: Option<&'static str>,
    },

    /// Verse API answered successfully with an empty body
    #[error("Verse API returned an empty body")]
    EmptyResponse,

    /// Cache store could not be read or written
    #[error("Verse cache unavailable: {0}")]
    CacheUnavailable(String),

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },
}

impl Error {
    /// Create a verse API error with HTTP status
    pub fn upstream_status(message: impl Into<String>, status: u16) -> Self {
        let hint = match status {
            404 => Some("Check VERSE_API_URL points at getrandomverse.ashx"),
            429 => Some("Rate limited - cached verses will be used meanwhile"),
            500..=599 => Some("Verse API server error - try again later"),
            _ => None,
        };
        Self::Upstream {
            message: message.into(),
            status,
            hint,
        }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// Whether this error means no verse could be fetched from upstream.
    pub const fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Upstream { .. } | Self::EmptyResponse
        )
    }
}
