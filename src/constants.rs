//! Application constants.
//!
//! Centralizes magic numbers and default configuration values.

/// Slot selection constants.
pub mod slots {
    /// Highest slot index (inclusive). Slots are drawn from `0..=MAX_SLOT`.
    pub const MAX_SLOT: u8 = 200;
}

/// Verse cache constants.
pub mod cache {
    /// Default time-to-live for a cached verse, in seconds.
    pub const DEFAULT_TTL_SECS: u64 = 3600;

    /// Default prefix for verse cache keys (`verse_<slot>`).
    pub const DEFAULT_KEY_PREFIX: &str = "verse_";
}

/// Upstream verse API constants.
pub mod api {
    /// Default verse endpoint.
    pub const DEFAULT_URL: &str = "https://dailyverses.net/getrandomverse.ashx";

    /// Default verse language.
    pub const DEFAULT_LANGUAGE: &str = "en";

    /// Default verse selection type understood by the endpoint.
    pub const DEFAULT_VERSE_TYPE: &str = "random1_6";

    /// Default HTTP timeout in seconds.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

    /// Most verse requests the CLI keeps in flight at once.
    pub const MAX_CONCURRENT_REQUESTS: usize = 4;
}

/// Fallback verse shown when nothing else is available.
pub mod fallback {
    /// John 3:16, in the same markup the verse API returns.
    pub const DEFAULT_VERSE_HTML: &str = "<div class=\"dailyVerses bibleText\">For God so loved the world that he gave his one and only Son, that whoever believes in him shall not perish but have eternal life.</div><div class=\"dailyVerses bibleVerse\">John 3:16</div>";
}
