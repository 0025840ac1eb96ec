//! `daily-verse` - random scripture verses for web pages.
//!
//! This crate produces a verse HTML fragment for display, fetched from the
//! `DailyVerses` API and kept in a short-lived cache so repeated page renders
//! do not hit the network. Every failure degrades to a fixed default verse.

pub mod cache;
pub mod config;
pub mod constants;
pub mod dailyverses;
pub mod error;
pub mod verses;

pub use verses::{ResolvedVerse, VerseOrigin, VerseProvider};
