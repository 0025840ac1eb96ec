//! Verse post-processing hook.

use super::slot::Slot;

/// Rewrites or replaces the verse before the fallback is applied.
///
/// Receives the candidate HTML (possibly empty) and the slot it was looked
/// up under. Returning an empty string selects the default verse.
///
/// Any `Fn(&str, Slot) -> String` closure is a transformer.
pub trait VerseTransformer: Send + Sync {
    /// Transform `candidate`.
    fn transform(&self, candidate: &str, slot: Slot) -> String;
}

/// Returns the candidate unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl VerseTransformer for Identity {
    fn transform(&self, candidate: &str, _slot: Slot) -> String {
        candidate.to_string()
    }
}

impl<F> VerseTransformer for F
where
    F: Fn(&str, Slot) -> String + Send + Sync,
{
    fn transform(&self, candidate: &str, slot: Slot) -> String {
        self(candidate, slot)
    }
}
