//! Frontier selection: which cataloged article to translate next.
//!
//! The frontier is the catalog minus every slug already in the translated
//! log. One candidate is picked uniformly at random from an explicit random
//! source, so tests can seed it.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

use crate::types::{Article, TranslatedRecord};

/// Result of a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<'a> {
    /// An untranslated article
    Candidate(&'a Article),
    /// Every cataloged slug has been translated
    Exhausted,
}

/// Slugs present in the translated log.
pub fn translated_slugs(log: &[TranslatedRecord]) -> HashSet<&str> {
    log.iter().map(|r| r.slug.as_str()).collect()
}

/// Catalog entries not yet translated, in catalog order.
pub fn frontier<'a>(catalog: &'a [Article], log: &[TranslatedRecord]) -> Vec<&'a Article> {
    let done = translated_slugs(log);
    catalog
        .iter()
        .filter(|a| !done.contains(a.slug.as_str()))
        .collect()
}

/// Pick one untranslated article uniformly at random.
pub fn select<'a, R: Rng + ?Sized>(
    catalog: &'a [Article],
    log: &[TranslatedRecord],
    rng: &mut R,
) -> Selection<'a> {
    match frontier(catalog, log).choose(rng).copied() {
        Some(article) => Selection::Candidate(article),
        None => Selection::Exhausted,
    }
}
