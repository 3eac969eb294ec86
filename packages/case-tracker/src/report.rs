//! Progress summary and listing formats.

use crate::selector::translated_slugs;
use crate::types::{Article, TranslatedRecord};

/// Snapshot of translation progress over a catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressReport {
    /// Articles in the catalog
    pub total: usize,
    /// Catalog articles with a translated record
    pub translated: usize,
    /// Catalog articles still in the frontier
    pub remaining: usize,
    /// Records in the log, including slugs no longer cataloged
    pub log_entries: usize,
    /// Most recently appended record
    pub latest: Option<TranslatedRecord>,
}

impl ProgressReport {
    pub fn new(catalog: &[Article], log: &[TranslatedRecord]) -> Self {
        let done = translated_slugs(log);
        let translated = catalog
            .iter()
            .filter(|a| done.contains(a.slug.as_str()))
            .count();

        Self {
            total: catalog.len(),
            translated,
            remaining: catalog.len() - translated,
            log_entries: log.len(),
            latest: log.last().cloned(),
        }
    }

    /// Share of the catalog translated, 0.0 for an empty catalog.
    pub fn percent_translated(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.translated as f64 / self.total as f64 * 100.0
    }
}

/// `slug|title` line with double quotes escaped, for shell consumption.
pub fn pipe_line(article: &Article) -> String {
    format!("{}|{}", article.slug, article.title.replace('"', "\\\""))
}
