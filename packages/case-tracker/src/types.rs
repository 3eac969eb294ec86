//! Catalog and log record types.
//!
//! Both serialize to the flat JSON objects stored on disk, so the files stay
//! human-diffable and safe to hand-edit between runs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A discoverable case study. Keyed by `slug`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Unique key, derived from `url`
    pub slug: String,

    /// Human-readable title
    pub title: String,

    /// Absolute URL without query string or fragment
    pub url: String,
}

impl Article {
    pub fn new(slug: impl Into<String>, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            url: url.into(),
        }
    }
}

/// One successful translation. Appended once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatedRecord {
    pub slug: String,
    pub title: String,
    pub url: String,

    /// Serialized as `YYYY-MM-DD`
    pub translated_date: NaiveDate,

    /// Path of the written artifact
    pub output_file: PathBuf,
}

impl TranslatedRecord {
    /// Record a translation of `article` written to `output_file` on `date`.
    pub fn for_article(article: &Article, date: NaiveDate, output_file: PathBuf) -> Self {
        Self {
            slug: article.slug.clone(),
            title: article.title.clone(),
            url: article.url.clone(),
            translated_date: date,
            output_file,
        }
    }
}
