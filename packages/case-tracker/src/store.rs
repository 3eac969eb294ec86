//! Durable JSON record stores for the catalog and the translated log.
//!
//! Each store is a single UTF-8 JSON array of objects. A save rewrites the
//! whole snapshot through a temp file and rename, so a reader never sees a
//! half-written file. There is no locking: one running instance is assumed.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::types::{Article, TranslatedRecord};

/// File name of the catalog inside the data directory.
pub const CATALOG_FILE: &str = "article_list.json";

/// File name of the translated log inside the data directory.
pub const TRANSLATED_LOG_FILE: &str = "translated.json";

/// Whole-file JSON array store.
#[derive(Debug, Clone)]
pub struct RecordStore<T> {
    path: PathBuf,
    _records: PhantomData<fn() -> T>,
}

impl<T: Serialize + DeserializeOwned> RecordStore<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _records: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load records, or `None` when the file does not exist yet.
    pub fn load_existing(&self) -> StoreResult<Option<Vec<T>>> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No store file yet");
                return Ok(None);
            }
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        if data.trim().is_empty() {
            return Ok(Some(Vec::new()));
        }

        let records: Vec<T> = serde_json::from_str(&data).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = %self.path.display(), records = records.len(), "Store loaded");
        Ok(Some(records))
    }

    /// Load records; a missing file is an empty store.
    pub fn load(&self) -> StoreResult<Vec<T>> {
        Ok(self.load_existing()?.unwrap_or_default())
    }

    /// Replace the stored snapshot with `records`.
    pub fn save(&self, records: &[T]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }

        let mut json = serde_json::to_string_pretty(records).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        json.push('\n');

        let tmp = self.tmp_path();
        fs::write(&tmp, json).map_err(|e| StoreError::io(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| StoreError::io(&self.path, e))?;

        debug!(path = %self.path.display(), records = records.len(), "Store saved");
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

/// Log of completed translations, in append order.
pub type TranslatedLogStore = RecordStore<TranslatedRecord>;

/// Catalog store that falls back to a curated list before the first scrape.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    records: RecordStore<Article>,
    defaults: Vec<Article>,
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>, defaults: Vec<Article>) -> Self {
        Self {
            records: RecordStore::new(path),
            defaults,
        }
    }

    pub fn path(&self) -> &Path {
        self.records.path()
    }

    /// Stored catalog, or the defaults when nothing has been saved yet.
    pub fn load(&self) -> StoreResult<Vec<Article>> {
        match self.records.load_existing()? {
            Some(articles) => Ok(articles),
            None => {
                info!(
                    path = %self.path().display(),
                    articles = self.defaults.len(),
                    "No cached catalog, using default article list"
                );
                Ok(self.defaults.clone())
            }
        }
    }

    pub fn save(&self, articles: &[Article]) -> StoreResult<()> {
        self.records.save(articles)
    }
}

/// Merge freshly discovered articles into a catalog.
///
/// Existing entries are kept untouched; unseen slugs are added. Returns the
/// slug-sorted catalog and the number of articles added.
pub fn merge_catalog(existing: Vec<Article>, discovered: Vec<Article>) -> (Vec<Article>, usize) {
    let mut seen: HashSet<String> = existing.iter().map(|a| a.slug.clone()).collect();
    let mut merged = existing;
    let mut added = 0;

    for article in discovered {
        if seen.insert(article.slug.clone()) {
            merged.push(article);
            added += 1;
        }
    }

    merged.sort_by(|a, b| a.slug.cmp(&b.slug));
    (merged, added)
}
