//! One translation cycle: select, translate, write, record.
//!
//! A record is appended and flushed only after the translator succeeded
//! and the artifact is on disk. Translator failures end the cycle without
//! touching the log, leaving the slug eligible for a later run.

use chrono::NaiveDate;
use rand::Rng;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::{StoreError, StoreResult, TranslateError};
use crate::selector::{select, Selection};
use crate::store::TranslatedLogStore;
use crate::translator::Translator;
use crate::types::{Article, TranslatedRecord};

/// Where translated documents are written.
#[derive(Debug, Clone)]
pub struct ArtifactLayout {
    pub dir: PathBuf,
    pub extension: String,
}

impl ArtifactLayout {
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
        }
    }

    /// `<dir>/<YYYY-MM-DD>_<slug>.<ext>`
    pub fn path_for(&self, date: NaiveDate, slug: &str) -> PathBuf {
        self.dir
            .join(format!("{}_{}.{}", date.format("%Y-%m-%d"), slug, self.extension))
    }
}

/// How a cycle ended.
#[derive(Debug)]
pub enum CycleOutcome {
    /// Artifact written and record persisted
    Translated(TranslatedRecord),
    /// Nothing left to translate
    Exhausted,
    /// Translator failed; no record was written
    Failed { article: Article, error: TranslateError },
}

impl CycleOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Run one cycle against loaded snapshots.
///
/// `log` is the in-memory translated log; on success the new record is
/// pushed to it and the whole log is saved through `log_store`. Only local
/// storage failures are returned as errors.
pub async fn run_cycle<T, R>(
    catalog: &[Article],
    log: &mut Vec<TranslatedRecord>,
    log_store: &TranslatedLogStore,
    translator: &T,
    layout: &ArtifactLayout,
    date: NaiveDate,
    rng: &mut R,
) -> StoreResult<CycleOutcome>
where
    T: Translator + ?Sized,
    R: Rng + ?Sized,
{
    let article = match select(catalog, log, rng) {
        Selection::Candidate(article) => article.clone(),
        Selection::Exhausted => {
            info!(catalog = catalog.len(), "All articles are translated");
            return Ok(CycleOutcome::Exhausted);
        }
    };

    info!(
        slug = %article.slug,
        url = %article.url,
        translator = translator.name(),
        "Selected article for translation"
    );

    let content = match translator.translate(&article.url).await {
        Ok(content) if content.trim().is_empty() => {
            let error = TranslateError::EmptyContent {
                url: article.url.clone(),
            };
            warn!(slug = %article.slug, error = %error, "Translation failed, will retry on a later run");
            return Ok(CycleOutcome::Failed { article, error });
        }
        Ok(content) => content,
        Err(error) => {
            warn!(slug = %article.slug, error = %error, "Translation failed, will retry on a later run");
            return Ok(CycleOutcome::Failed { article, error });
        }
    };

    let output_file = layout.path_for(date, &article.slug);
    write_artifact(&output_file, &content)?;

    let record = TranslatedRecord::for_article(&article, date, output_file);
    log.push(record.clone());
    if let Err(e) = log_store.save(log) {
        log.pop();
        return Err(e);
    }

    info!(
        slug = %record.slug,
        output = %record.output_file.display(),
        "Translation recorded"
    );

    Ok(CycleOutcome::Translated(record))
}

fn write_artifact(path: &Path, content: &str) -> StoreResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
    }
    fs::write(path, content).map_err(|e| StoreError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_path_pattern() {
        let layout = ArtifactLayout::new("articles", "md");
        let date = NaiveDate::from_ymd_opt(2025, 11, 3).unwrap();

        assert_eq!(
            layout.path_for(date, "sprout-social"),
            PathBuf::from("articles/2025-11-03_sprout-social.md")
        );
    }
}
