//! Customer Case-Study Inventory & Translation Tracker
//!
//! Scrapes a case-study listing page into a catalog, tracks which cases have
//! been translated, and runs one translation cycle at a time: pick an
//! untranslated case at random, hand its URL to a [`Translator`], write the
//! result to a dated file, and append it to the translated log.
//!
//! # Usage
//!
//! ```rust,ignore
//! use case_tracker::{run_cycle, ArtifactLayout, Config, PageFetcher};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let config = Config::from_env()?;
//! let catalog = config.catalog_store().load()?;
//! let log_store = config.translated_log_store();
//! let mut log = log_store.load()?;
//!
//! let fetcher = PageFetcher::new(config.http_timeout)?;
//! let translator = config.build_translator(fetcher)?;
//! let layout = ArtifactLayout::new(config.articles_dir(), &config.output_ext);
//! let today = chrono::Local::now().date_naive();
//!
//! let outcome = run_cycle(
//!     &catalog, &mut log, &log_store, translator.as_ref(), &layout, today,
//!     &mut StdRng::from_entropy(),
//! ).await?;
//! ```
//!
//! # Modules
//!
//! - [`normalizer`] - href to (slug, canonical URL)
//! - [`extractor`] - listing HTML to a deduplicated, slug-sorted catalog
//! - [`fetcher`] - HTTP access to the listing and case pages
//! - [`store`] - JSON record stores for the catalog and translated log
//! - [`selector`] - frontier computation and random selection
//! - [`translator`] - the translation boundary and its backends
//! - [`cycle`] - one select/translate/write/record cycle
//! - [`report`] - progress summary and listing formats
//! - [`testing`] - mock translator for tests

pub mod config;
pub mod cycle;
pub mod defaults;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod normalizer;
pub mod report;
pub mod selector;
pub mod store;
pub mod testing;
pub mod translator;
pub mod types;

// Re-export core types at crate root
pub use config::Config;
pub use cycle::{run_cycle, ArtifactLayout, CycleOutcome};
pub use defaults::{default_catalog, DEFAULT_ARTICLES};
pub use error::{ConfigError, FetchError, StoreError, TranslateError};
pub use extractor::{extract_articles, extract_from_html};
pub use fetcher::PageFetcher;
pub use normalizer::{title_from_slug, LinkNormalizer, NormalizedLink};
pub use report::{pipe_line, ProgressReport};
pub use selector::{frontier, select, Selection};
pub use store::{merge_catalog, CatalogStore, RecordStore, TranslatedLogStore};
pub use translator::{
    ApiTranslator, CommandTranslator, PlaceholderTranslator, Translator, TranslatorKind,
};
pub use types::{Article, TranslatedRecord};
