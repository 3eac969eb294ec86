use std::env;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::defaults::default_catalog;
use crate::error::ConfigError;
use crate::fetcher::PageFetcher;
use crate::normalizer::LinkNormalizer;
use crate::store::{CatalogStore, TranslatedLogStore, CATALOG_FILE, TRANSLATED_LOG_FILE};
use crate::translator::api::{DEFAULT_MAX_TOKENS, DEFAULT_MODEL};
use crate::translator::command::DEFAULT_COMMAND_TIMEOUT;
use crate::translator::{
    ApiTranslator, CommandTranslator, PlaceholderTranslator, Translator, TranslatorKind,
};

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: Url,
    pub listing_path: String,
    pub data_dir: PathBuf,
    /// Explicit artifact directory; defaults to `<data_dir>/articles`
    pub articles_dir: Option<PathBuf>,
    pub output_ext: String,
    pub http_timeout: Duration,
    pub translator: TranslatorKind,
    /// Deadline for one API call or command run
    pub translator_timeout: Duration,
    pub language: String,
    pub anthropic_api_key: Option<String>,
    pub anthropic_model: String,
    pub anthropic_max_tokens: u32,
    pub translator_command: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let base_raw = var("CASES_BASE_URL").unwrap_or_else(|| "https://www.sysdig.com".to_string());
        let base_url = Url::parse(&base_raw).map_err(|e| ConfigError::Invalid {
            name: "CASES_BASE_URL",
            value: base_raw.clone(),
            reason: e.to_string(),
        })?;
        if base_url.scheme() != "http" && base_url.scheme() != "https" {
            return Err(ConfigError::Invalid {
                name: "CASES_BASE_URL",
                value: base_raw,
                reason: "must be an http(s) URL".to_string(),
            });
        }

        let timeout_secs = parse_var::<u64>(var("CASES_HTTP_TIMEOUT_SECS"), "CASES_HTTP_TIMEOUT_SECS", 30)?;
        let translator_timeout_secs = parse_var::<u64>(
            var("TRANSLATOR_TIMEOUT_SECS"),
            "TRANSLATOR_TIMEOUT_SECS",
            DEFAULT_COMMAND_TIMEOUT.as_secs(),
        )?;

        let translator = match var("TRANSLATOR") {
            Some(raw) => raw.parse::<TranslatorKind>().map_err(|reason| ConfigError::Invalid {
                name: "TRANSLATOR",
                value: raw,
                reason,
            })?,
            None => TranslatorKind::default(),
        };

        Ok(Self {
            base_url,
            listing_path: var("CASES_LISTING_PATH").unwrap_or_else(|| "/customers".to_string()),
            data_dir: var("CASES_DATA_DIR").map(PathBuf::from).unwrap_or_else(|| PathBuf::from(".")),
            articles_dir: var("CASES_ARTICLES_DIR").map(PathBuf::from),
            output_ext: var("CASES_OUTPUT_EXT")
                .map(|ext| ext.trim_start_matches('.').to_string())
                .unwrap_or_else(|| "md".to_string()),
            http_timeout: Duration::from_secs(timeout_secs),
            translator,
            translator_timeout: Duration::from_secs(translator_timeout_secs),
            language: var("TRANSLATION_LANGUAGE").unwrap_or_else(|| "Japanese".to_string()),
            anthropic_api_key: var("ANTHROPIC_API_KEY"),
            anthropic_model: var("ANTHROPIC_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            anthropic_max_tokens: parse_var(
                var("ANTHROPIC_MAX_TOKENS"),
                "ANTHROPIC_MAX_TOKENS",
                DEFAULT_MAX_TOKENS,
            )?,
            translator_command: var("TRANSLATOR_COMMAND").unwrap_or_else(|| "claude".to_string()),
        })
    }

    /// Override the data directory (CLI flag).
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Override the translation backend (CLI flag).
    pub fn with_translator(mut self, kind: TranslatorKind) -> Self {
        self.translator = kind;
        self
    }

    pub fn normalizer(&self) -> LinkNormalizer {
        LinkNormalizer::new(self.base_url.clone(), &self.listing_path)
    }

    /// Absolute URL of the listing page.
    pub fn listing_url(&self) -> String {
        let mut url = self.base_url.clone();
        url.set_path(self.normalizer().prefix());
        url.to_string()
    }

    pub fn articles_dir(&self) -> PathBuf {
        self.articles_dir
            .clone()
            .unwrap_or_else(|| self.data_dir.join("articles"))
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.data_dir.join(CATALOG_FILE)
    }

    pub fn translated_log_path(&self) -> PathBuf {
        self.data_dir.join(TRANSLATED_LOG_FILE)
    }

    pub fn catalog_store(&self) -> CatalogStore {
        CatalogStore::new(self.catalog_path(), default_catalog(&self.normalizer()))
    }

    pub fn translated_log_store(&self) -> TranslatedLogStore {
        TranslatedLogStore::new(self.translated_log_path())
    }

    /// Build the configured translation backend.
    pub fn build_translator(&self, fetcher: PageFetcher) -> Result<Box<dyn Translator>, ConfigError> {
        let translator: Box<dyn Translator> = match self.translator {
            TranslatorKind::Placeholder => Box::new(PlaceholderTranslator::new()),
            TranslatorKind::Api => {
                let api_key = self
                    .anthropic_api_key
                    .clone()
                    .ok_or(ConfigError::Missing("ANTHROPIC_API_KEY"))?;
                let http = reqwest::Client::builder()
                    .timeout(self.translator_timeout)
                    .build()?;
                let client = anthropic_client::AnthropicClient::new(api_key).with_http_client(http);
                Box::new(
                    ApiTranslator::new(client, fetcher)
                        .with_model(&self.anthropic_model)
                        .with_max_tokens(self.anthropic_max_tokens)
                        .with_language(&self.language),
                )
            }
            TranslatorKind::Command => Box::new(
                CommandTranslator::new(&self.translator_command)
                    .with_language(&self.language)
                    .with_timeout(self.translator_timeout),
            ),
        };
        Ok(translator)
    }
}

fn parse_var<T>(raw: Option<String>, name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            name,
            reason: e.to_string(),
            value,
        }),
        None => Ok(default),
    }
}
