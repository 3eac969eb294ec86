//! Translator backed by the Anthropic Messages API.

use anthropic_client::{AnthropicClient, Message, MessagesRequest};
use async_trait::async_trait;
use tracing::{info, warn};

use super::prompt::{page_to_markdown, translation_prompt};
use super::Translator;
use crate::error::{TranslateError, TranslateResult};
use crate::fetcher::PageFetcher;

/// Default model for translations.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-5-20250929";

/// Default completion budget; a full article needs room.
pub const DEFAULT_MAX_TOKENS: u32 = 8000;

/// Fetches the case page, then asks the model for a translated article.
pub struct ApiTranslator {
    client: AnthropicClient,
    fetcher: PageFetcher,
    model: String,
    max_tokens: u32,
    language: String,
}

impl ApiTranslator {
    pub fn new(client: AnthropicClient, fetcher: PageFetcher) -> Self {
        Self {
            client,
            fetcher,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            language: "Japanese".to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

#[async_trait]
impl Translator for ApiTranslator {
    async fn translate(&self, url: &str) -> TranslateResult<String> {
        info!(url = %url, model = %self.model, "Fetching source page for translation");

        let html = self.fetcher.fetch_html(url).await?;
        let source = page_to_markdown(&html);
        let prompt = translation_prompt(url, &self.language, Some(&source));

        let request = MessagesRequest::new(&self.model)
            .max_tokens(self.max_tokens)
            .message(Message::user(prompt));

        let response = self.client.messages(request).await?;

        if response.stop_reason.as_deref() == Some("max_tokens") {
            warn!(url = %url, max_tokens = self.max_tokens, "Translation hit the token limit");
        }
        if response.text.trim().is_empty() {
            return Err(TranslateError::EmptyContent {
                url: url.to_string(),
            });
        }

        Ok(response.text)
    }

    fn name(&self) -> &str {
        "api"
    }
}
