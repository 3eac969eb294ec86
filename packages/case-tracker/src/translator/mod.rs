//! Translation boundary.
//!
//! The cycle only needs `translate(url) -> text`; how the text is produced
//! is up to the backend. Three are provided:
//!
//! - [`PlaceholderTranslator`] - canned document, no external calls
//! - [`ApiTranslator`] - fetches the page and calls the Anthropic Messages API
//! - [`CommandTranslator`] - hands the prompt to an external CLI

use async_trait::async_trait;
use std::fmt;
use std::str::FromStr;

use crate::error::TranslateResult;

pub mod api;
pub mod command;
pub mod placeholder;
pub mod prompt;

pub use api::ApiTranslator;
pub use command::CommandTranslator;
pub use placeholder::PlaceholderTranslator;
pub use prompt::{page_to_markdown, translation_prompt, MAX_SOURCE_CHARS};

/// Turns a canonical case-study URL into translated content.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Produce the translated document for `url`.
    async fn translate(&self, url: &str) -> TranslateResult<String>;

    /// Backend name for logs.
    fn name(&self) -> &str;
}

#[async_trait]
impl<T: Translator + ?Sized> Translator for Box<T> {
    async fn translate(&self, url: &str) -> TranslateResult<String> {
        (**self).translate(url).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Which backend to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TranslatorKind {
    #[default]
    Placeholder,
    Api,
    Command,
}

impl FromStr for TranslatorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "placeholder" => Ok(Self::Placeholder),
            "api" => Ok(Self::Api),
            "command" => Ok(Self::Command),
            other => Err(format!(
                "unknown translator '{other}' (expected placeholder, api, or command)"
            )),
        }
    }
}

impl fmt::Display for TranslatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Placeholder => "placeholder",
            Self::Api => "api",
            Self::Command => "command",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translator_kind_parses_case_insensitively() {
        assert_eq!("API".parse::<TranslatorKind>(), Ok(TranslatorKind::Api));
        assert_eq!(" command ".parse::<TranslatorKind>(), Ok(TranslatorKind::Command));
        assert_eq!(
            "placeholder".parse::<TranslatorKind>(),
            Ok(TranslatorKind::Placeholder)
        );
        assert!("deepl".parse::<TranslatorKind>().is_err());
    }

    #[test]
    fn test_translator_kind_display_round_trips() {
        for kind in [TranslatorKind::Placeholder, TranslatorKind::Api, TranslatorKind::Command] {
            assert_eq!(kind.to_string().parse::<TranslatorKind>(), Ok(kind));
        }
    }
}
