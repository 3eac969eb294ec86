//! Canned translator for dry runs.

use async_trait::async_trait;
use tracing::warn;

use super::Translator;
use crate::error::TranslateResult;

/// Returns a fixed Markdown document naming the source URL.
///
/// Exercises the whole cycle (selection, artifact, log) without any
/// network or model access.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderTranslator;

impl PlaceholderTranslator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Translator for PlaceholderTranslator {
    async fn translate(&self, url: &str) -> TranslateResult<String> {
        warn!(url = %url, "Placeholder translator in use, no real translation performed");

        Ok(format!(
            r#"# Translation of {url}

This article was generated by the automated translation pipeline.

## Overview

(The translated content goes here.)

## Configuration required

Real translation needs one of:

1. **API backend** - set `TRANSLATOR=api` and `ANTHROPIC_API_KEY`
2. **Command backend** - set `TRANSLATOR=command` and `TRANSLATOR_COMMAND`

---

*Source: {url}*
"#
        ))
    }

    fn name(&self) -> &str {
        "placeholder"
    }
}
