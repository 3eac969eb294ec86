//! Testing utilities.
//!
//! A deterministic [`Translator`] double so cycles can be exercised without
//! network or model access.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{TranslateError, TranslateResult};
use crate::translator::Translator;

#[derive(Debug, Clone)]
enum Canned {
    Content(String),
    Failure(String),
}

impl Canned {
    fn to_result(&self) -> TranslateResult<String> {
        match self {
            Canned::Content(content) => Ok(content.clone()),
            Canned::Failure(message) => Err(TranslateError::Command(message.clone())),
        }
    }
}

/// Mock translator for testing.
///
/// Returns a default canned result, optionally overridden per URL, and
/// records every URL it was asked to translate.
///
/// # Example
///
/// ```rust
/// use case_tracker::testing::MockTranslator;
///
/// let mock = MockTranslator::returning("# 翻訳")
///     .with_failure_for("https://example.com/customers/broken", "boom");
/// ```
#[derive(Clone)]
pub struct MockTranslator {
    default: Canned,
    overrides: Arc<RwLock<HashMap<String, Canned>>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockTranslator {
    /// Succeed with `content` for every URL.
    pub fn returning(content: impl Into<String>) -> Self {
        Self::with_default(Canned::Content(content.into()))
    }

    /// Fail with `message` for every URL.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_default(Canned::Failure(message.into()))
    }

    fn with_default(default: Canned) -> Self {
        Self {
            default,
            overrides: Arc::new(RwLock::new(HashMap::new())),
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Succeed with `content` for one URL.
    pub fn with_content_for(self, url: impl Into<String>, content: impl Into<String>) -> Self {
        self.overrides
            .write()
            .unwrap()
            .insert(url.into(), Canned::Content(content.into()));
        self
    }

    /// Fail with `message` for one URL.
    pub fn with_failure_for(self, url: impl Into<String>, message: impl Into<String>) -> Self {
        self.overrides
            .write()
            .unwrap()
            .insert(url.into(), Canned::Failure(message.into()));
        self
    }

    /// URLs requested so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(&self, url: &str) -> TranslateResult<String> {
        self.calls.write().unwrap().push(url.to_string());

        let overrides = self.overrides.read().unwrap();
        overrides.get(url).unwrap_or(&self.default).to_result()
    }

    fn name(&self) -> &str {
        "mock"
    }
}
