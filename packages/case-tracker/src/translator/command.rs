//! Translator that shells out to an external CLI (e.g. `claude -p`).

use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, info, warn};

use super::prompt::translation_prompt;
use super::Translator;
use crate::error::{TranslateError, TranslateResult};

/// Deadline for one command invocation.
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(600);

/// Runs `<program> <args...> <prompt>` and takes stdout as the translation.
///
/// The prompt carries only the URL; the external tool is expected to read
/// the page itself.
pub struct CommandTranslator {
    program: String,
    args: Vec<String>,
    language: String,
    timeout: Duration,
}

impl CommandTranslator {
    /// `program` is resolved on `PATH` at call time. Defaults to `-p` as the
    /// prompt flag.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: vec!["-p".to_string()],
            language: "Japanese".to_string(),
            timeout: DEFAULT_COMMAND_TIMEOUT,
        }
    }

    /// Replace the arguments placed before the prompt.
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn resolve_program(&self) -> TranslateResult<PathBuf> {
        which::which(&self.program).map_err(|e| {
            TranslateError::Command(format!("'{}' not found on PATH: {}", self.program, e))
        })
    }
}

#[async_trait]
impl Translator for CommandTranslator {
    async fn translate(&self, url: &str) -> TranslateResult<String> {
        let program = self.resolve_program()?;
        let prompt = translation_prompt(url, &self.language, None);

        info!(url = %url, program = %program.display(), "Running translation command");

        let child = Command::new(&program)
            .args(&self.args)
            .arg(&prompt)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output();

        let output = tokio::time::timeout(self.timeout, child)
            .await
            .map_err(|_| {
                warn!(url = %url, timeout_secs = self.timeout.as_secs(), "Translation command timed out");
                TranslateError::Command(format!(
                    "timed out after {}s",
                    self.timeout.as_secs()
                ))
            })?
            .map_err(|e| TranslateError::Command(format!("failed to spawn: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(url = %url, status = %output.status, stderr = %stderr.trim(), "Translation command failed");
            return Err(TranslateError::Command(format!(
                "exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let content = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!(url = %url, bytes = content.len(), "Translation command finished");

        if content.trim().is_empty() {
            return Err(TranslateError::EmptyContent {
                url: url.to_string(),
            });
        }

        Ok(content)
    }

    fn name(&self) -> &str {
        "command"
    }
}
