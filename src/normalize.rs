//! Optional language-model normalisation of extracted recipe text.
//!
//! The service stores extracted text as-is unless a [`Normalizer`] is
//! configured. [`LlmNormalizer`] sends the text to any `edgequake-llm`
//! provider; tests and offline setups plug in their own implementation.

use std::fmt;
use std::sync::Arc;

use edgequake_llm::{ChatMessage, CompletionOptions, LLMProvider, ProviderFactory};
use futures::future::BoxFuture;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::prompts::{normalize_request, DEFAULT_NORMALIZE_PROMPT};

/// Turns raw extracted text into a cleaner recipe body.
pub trait Normalizer: Send + Sync {
    /// Normalise `raw`. An empty output is an error.
    fn normalize<'a>(&'a self, raw: &'a str) -> BoxFuture<'a, Result<String>>;
}

/// Completion settings for [`LlmNormalizer`].
#[derive(Debug, Clone)]
pub struct NormalizerConfig {
    /// Sampling temperature. Default: 0.1.
    pub temperature: f32,
    /// Completion token cap. Default: 2048.
    pub max_tokens: usize,
    /// Replaces [`DEFAULT_NORMALIZE_PROMPT`] when set.
    pub system_prompt: Option<String>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self { temperature: 0.1, max_tokens: 2048, system_prompt: None }
    }
}

impl NormalizerConfig {
    fn options(&self) -> CompletionOptions {
        CompletionOptions {
            temperature: Some(self.temperature),
            max_tokens: Some(self.max_tokens),
            ..Default::default()
        }
    }

    fn prompt(&self) -> &str {
        self.system_prompt.as_deref().unwrap_or(DEFAULT_NORMALIZE_PROMPT)
    }
}

/// [`Normalizer`] backed by an `edgequake-llm` chat provider.
#[derive(Clone)]
pub struct LlmNormalizer {
    provider: Arc<dyn LLMProvider>,
    config: NormalizerConfig,
}

impl fmt::Debug for LlmNormalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmNormalizer")
            .field("provider", &"<dyn LLMProvider>")
            .field("config", &self.config)
            .finish()
    }
}

impl LlmNormalizer {
    /// Wrap an already-built provider.
    #[must_use]
    pub fn new(provider: Arc<dyn LLMProvider>, config: NormalizerConfig) -> Self {
        Self { provider, config }
    }

    /// Build a provider by name (`"openai"`, `"anthropic"`, ...), or auto-detect
    /// one from API key variables when `provider` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when no provider can be created.
    pub fn from_env(provider: Option<&str>, model: Option<&str>, config: NormalizerConfig) -> Result<Self> {
        let llm = match provider {
            Some(name) => {
                let model = model.unwrap_or("gpt-4.1-nano");
                ProviderFactory::create_llm_provider(name, model)
                    .map_err(|e| Error::Config(format!("provider {name}: {e}")))?
            }
            None => {
                let (llm, _embedding) = ProviderFactory::from_env()
                    .map_err(|e| Error::Config(format!("no LLM provider configured: {e}")))?;
                llm
            }
        };
        Ok(Self::new(llm, config))
    }
}

impl Normalizer for LlmNormalizer {
    fn normalize<'a>(&'a self, raw: &'a str) -> BoxFuture<'a, Result<String>> {
        Box::pin(async move {
            let messages = vec![
                ChatMessage::system(self.config.prompt()),
                ChatMessage::user(normalize_request(raw)),
            ];
            let options = self.config.options();

            let response = self.provider.chat(&messages, Some(&options)).await.map_err(|e| {
                warn!(error = %e, "normalisation request failed");
                Error::Normalization(e.to_string())
            })?;

            debug!(
                input_tokens = response.prompt_tokens,
                output_tokens = response.completion_tokens,
                "recipe normalised"
            );

            let text = response.content.trim();
            if text.is_empty() {
                return Err(Error::Normalization("model returned an empty completion".into()));
            }
            Ok(text.to_string())
        })
    }
}
