//! Embedding provider registry
//!
//! Each provider crate contributes an [`EmbeddingProviderEntry`] to
//! [`EMBEDDING_PROVIDERS`] at link time. The `[embedding]` config section is
//! turned into an [`EmbeddingProviderConfig`] and matched against those
//! entries by name, so the analysis layer never names a concrete provider.

use std::sync::Arc;

use crate::ports::providers::EmbeddingProvider;

/// Settings handed to a provider factory
///
/// Every field except `provider` is optional; factories fill the gaps with
/// their own defaults.
#[derive(Debug, Clone, Default)]
pub struct EmbeddingProviderConfig {
    /// Registered provider name, lower-case (`local`, `openai`, `ollama`)
    pub provider: String,
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    /// Vector length the model is known to produce
    ///
    /// Only declares the length. Without it, remote providers adopt the
    /// length of their first answer.
    pub dimensions: Option<usize>,
    /// Length to ask the service to reduce vectors to
    ///
    /// Sent with every request, so only set it for models that support
    /// shortening (OpenAI text-embedding-3).
    pub request_dimensions: Option<usize>,
    pub timeout_secs: Option<u64>,
}

impl EmbeddingProviderConfig {
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    pub fn with_request_dimensions(mut self, dimensions: usize) -> Self {
        self.request_dimensions = Some(dimensions);
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }
}

/// Factory signature every provider registers
///
/// Errors are plain strings so provider crates need no shared error type.
pub type EmbeddingProviderFactory =
    fn(&EmbeddingProviderConfig) -> Result<Arc<dyn EmbeddingProvider>, String>;

/// One registered provider
pub struct EmbeddingProviderEntry {
    /// Name matched against `[embedding] provider`
    pub name: &'static str,
    /// One line shown by `tutorlens providers`
    pub description: &'static str,
    pub factory: EmbeddingProviderFactory,
}

#[linkme::distributed_slice]
pub static EMBEDDING_PROVIDERS: [EmbeddingProviderEntry] = [..];

/// Build the provider named by `config.provider`
///
/// # Example
///
/// ```ignore
/// let config = EmbeddingProviderConfig::new("ollama").with_model("all-minilm");
/// let provider = resolve_embedding_provider(&config)?;
/// ```
pub fn resolve_embedding_provider(
    config: &EmbeddingProviderConfig,
) -> Result<Arc<dyn EmbeddingProvider>, String> {
    match EMBEDDING_PROVIDERS
        .iter()
        .find(|entry| entry.name == config.provider)
    {
        Some(entry) => (entry.factory)(config),
        None => {
            let known: Vec<&str> = list_embedding_providers()
                .into_iter()
                .map(|(name, _)| name)
                .collect();
            Err(format!(
                "Unknown embedding provider '{}'. Available providers: {known:?}",
                config.provider
            ))
        }
    }
}

/// Registered providers as `(name, description)`, sorted by name
pub fn list_embedding_providers() -> Vec<(&'static str, &'static str)> {
    let mut providers: Vec<_> = EMBEDDING_PROVIDERS
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect();
    providers.sort_unstable_by_key(|(name, _)| *name);
    providers
}
