//! Embedding configuration types

use crate::constants::{DEFAULT_EMBEDDING_PROVIDER, DEFAULT_EMBEDDING_TIMEOUT_SECS};
use serde::{Deserialize, Serialize};
use tutorlens_application::ports::registry::EmbeddingProviderConfig;

/// Embedding provider selection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Registered provider name (`local`, `openai`, `ollama`)
    pub provider: String,
    /// Model name
    pub model: Option<String>,
    /// API key
    pub api_key: Option<String>,
    /// Base URL for API
    pub base_url: Option<String>,
    /// Per-call timeout in seconds
    pub timeout_secs: u64,
    /// Vector length the model produces, when it is not in the built-in table
    pub dimensions: Option<usize>,
    /// Ask the service to shorten vectors to this length (text-embedding-3 only)
    pub request_dimensions: Option<usize>,
    /// Wrap remote providers with the local fallback
    pub fallback: bool,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_EMBEDDING_PROVIDER.to_string(),
            model: None,
            api_key: None,
            base_url: None,
            timeout_secs: DEFAULT_EMBEDDING_TIMEOUT_SECS,
            dimensions: None,
            request_dimensions: None,
            fallback: true,
        }
    }
}

impl EmbeddingConfig {
    /// Whether the configured provider runs in-process
    pub fn is_local(&self) -> bool {
        self.provider.eq_ignore_ascii_case(DEFAULT_EMBEDDING_PROVIDER)
    }

    /// Registry lookup config for this section
    pub fn to_provider_config(&self) -> EmbeddingProviderConfig {
        EmbeddingProviderConfig {
            provider: self.provider.to_lowercase(),
            model: self.model.clone(),
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            dimensions: self.dimensions,
            request_dimensions: self.request_dimensions,
            timeout_secs: Some(self.timeout_secs),
        }
    }
}
