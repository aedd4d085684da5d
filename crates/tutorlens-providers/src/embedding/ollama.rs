//! Ollama Embedding Provider
//!
//! Implements the `EmbeddingProvider` port using Ollama's local embedding
//! API. The endpoint embeds one prompt per request.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use tutorlens_domain::error::Result;
use tutorlens_domain::ports::providers::EmbeddingProvider;
use tutorlens_domain::value_objects::Embedding;

use crate::constants::{
    CONTENT_TYPE_JSON, EMBEDDING_DIMENSION_OLLAMA_DEFAULT, EMBEDDING_DIMENSION_OLLAMA_MINILM,
    EMBEDDING_DIMENSION_OLLAMA_MXBAI, EMBEDDING_DIMENSION_OLLAMA_NOMIC, OLLAMA_DEFAULT_BASE_URL,
    OLLAMA_DEFAULT_MODEL,
};
use crate::embedding::helpers::{
    ModelDimensions, constructor, fill_blanks, non_blank, parse_vector, request_error,
};
use crate::utils::HttpResponseUtils;

/// Ollama embedding provider
///
/// One request per non-blank text; blank texts get an all-zero vector.
///
/// ```rust,no_run
/// use tutorlens_providers::embedding::OllamaEmbeddingProvider;
/// use reqwest::Client;
/// use std::time::Duration;
///
/// let provider = OllamaEmbeddingProvider::new(
///     "http://localhost:11434".to_string(),
///     "nomic-embed-text".to_string(),
///     Duration::from_secs(30),
///     Client::new(),
/// );
/// ```
pub struct OllamaEmbeddingProvider {
    base_url: String,
    model: String,
    dimensions: ModelDimensions,
    timeout: Duration,
    http_client: Client,
}

impl OllamaEmbeddingProvider {
    /// Create a new Ollama embedding provider
    pub fn new(base_url: String, model: String, timeout: Duration, http_client: Client) -> Self {
        Self {
            base_url: constructor::get_effective_url(Some(&base_url), OLLAMA_DEFAULT_BASE_URL),
            model,
            dimensions: ModelDimensions::default(),
            timeout,
            http_client,
        }
    }

    /// Declare the vector length of a model the provider does not know
    pub fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions.declare(dimensions);
        self
    }

    /// Get the model name for this provider
    pub fn model(&self) -> &str {
        &self.model
    }

    async fn fetch_single_embedding(&self, text: &str) -> Result<serde_json::Value> {
        let payload = serde_json::json!({
            "model": self.model,
            "prompt": text,
            "stream": false
        });

        let response = self
            .http_client
            .post(format!("{}/api/embeddings", self.base_url))
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| request_error(e, self.timeout))?;

        HttpResponseUtils::check_and_parse(response, "Ollama").await
    }
}

#[async_trait]
impl EmbeddingProvider for OllamaEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        let (positions, pending) = non_blank(texts);
        let mut produced = Vec::with_capacity(pending.len());
        for text in &pending {
            let response = self.fetch_single_embedding(text).await?;
            let vector = parse_vector(&response["embedding"], "Ollama")?;
            produced.push(Embedding::new(vector, self.model.clone()));
        }
        self.dimensions.learn(&self.model, &produced);

        Ok(fill_blanks(
            texts.len(),
            positions,
            produced,
            self.dimensions(),
            &self.model,
        ))
    }

    fn dimensions(&self) -> usize {
        self.dimensions.resolve(|| match self.model.as_str() {
            "nomic-embed-text" => EMBEDDING_DIMENSION_OLLAMA_NOMIC,
            "all-minilm" => EMBEDDING_DIMENSION_OLLAMA_MINILM,
            "mxbai-embed-large" => EMBEDDING_DIMENSION_OLLAMA_MXBAI,
            _ => EMBEDDING_DIMENSION_OLLAMA_DEFAULT,
        })
    }

    fn provider_name(&self) -> &str {
        "ollama"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use std::sync::Arc;

use tutorlens_application::ports::registry::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
};

fn ollama_factory(
    config: &EmbeddingProviderConfig,
) -> std::result::Result<Arc<dyn EmbeddingProvider>, String> {
    let base_url = config
        .base_url
        .clone()
        .unwrap_or_else(|| OLLAMA_DEFAULT_BASE_URL.to_string());
    let model = config
        .model
        .clone()
        .unwrap_or_else(|| OLLAMA_DEFAULT_MODEL.to_string());
    let timeout = constructor::timeout_from_secs(config.timeout_secs);
    let http_client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| format!("Failed to create HTTP client: {e}"))?;

    let mut provider = OllamaEmbeddingProvider::new(base_url, model, timeout, http_client);
    if let Some(dimensions) = config.dimensions {
        provider = provider.with_dimensions(dimensions);
    }
    Ok(Arc::new(provider))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static OLLAMA_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "ollama",
    description: "Ollama local embedding server (nomic-embed-text, all-minilm, ...)",
    factory: ollama_factory,
};
