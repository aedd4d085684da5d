//! OpenAI-compatible Embedding Provider
//!
//! Implements the `EmbeddingProvider` port against any service exposing the
//! OpenAI `/embeddings` endpoint (OpenAI itself, Azure-style gateways,
//! self-hosted inference servers).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use tutorlens_domain::error::{Error, Result};
use tutorlens_domain::ports::providers::EmbeddingProvider;
use tutorlens_domain::value_objects::Embedding;

use crate::constants::{
    CONTENT_TYPE_JSON, EMBEDDING_DIMENSION_OPENAI_ADA, EMBEDDING_DIMENSION_OPENAI_LARGE,
    EMBEDDING_DIMENSION_OPENAI_SMALL, OPENAI_DEFAULT_BASE_URL, OPENAI_DEFAULT_MODEL,
};
use crate::embedding::helpers::{
    ModelDimensions, constructor, fill_blanks, non_blank, parse_vector, request_error,
};
use crate::utils::HttpResponseUtils;

/// OpenAI-compatible embedding provider
///
/// Receives its HTTP client via constructor injection. Blank texts are never
/// sent; they get an all-zero vector. Models outside the built-in table
/// (self-hosted `bge-*`, `e5-*`, ...) report the length of their first answer.
///
/// ## Example
///
/// ```rust,no_run
/// use tutorlens_providers::embedding::OpenAIEmbeddingProvider;
/// use reqwest::Client;
/// use std::time::Duration;
///
/// fn example() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
///     let provider = OpenAIEmbeddingProvider::new(
///         Some("sk-your-key".to_string()),
///         None,
///         "text-embedding-3-small".to_string(),
///         Duration::from_secs(30),
///         client,
///     );
///     Ok(())
/// }
/// ```
pub struct OpenAIEmbeddingProvider {
    api_key: Option<String>,
    base_url: String,
    model: String,
    dimensions: ModelDimensions,
    /// Sent as the `dimensions` request field
    request_dimensions: Option<usize>,
    timeout: Duration,
    http_client: Client,
}

impl OpenAIEmbeddingProvider {
    /// Create a new provider
    ///
    /// # Arguments
    /// * `api_key` - Bearer token; self-hosted servers may not need one
    /// * `base_url` - Optional custom base URL (defaults to the OpenAI API)
    /// * `model` - Model name (e.g., "text-embedding-3-small")
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(
        api_key: Option<String>,
        base_url: Option<String>,
        model: String,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        let api_key = api_key
            .map(|key| constructor::validate_api_key(&key))
            .filter(|key| !key.is_empty());
        let base_url = constructor::get_effective_url(
            constructor::validate_url(base_url).as_deref(),
            OPENAI_DEFAULT_BASE_URL,
        );

        Self {
            api_key,
            base_url,
            model,
            dimensions: ModelDimensions::default(),
            request_dimensions: None,
            timeout,
            http_client,
        }
    }

    /// Declare the vector length the model produces
    pub fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions.declare(dimensions);
        self
    }

    /// Ask the service to shorten vectors (text-embedding-3 models only)
    pub fn with_requested_dimensions(mut self, dimensions: usize) -> Self {
        self.request_dimensions = Some(dimensions);
        self.with_dimensions(dimensions)
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the model name
    pub fn model(&self) -> &str {
        &self.model
    }

    async fn fetch_embeddings(&self, texts: &[String]) -> Result<serde_json::Value> {
        let mut payload = serde_json::json!({
            "input": texts,
            "model": self.model,
            "encoding_format": "float"
        });
        if let Some(dimensions) = self.request_dimensions {
            payload["dimensions"] = serde_json::json!(dimensions);
        }

        let mut request = self
            .http_client
            .post(format!("{}/embeddings", self.base_url))
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(&payload);
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| request_error(e, self.timeout))?;

        HttpResponseUtils::check_and_parse(response, "OpenAI").await
    }

    /// Parse the `data` array, restoring input order from each item's `index`
    fn parse_embeddings(&self, response: &serde_json::Value, expected: usize) -> Result<Vec<Embedding>> {
        let data = response["data"]
            .as_array()
            .ok_or_else(|| Error::embedding("Invalid response format: missing data array"))?;

        if data.len() != expected {
            return Err(Error::embedding(format!(
                "Response data count mismatch: expected {expected}, got {}",
                data.len()
            )));
        }

        let mut slots: Vec<Option<Embedding>> = vec![None; expected];
        for (position, item) in data.iter().enumerate() {
            let index = item["index"]
                .as_u64()
                .and_then(|i| usize::try_from(i).ok())
                .unwrap_or(position);
            let slot = slots.get_mut(index).ok_or_else(|| {
                Error::embedding(format!("Response index {index} out of range"))
            })?;
            *slot = Some(Embedding::new(
                parse_vector(&item["embedding"], "OpenAI")?,
                self.model.clone(),
            ));
        }

        slots
            .into_iter()
            .enumerate()
            .map(|(i, slot)| {
                slot.ok_or_else(|| Error::embedding(format!("No embedding returned for text {i}")))
            })
            .collect()
    }
}

#[async_trait]
impl EmbeddingProvider for OpenAIEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        let (positions, pending) = non_blank(texts);
        let produced = if pending.is_empty() {
            Vec::new()
        } else {
            let response = self.fetch_embeddings(&pending).await?;
            self.parse_embeddings(&response, pending.len())?
        };
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
            "text-embedding-3-large" => EMBEDDING_DIMENSION_OPENAI_LARGE,
            "text-embedding-ada-002" => EMBEDDING_DIMENSION_OPENAI_ADA,
            _ => EMBEDDING_DIMENSION_OPENAI_SMALL,
        })
    }

    fn provider_name(&self) -> &str {
        "openai"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use std::sync::Arc;

use tutorlens_application::ports::registry::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
};

fn openai_factory(
    config: &EmbeddingProviderConfig,
) -> std::result::Result<Arc<dyn EmbeddingProvider>, String> {
    if config.api_key.is_none() && config.base_url.is_none() {
        return Err("OpenAI requires api_key (or base_url for a self-hosted server)".to_string());
    }
    let model = config
        .model
        .clone()
        .unwrap_or_else(|| OPENAI_DEFAULT_MODEL.to_string());
    let timeout = constructor::timeout_from_secs(config.timeout_secs);
    let http_client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| format!("Failed to create HTTP client: {e}"))?;

    let mut provider = OpenAIEmbeddingProvider::new(
        config.api_key.clone(),
        config.base_url.clone(),
        model,
        timeout,
        http_client,
    );
    if let Some(dimensions) = config.dimensions {
        provider = provider.with_dimensions(dimensions);
    }
    if let Some(dimensions) = config.request_dimensions {
        provider = provider.with_requested_dimensions(dimensions);
    }
    Ok(Arc::new(provider))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static OPENAI_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "openai",
    description: "OpenAI-compatible /embeddings API (text-embedding-3-small/large, ada-002)",
    factory: openai_factory,
};
