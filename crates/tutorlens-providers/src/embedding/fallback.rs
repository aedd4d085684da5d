//! Fallback embedding wrapper
//!
//! Runs a primary (usually remote) provider under a timeout and switches to
//! the local term-frequency provider whenever the primary cannot deliver.
//! The wrapper itself never fails.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use tutorlens_domain::error::{Error, Result};
use tutorlens_domain::ports::providers::EmbeddingProvider;
use tutorlens_domain::value_objects::Embedding;

use crate::constants::{ERROR_MSG_REQUEST_TIMEOUT, LOCAL_EMBEDDING_MODEL};
use crate::embedding::helpers::{DEFAULT_EMBEDDING_TIMEOUT, fill_blanks, non_blank};
use crate::embedding::local::LocalEmbeddingProvider;

/// Which strategy produced a batch of embeddings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmbeddingStrategy {
    /// The wrapped provider answered in time with usable vectors
    Primary,
    /// Local term-frequency vectors, zero-padded to the primary's length
    Fallback,
}

impl EmbeddingStrategy {
    /// Strategy implied by the outcome of a primary call
    pub fn select<T>(outcome: &Result<T>) -> Self {
        match outcome {
            Ok(_) => Self::Primary,
            Err(_) => Self::Fallback,
        }
    }
}

/// Primary provider with a local safety net
///
/// Vectors always have the primary's [`dimensions`](EmbeddingProvider::dimensions).
/// Blank texts get an all-zero vector and are never sent to the primary.
pub struct FallbackEmbeddingProvider {
    primary: Arc<dyn EmbeddingProvider>,
    local: LocalEmbeddingProvider,
    timeout: Duration,
}

impl FallbackEmbeddingProvider {
    /// Wrap `primary` with the default timeout and local provider
    pub fn new(primary: Arc<dyn EmbeddingProvider>) -> Self {
        Self {
            primary,
            local: LocalEmbeddingProvider::new(),
            timeout: DEFAULT_EMBEDDING_TIMEOUT,
        }
    }

    /// Bound each primary call by `timeout`
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a custom local provider for the fallback strategy
    pub fn with_local(mut self, local: LocalEmbeddingProvider) -> Self {
        self.local = local;
        self
    }

    /// Embed `texts` and report which strategy produced the non-blank ones
    pub async fn embed_batch_with_strategy(
        &self,
        texts: &[String],
    ) -> (EmbeddingStrategy, Vec<Embedding>) {
        let (positions, pending) = non_blank(texts);
        if pending.is_empty() {
            let zeros = fill_blanks(
                texts.len(),
                positions,
                Vec::new(),
                self.dimensions(),
                LOCAL_EMBEDDING_MODEL,
            );
            return (EmbeddingStrategy::Primary, zeros);
        }

        let outcome = self.try_primary(&pending).await;
        let strategy = EmbeddingStrategy::select(&outcome);
        // Read after the call: the primary may have just adopted its length.
        let dimensions = self.dimensions();
        let produced = match outcome {
            Ok(produced) => produced,
            Err(error) => {
                warn!(
                    primary = self.primary.provider_name(),
                    texts = pending.len(),
                    error = %error,
                    "Primary embedding failed, using local fallback"
                );
                pending
                    .iter()
                    .map(|text| {
                        let mut vector = self.local.vectorize(text);
                        vector.resize(dimensions, 0.0);
                        Embedding::new(vector, LOCAL_EMBEDDING_MODEL)
                    })
                    .collect()
            }
        };

        let embeddings = fill_blanks(
            texts.len(),
            positions,
            produced,
            dimensions,
            LOCAL_EMBEDDING_MODEL,
        );
        (strategy, embeddings)
    }

    /// Primary call under the timeout, with its output checked for shape
    async fn try_primary(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        let Ok(outcome) = tokio::time::timeout(self.timeout, self.primary.embed_batch(texts)).await
        else {
            return Err(Error::embedding(format!(
                "{ERROR_MSG_REQUEST_TIMEOUT} {:?}",
                self.timeout
            )));
        };
        let embeddings = outcome?;

        if embeddings.len() != texts.len() {
            return Err(Error::embedding(format!(
                "expected {} embeddings, got {}",
                texts.len(),
                embeddings.len()
            )));
        }
        let expected = self.primary.dimensions();
        for embedding in &embeddings {
            if embedding.vector.is_empty() {
                return Err(Error::embedding("empty embedding vector"));
            }
            if embedding.vector.len() != expected {
                return Err(Error::embedding(format!(
                    "embedding has {} dimensions, provider declares {expected}",
                    embedding.vector.len()
                )));
            }
        }

        debug!(
            primary = self.primary.provider_name(),
            texts = texts.len(),
            "Primary embedding succeeded"
        );
        Ok(embeddings)
    }
}

impl std::fmt::Debug for FallbackEmbeddingProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FallbackEmbeddingProvider")
            .field("primary", &self.primary.provider_name())
            .field("local", &self.local)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[async_trait]
impl EmbeddingProvider for FallbackEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        let (_, embeddings) = self.embed_batch_with_strategy(texts).await;
        Ok(embeddings)
    }

    fn dimensions(&self) -> usize {
        self.primary.dimensions()
    }

    fn provider_name(&self) -> &str {
        "fallback"
    }

    /// Reports the primary's health; embedding itself keeps working either way
    async fn health_check(&self) -> Result<()> {
        self.primary.health_check().await
    }
}
