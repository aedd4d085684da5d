//! Clustering Use Case
//!
//! Embeds texts through the injected provider, then partitions them with
//! the similarity k-means engine.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;
use tutorlens_domain::error::Result;
use tutorlens_domain::{ClusterAssignment, ClusteringOptions};

use crate::clustering::{cluster_embeddings, rng_for};
use crate::domain_services::ClusteringServiceInterface;
use crate::ports::providers::EmbeddingProvider;

/// Embed and cluster `texts` with explicit options
///
/// Fewer than two texts are never sent to the provider.
pub async fn cluster_with_options(
    provider: &dyn EmbeddingProvider,
    texts: &[String],
    options: &ClusteringOptions,
) -> Result<ClusterAssignment> {
    let mut rng = rng_for(options);
    if texts.len() < 2 {
        return Ok(cluster_embeddings(texts, &[], options, &mut rng));
    }

    let embeddings = provider.embed_batch(texts).await?;
    debug!(
        provider = provider.provider_name(),
        texts = texts.len(),
        dimensions = provider.dimensions(),
        "Embedded texts for clustering"
    );
    let vectors: Vec<Vec<f32>> = embeddings.into_iter().map(|e| e.vector).collect();
    Ok(cluster_embeddings(texts, &vectors, options, &mut rng))
}

/// Clustering service bound to one embedding provider
#[derive(Clone)]
pub struct ClusteringService {
    provider: Arc<dyn EmbeddingProvider>,
    options: ClusteringOptions,
}

impl ClusteringService {
    /// Create a service; `options.k` is replaced by the `k` of each call
    pub fn new(provider: Arc<dyn EmbeddingProvider>, options: ClusteringOptions) -> Self {
        Self { provider, options }
    }

    /// The embedding provider in use
    pub fn provider(&self) -> &Arc<dyn EmbeddingProvider> {
        &self.provider
    }

    /// Default tunables
    pub fn options(&self) -> ClusteringOptions {
        self.options
    }
}

impl std::fmt::Debug for ClusteringService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClusteringService")
            .field("provider", &self.provider.provider_name())
            .field("options", &self.options)
            .finish()
    }
}

#[async_trait]
impl ClusteringServiceInterface for ClusteringService {
    async fn cluster(&self, texts: &[String], k: usize) -> Result<ClusterAssignment> {
        let options = ClusteringOptions { k, ..self.options };
        cluster_with_options(self.provider.as_ref(), texts, &options).await
    }
}
