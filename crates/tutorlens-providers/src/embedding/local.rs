//! Local term-frequency embedding provider
//!
//! Deterministic, offline and dependency-free. Used on its own when no
//! embedding service is configured, and as the fallback strategy behind a
//! remote provider.

use std::collections::HashMap;

use async_trait::async_trait;

use tutorlens_domain::constants::LOCAL_EMBEDDING_DIMENSIONS;
use tutorlens_domain::error::Result;
use tutorlens_domain::ports::providers::EmbeddingProvider;
use tutorlens_domain::text::tokenize_lowercase;
use tutorlens_domain::value_objects::Embedding;

use crate::constants::LOCAL_EMBEDDING_MODEL;

/// Term-frequency embedding provider
///
/// Each text becomes the normalized frequencies of its tokens (count divided
/// by the highest count), ordered by descending frequency and then by first
/// occurrence, truncated or zero-padded to a fixed length. Position `i` holds
/// the weight of the text's `i`-th most frequent token, whatever that token
/// is, so texts with the same frequency profile map to the same vector.
///
/// ```rust
/// use tutorlens_providers::embedding::LocalEmbeddingProvider;
///
/// let provider = LocalEmbeddingProvider::new();
/// let vector = provider.vectorize("a b a");
/// assert_eq!(&vector[..3], &[1.0, 0.5, 0.0]);
/// assert_eq!(vector.len(), 10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LocalEmbeddingProvider {
    dimensions: usize,
}

impl LocalEmbeddingProvider {
    /// Provider with the default dimensionality
    pub fn new() -> Self {
        Self::with_dimensions(LOCAL_EMBEDDING_DIMENSIONS)
    }

    /// Provider with a custom dimensionality; zero is raised to one
    pub fn with_dimensions(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    /// Embed one text synchronously
    pub fn vectorize(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0; self.dimensions];
        let tokens = tokenize_lowercase(text);
        if tokens.is_empty() {
            return vector;
        }

        // token -> (count, first position)
        let mut frequencies: HashMap<&str, (usize, usize)> = HashMap::new();
        for (position, token) in tokens.iter().enumerate() {
            frequencies
                .entry(token.as_str())
                .and_modify(|(count, _)| *count += 1)
                .or_insert((1, position));
        }

        let mut ranked: Vec<(usize, usize)> = frequencies.into_values().collect();
        ranked.sort_unstable_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));

        let max_count = ranked.first().map_or(1, |(count, _)| *count) as f32;
        for (slot, (count, _)) in vector.iter_mut().zip(ranked) {
            *slot = count as f32 / max_count;
        }
        vector
    }
}

impl Default for LocalEmbeddingProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmbeddingProvider for LocalEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        Ok(texts
            .iter()
            .map(|text| Embedding::new(self.vectorize(text), LOCAL_EMBEDDING_MODEL))
            .collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn provider_name(&self) -> &str {
        "local"
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use std::sync::Arc;

use tutorlens_application::ports::registry::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
};

fn local_factory(
    config: &EmbeddingProviderConfig,
) -> std::result::Result<Arc<dyn EmbeddingProvider>, String> {
    let dimensions = config.dimensions.unwrap_or(LOCAL_EMBEDDING_DIMENSIONS);
    Ok(Arc::new(LocalEmbeddingProvider::with_dimensions(dimensions)))
}

#[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
static LOCAL_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
    name: "local",
    description: "Deterministic term-frequency embeddings (offline)",
    factory: local_factory,
};
