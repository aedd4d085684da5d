use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::value_objects::Embedding;

/// Text Embedding Interface
///
/// Turns learner texts into vectors so that similar answers can be grouped.
/// Implementations range from a remote embedding service to a deterministic
/// local term-frequency encoder; the clustering engine only sees this trait.
///
/// Every call on one instance returns vectors of [`dimensions`](Self::dimensions)
/// length.
///
/// # Default Implementations
///
/// `embed()` delegates to `embed_batch()` with a single item. Providers only
/// need to implement `embed_batch()`.
///
/// # Example
///
/// ```ignore
/// use tutorlens_domain::ports::providers::EmbeddingProvider;
///
/// let embedding = provider.embed("the water on top gets hot first").await?;
/// assert_eq!(embedding.dimensions, provider.dimensions());
/// ```
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Get embedding for a single text (default implementation provided)
    async fn embed(&self, text: &str) -> Result<Embedding> {
        let embeddings = self.embed_batch(&[text.to_string()]).await?;
        embeddings
            .into_iter()
            .next()
            .ok_or_else(|| Error::embedding("No embedding returned"))
    }

    /// Get embeddings for multiple texts, in input order
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>>;

    /// Length of every vector this provider returns
    fn dimensions(&self) -> usize;

    /// Identifier of the implementation (e.g. "local", "openai", "ollama")
    fn provider_name(&self) -> &str;

    /// Health check for the provider (default implementation provided)
    async fn health_check(&self) -> Result<()> {
        self.embed("health check").await?;
        Ok(())
    }
}
