//! Embedding Provider Implementations
//!
//! Converts learner texts into vectors for similarity clustering.
//!
//! ## Available Providers
//!
//! | Provider | Type | Registered as |
//! |----------|------|---------------|
//! | LocalEmbeddingProvider | Offline term frequency | `local` |
//! | OpenAIEmbeddingProvider | Cloud / self-hosted | `openai` |
//! | OllamaEmbeddingProvider | Local server | `ollama` |
//! | FallbackEmbeddingProvider | Wrapper | (built by bootstrap) |
//!
//! ## Provider Selection Guide
//!
//! - **Tests and offline use**: `local`, deterministic and instant
//! - **Better grouping**: a remote model wrapped in
//!   [`FallbackEmbeddingProvider`] so outages degrade to `local`

pub mod fallback;
pub mod helpers;
pub mod local;
#[cfg(feature = "embedding-ollama")]
pub mod ollama;
#[cfg(feature = "embedding-openai")]
pub mod openai;

pub use fallback::{EmbeddingStrategy, FallbackEmbeddingProvider};
pub use helpers::constructor;
pub use local::LocalEmbeddingProvider;
#[cfg(feature = "embedding-ollama")]
pub use ollama::OllamaEmbeddingProvider;
#[cfg(feature = "embedding-openai")]
pub use openai::OpenAIEmbeddingProvider;
