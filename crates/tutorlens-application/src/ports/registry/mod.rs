//! Provider registry
//!
//! Embedding providers live in `tutorlens-providers`, a crate this one does
//! not depend on. They announce themselves through a `linkme` distributed
//! slice instead, and the configured name picks one at startup.
//!
//! ```ignore
//! use tutorlens_application::ports::registry::{EmbeddingProviderEntry, EMBEDDING_PROVIDERS};
//!
//! #[linkme::distributed_slice(EMBEDDING_PROVIDERS)]
//! static LOCAL_PROVIDER: EmbeddingProviderEntry = EmbeddingProviderEntry {
//!     name: "local",
//!     description: "Deterministic term-frequency embeddings",
//!     factory: local_factory,
//! };
//! ```

pub mod embedding;

pub use embedding::{
    EMBEDDING_PROVIDERS, EmbeddingProviderConfig, EmbeddingProviderEntry,
    EmbeddingProviderFactory, list_embedding_providers, resolve_embedding_provider,
};
