//! # TutorLens - Provider Implementations
//!
//! Embedding providers implementing the port defined in
//! `tutorlens-domain`. Every concrete provider registers itself in the
//! `tutorlens-application` registry at link time, so linking this crate is
//! enough to make it resolvable by name.
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! tutorlens-providers = { version = "0.1", default-features = false, features = ["embedding-ollama"] }
//! ```
//!
//! The `local` provider and the fallback wrapper are always available.

pub use tutorlens_domain::error::{Error, Result};
pub use tutorlens_domain::ports::providers::EmbeddingProvider;

/// Provider-specific constants
pub mod constants;

/// Embedding provider implementations
pub mod embedding;

/// Shared utilities for provider implementations
pub mod utils;

pub use embedding::{EmbeddingStrategy, FallbackEmbeddingProvider, LocalEmbeddingProvider};
