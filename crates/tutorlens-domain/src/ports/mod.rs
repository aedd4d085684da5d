//! Domain Port Interfaces
//!
//! Contracts the domain depends on and outer layers implement.

/// External provider ports
pub mod providers;

pub use providers::EmbeddingProvider;
