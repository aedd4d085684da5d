//! Application Ports
//!
//! - `providers`: provider interfaces re-exported from the domain
//! - `registry`: linkme registration slices for those providers

/// Provider port interfaces
pub mod providers {
    pub use tutorlens_domain::ports::providers::*;
}

/// Provider auto-registration
pub mod registry;

pub use providers::EmbeddingProvider;
