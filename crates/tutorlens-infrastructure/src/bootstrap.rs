//! Service bootstrap
//!
//! Composition root: turns an [`AppConfig`] into ready-to-use services.
//!
//! ```text
//! AppConfig → registry (linkme) → primary provider → [fallback wrapper] → ClusteringService
//!          └→ AnalysisOptions ─────────────────────────────────────────→ TranscriptAnalysisService
//! ```

use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tutorlens_application::ports::registry::resolve_embedding_provider;
use tutorlens_application::{ClusteringService, TranscriptAnalysisService};
use tutorlens_domain::error::{Error, Result};
use tutorlens_domain::ports::providers::EmbeddingProvider;
use tutorlens_providers::FallbackEmbeddingProvider;

use crate::config::{AppConfig, EmbeddingConfig};

/// Application context holding the configuration and the built services
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,
    analysis: TranscriptAnalysisService,
    clustering: ClusteringService,
}

impl AppContext {
    /// Transcript scoring service
    pub fn analysis(&self) -> &TranscriptAnalysisService {
        &self.analysis
    }

    /// Embedding + clustering service
    pub fn clustering(&self) -> &ClusteringService {
        &self.clustering
    }
}

/// Build the application context from configuration
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    let provider = build_embedding_provider(&config.embedding)?;
    let analysis = TranscriptAnalysisService::new(config.analysis);
    let clustering = ClusteringService::new(provider, config.clustering.to_options());

    info!(
        embedding_provider = clustering.provider().provider_name(),
        dimensions = clustering.provider().dimensions(),
        infection_policy = ?config.analysis.infection_policy,
        "TutorLens services initialized"
    );

    Ok(AppContext {
        config: Arc::new(config),
        analysis,
        clustering,
    })
}

/// Resolve the configured embedding provider
///
/// Remote providers are wrapped with the local fallback unless
/// `embedding.fallback` is off. The local provider is never wrapped.
pub fn build_embedding_provider(config: &EmbeddingConfig) -> Result<Arc<dyn EmbeddingProvider>> {
    let primary = resolve_embedding_provider(&config.to_provider_config()).map_err(Error::config)?;

    if config.fallback && !config.is_local() {
        let wrapped = FallbackEmbeddingProvider::new(primary)
            .with_timeout(Duration::from_secs(config.timeout_secs));
        return Ok(Arc::new(wrapped));
    }
    Ok(primary)
}
