//! Main application configuration

use serde::{Deserialize, Serialize};
use tutorlens_domain::AnalysisOptions;

use super::{ClusteringConfig, EmbeddingConfig, LoggingConfig};

/// Root configuration document
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Logging section
    pub logging: LoggingConfig,
    /// Embedding provider section
    pub embedding: EmbeddingConfig,
    /// Scorer tunables
    pub analysis: AnalysisOptions,
    /// Clustering defaults
    pub clustering: ClusteringConfig,
}
