//! Use Case Implementations

/// Scorecard service
pub mod analysis_service;
/// Embedding + clustering service
pub mod clustering_service;

pub use analysis_service::TranscriptAnalysisService;
pub use clustering_service::{ClusteringService, cluster_with_options};
