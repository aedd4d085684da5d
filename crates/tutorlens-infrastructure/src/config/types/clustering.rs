//! Clustering configuration types

use serde::{Deserialize, Serialize};
use tutorlens_domain::ClusteringOptions;
use tutorlens_domain::constants::{
    CLUSTERING_CONVERGENCE_THRESHOLD, CLUSTERING_DEFAULT_K, CLUSTERING_MAX_ITERATIONS,
};

/// Clustering defaults
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClusteringConfig {
    /// Cluster count used when a request does not name one
    pub default_k: usize,
    /// Hard cap on relocation rounds
    pub max_iterations: usize,
    /// Center stability threshold, in (0, 1]
    pub convergence_threshold: f32,
    /// Fixed sampler seed for reproducible runs
    pub seed: Option<u64>,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            default_k: CLUSTERING_DEFAULT_K,
            max_iterations: CLUSTERING_MAX_ITERATIONS,
            convergence_threshold: CLUSTERING_CONVERGENCE_THRESHOLD,
            seed: None,
        }
    }
}

impl ClusteringConfig {
    /// Engine options for this section
    pub fn to_options(&self) -> ClusteringOptions {
        ClusteringOptions {
            k: self.default_k,
            max_iterations: self.max_iterations,
            convergence_threshold: self.convergence_threshold,
            seed: self.seed,
        }
    }
}
