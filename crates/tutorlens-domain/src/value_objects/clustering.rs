//! Clustering value objects

use serde::{Deserialize, Serialize};

use crate::constants::{
    CLUSTERING_CONVERGENCE_THRESHOLD, CLUSTERING_DEFAULT_K, CLUSTERING_MAX_ITERATIONS,
};

/// Tunables for the similarity k-means partition
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClusteringOptions {
    /// Requested number of clusters
    pub k: usize,
    /// Hard cap on relocation rounds
    pub max_iterations: usize,
    /// Per-center similarity to its previous value above which a round counts as stable
    pub convergence_threshold: f32,
    /// Seed for the center sampler; `None` draws from the OS
    pub seed: Option<u64>,
}

impl Default for ClusteringOptions {
    fn default() -> Self {
        Self {
            k: CLUSTERING_DEFAULT_K,
            max_iterations: CLUSTERING_MAX_ITERATIONS,
            convergence_threshold: CLUSTERING_CONVERGENCE_THRESHOLD,
            seed: None,
        }
    }
}

impl ClusteringOptions {
    /// Options with a given k and default tunables
    pub fn with_k(k: usize) -> Self {
        Self {
            k,
            ..Self::default()
        }
    }

    /// Pin the sampler seed
    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// One input text placed in a cluster
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClusterMember {
    /// Position in the input list
    pub index: usize,
    /// The text
    pub text: String,
}

/// A group of similar texts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextCluster {
    /// Sequential id among the returned clusters
    pub id: usize,
    /// Display label, `cluster-<id>`
    pub label: String,
    /// Members in input order
    pub members: Vec<ClusterMember>,
    /// Number of members
    pub size: usize,
    /// Member most similar to the final center
    pub representative: Option<ClusterMember>,
    /// Similarity of the representative to the center
    pub cohesion: f32,
}

impl TextCluster {
    /// Build a cluster, deriving label and size
    pub fn new(
        id: usize,
        members: Vec<ClusterMember>,
        representative: Option<ClusterMember>,
        cohesion: f32,
    ) -> Self {
        Self {
            id,
            label: format!("cluster-{id}"),
            size: members.len(),
            members,
            representative,
            cohesion,
        }
    }

    /// Whether the input text at `index` belongs to this cluster
    pub fn contains(&self, index: usize) -> bool {
        self.members.iter().any(|m| m.index == index)
    }
}

/// Partition of a list of texts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClusterAssignment {
    /// Non-empty clusters (one possibly-empty cluster when fewer than two texts were given)
    pub clusters: Vec<TextCluster>,
    /// k as requested by the caller
    pub requested_k: usize,
    /// k actually used after clamping
    pub effective_k: usize,
    /// Relocation rounds performed
    pub iterations: usize,
    /// Whether the loop stopped on the convergence test
    pub converged: bool,
}

impl ClusterAssignment {
    /// Total members across clusters
    pub fn total_members(&self) -> usize {
        self.clusters.iter().map(|c| c.size).sum()
    }

    /// Cluster holding the input text at `index`
    pub fn cluster_of(&self, index: usize) -> Option<&TextCluster> {
        self.clusters.iter().find(|c| c.contains(index))
    }
}
