//! Similarity & Clustering Engine
//!
//! Groups learner texts by embedding similarity. The engine is synchronous
//! and takes its randomness from the caller; embedding the texts is the
//! async part and lives in [`crate::use_cases::ClusteringService`].

pub mod kmeans;

pub use kmeans::cluster_embeddings;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tutorlens_domain::ClusteringOptions;

/// Random source for a clustering run: seeded when `options.seed` is set
pub fn rng_for(options: &ClusteringOptions) -> StdRng {
    options
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}
