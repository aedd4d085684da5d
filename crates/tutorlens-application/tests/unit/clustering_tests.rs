//! Tests for the similarity k-means engine

use rand::SeedableRng;
use rand::rngs::StdRng;
use tutorlens_application::clustering::{cluster_embeddings, rng_for};
use tutorlens_domain::ClusteringOptions;

fn texts(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("text {i}")).collect()
}

#[test]
fn test_empty_input_single_empty_cluster() {
    let mut rng = StdRng::seed_from_u64(1);
    let assignment = cluster_embeddings(&[], &[], &ClusteringOptions::with_k(3), &mut rng);

    assert_eq!(assignment.clusters.len(), 1);
    assert_eq!(assignment.total_members(), 0);
    assert!(assignment.clusters[0].representative.is_none());
    assert_eq!(assignment.effective_k, 1);
}

#[test]
fn test_single_text_single_cluster() {
    let mut rng = StdRng::seed_from_u64(1);
    let assignment = cluster_embeddings(
        &texts(1),
        &[vec![1.0, 0.0]],
        &ClusteringOptions::with_k(5),
        &mut rng,
    );

    assert_eq!(assignment.clusters.len(), 1);
    assert_eq!(assignment.clusters[0].size, 1);
    assert_eq!(assignment.clusters[0].label, "cluster-0");
    assert_eq!(
        assignment.clusters[0].representative.as_ref().map(|m| m.index),
        Some(0)
    );
}

#[test]
fn test_k_clamped_to_distinct_vectors() {
    let mut rng = StdRng::seed_from_u64(2);
    let embeddings = vec![vec![1.0, 0.0]; 4];
    let assignment =
        cluster_embeddings(&texts(4), &embeddings, &ClusteringOptions::with_k(3), &mut rng);

    assert_eq!(assignment.requested_k, 3);
    assert_eq!(assignment.effective_k, 1);
    assert_eq!(assignment.clusters.len(), 1);
    assert_eq!(assignment.clusters[0].size, 4);
}

#[test]
fn test_zero_k_treated_as_one() {
    let mut rng = StdRng::seed_from_u64(3);
    let embeddings = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
    let assignment =
        cluster_embeddings(&texts(2), &embeddings, &ClusteringOptions::with_k(0), &mut rng);

    assert_eq!(assignment.effective_k, 1);
    assert_eq!(assignment.total_members(), 2);
}

#[test]
fn test_orthogonal_groups_separate() {
    let mut rng = StdRng::seed_from_u64(4);
    let embeddings = vec![
        vec![1.0, 0.0, 0.0],
        vec![0.0, 0.0, 1.0],
        vec![1.0, 0.0, 0.0],
        vec![0.0, 0.0, 1.0],
    ];
    let assignment =
        cluster_embeddings(&texts(4), &embeddings, &ClusteringOptions::with_k(2), &mut rng);

    assert_eq!(assignment.clusters.len(), 2);
    let first = assignment.cluster_of(0).unwrap().id;
    assert_eq!(assignment.cluster_of(2).unwrap().id, first);
    let second = assignment.cluster_of(1).unwrap().id;
    assert_eq!(assignment.cluster_of(3).unwrap().id, second);
    assert_ne!(first, second);
    assert!(assignment.converged);
}

#[test]
fn test_members_always_partition_input() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let n = 2 + (seed as usize % 9);
        let embeddings: Vec<Vec<f32>> = (0..n)
            .map(|i| vec![(i % 3) as f32, (i % 5) as f32, 1.0])
            .collect();
        let k = 1 + (seed as usize % 5);
        let assignment =
            cluster_embeddings(&texts(n), &embeddings, &ClusteringOptions::with_k(k), &mut rng);

        assert_eq!(assignment.total_members(), n, "seed {seed}");
        assert!(assignment.clusters.len() <= k.min(n));
        assert!(assignment.clusters.iter().all(|c| c.size > 0));
        for index in 0..n {
            let holders = assignment.clusters.iter().filter(|c| c.contains(index)).count();
            assert_eq!(holders, 1, "text {index} with seed {seed}");
        }
        assert!(assignment.iterations <= 10);
    }
}

#[test]
fn test_missing_and_ragged_embeddings() {
    let mut rng = StdRng::seed_from_u64(5);
    let embeddings = vec![vec![1.0], vec![0.0, 1.0, 0.0]];
    let assignment =
        cluster_embeddings(&texts(3), &embeddings, &ClusteringOptions::with_k(3), &mut rng);

    assert_eq!(assignment.total_members(), 3);
    assert_eq!(assignment.effective_k, 3);
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let embeddings: Vec<Vec<f32>> = (0..12)
        .map(|i| vec![(i as f32).sin(), (i as f32).cos(), (i % 4) as f32])
        .collect();
    let options = ClusteringOptions::with_k(3).seeded(42);

    let first = cluster_embeddings(&texts(12), &embeddings, &options, &mut rng_for(&options));
    let second = cluster_embeddings(&texts(12), &embeddings, &options, &mut rng_for(&options));

    assert_eq!(first, second);
}

#[test]
fn test_representative_is_most_central_member() {
    let mut rng = StdRng::seed_from_u64(6);
    let embeddings = vec![vec![1.0, 0.2], vec![1.0, 0.0], vec![1.0, -0.2]];
    let assignment =
        cluster_embeddings(&texts(3), &embeddings, &ClusteringOptions::with_k(1), &mut rng);

    let cluster = &assignment.clusters[0];
    assert_eq!(cluster.representative.as_ref().map(|m| m.index), Some(1));
    assert!((cluster.cohesion - 1.0).abs() < 1e-6);
}
