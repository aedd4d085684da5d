//! Similarity-maximizing k-means
//!
//! Texts are assigned to the center they are most similar to (cosine), not
//! the nearest in Euclidean distance. The loop is capped, so it always ends.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::index;
use tracing::debug;
use tutorlens_domain::similarity::{cosine_similarity, mean_vector, pad_to};
use tutorlens_domain::{ClusterAssignment, ClusterMember, ClusteringOptions, TextCluster};

/// Indices of the first occurrence of every distinct vector
fn distinct_indices(vectors: &[Vec<f32>]) -> Vec<usize> {
    let mut seen = HashSet::new();
    vectors
        .iter()
        .enumerate()
        .filter(|(_, v)| seen.insert(v.iter().map(|x| x.to_bits()).collect::<Vec<u32>>()))
        .map(|(i, _)| i)
        .collect()
}

/// Index of the most similar center; ties go to the lowest index
fn best_center(vector: &[f32], centers: &[Vec<f32>]) -> usize {
    let mut best = 0;
    let mut best_similarity = f32::NEG_INFINITY;
    for (index, center) in centers.iter().enumerate() {
        let similarity = cosine_similarity(vector, center);
        if similarity > best_similarity {
            best = index;
            best_similarity = similarity;
        }
    }
    best
}

fn member(texts: &[String], index: usize) -> ClusterMember {
    ClusterMember {
        index,
        text: texts[index].clone(),
    }
}

/// Single cluster holding every input, used below two texts
fn single_cluster(texts: &[String], requested_k: usize) -> ClusterAssignment {
    let members: Vec<ClusterMember> = (0..texts.len()).map(|i| member(texts, i)).collect();
    let representative = members.first().cloned();
    let cohesion = if representative.is_some() { 1.0 } else { 0.0 };
    ClusterAssignment {
        clusters: vec![TextCluster::new(0, members, representative, cohesion)],
        requested_k,
        effective_k: 1,
        iterations: 0,
        converged: true,
    }
}

/// Partition `texts` by the similarity of their `embeddings`
///
/// `embeddings[i]` belongs to `texts[i]`; a missing embedding is treated as
/// a zero vector. Fewer than two texts yield one cluster with all input.
/// Otherwise the effective k is `min(max(k, 1), n, distinct vectors)` and
/// centers start at distinct vectors drawn from `rng`.
pub fn cluster_embeddings<R>(
    texts: &[String],
    embeddings: &[Vec<f32>],
    options: &ClusteringOptions,
    rng: &mut R,
) -> ClusterAssignment
where
    R: Rng + ?Sized,
{
    let n = texts.len();
    if n < 2 {
        return single_cluster(texts, options.k);
    }

    let width = embeddings.iter().map(Vec::len).max().unwrap_or(0);
    let vectors: Vec<Vec<f32>> = (0..n)
        .map(|i| pad_to(embeddings.get(i).map_or(&[][..], Vec::as_slice), width))
        .collect();

    let distinct = distinct_indices(&vectors);
    let k = options.k.max(1).min(n).min(distinct.len());
    let mut centers: Vec<Vec<f32>> = index::sample(rng, distinct.len(), k)
        .into_iter()
        .map(|i| vectors[distinct[i]].clone())
        .collect();

    let mut assignment = vec![0; n];
    let mut iterations = 0;
    let mut converged = false;
    while iterations < options.max_iterations.max(1) {
        for (slot, vector) in assignment.iter_mut().zip(&vectors) {
            *slot = best_center(vector, &centers);
        }

        let next: Vec<Vec<f32>> = (0..k)
            .map(|cluster| {
                let members: Vec<&[f32]> = assignment
                    .iter()
                    .zip(&vectors)
                    .filter(|(slot, _)| **slot == cluster)
                    .map(|(_, v)| v.as_slice())
                    .collect();
                if members.is_empty() {
                    vectors[rng.random_range(0..n)].clone()
                } else {
                    mean_vector(members)
                }
            })
            .collect();

        iterations += 1;
        converged = next
            .iter()
            .zip(&centers)
            .all(|(new, old)| cosine_similarity(new, old) > options.convergence_threshold);
        centers = next;
        if converged {
            break;
        }
    }

    let mut clusters = Vec::with_capacity(k);
    for (cluster, center) in centers.iter().enumerate() {
        let indices: Vec<usize> = (0..n).filter(|i| assignment[*i] == cluster).collect();
        if indices.is_empty() {
            continue;
        }
        let mut representative = indices[0];
        let mut cohesion = f32::NEG_INFINITY;
        for &i in &indices {
            let similarity = cosine_similarity(&vectors[i], center);
            if similarity > cohesion {
                representative = i;
                cohesion = similarity;
            }
        }
        let members = indices.iter().map(|i| member(texts, *i)).collect();
        clusters.push(TextCluster::new(
            clusters.len(),
            members,
            Some(member(texts, representative)),
            cohesion,
        ));
    }

    debug!(
        texts = n,
        requested_k = options.k,
        effective_k = k,
        clusters = clusters.len(),
        iterations,
        converged,
        "Clustered texts"
    );

    ClusterAssignment {
        clusters,
        requested_k: options.k,
        effective_k: k,
        iterations,
        converged,
    }
}
