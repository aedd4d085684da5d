//! Vector similarity primitives
//!
//! Vectors of different lengths are compared as if the shorter one were
//! zero-padded to the longer length.

/// Cosine similarity of two vectors
///
/// Returns 0.0 when either vector has zero norm. Symmetric in its arguments.
///
/// ```rust
/// use tutorlens_domain::similarity::cosine_similarity;
///
/// assert!((cosine_similarity(&[1.0, 0.0], &[1.0]) - 1.0).abs() < 1e-6);
/// assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
/// ```
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// Copy of `vector` zero-padded to `len`
pub fn pad_to(vector: &[f32], len: usize) -> Vec<f32> {
    let mut padded = vector.to_vec();
    if padded.len() < len {
        padded.resize(len, 0.0);
    }
    padded
}

/// Element-wise mean of a set of vectors, padded to the longest
///
/// Returns an empty vector for an empty set.
pub fn mean_vector<'a, I>(vectors: I) -> Vec<f32>
where
    I: IntoIterator<Item = &'a [f32]>,
{
    let mut sum: Vec<f32> = Vec::new();
    let mut count = 0_u32;
    for vector in vectors {
        if sum.len() < vector.len() {
            sum.resize(vector.len(), 0.0);
        }
        for (acc, value) in sum.iter_mut().zip(vector) {
            *acc += value;
        }
        count += 1;
    }
    if count > 0 {
        let count = count as f32;
        for value in &mut sum {
            *value /= count;
        }
    }
    sum
}
