//! Unit tests for vector similarity

use tutorlens_domain::similarity::{cosine_similarity, mean_vector, pad_to};

#[test]
fn test_identical_vectors_have_similarity_one() {
    let v = [0.3, 0.4, 0.5];
    assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-6);
}

#[test]
fn test_orthogonal_vectors_have_similarity_zero() {
    assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
}

#[test]
fn test_similarity_is_symmetric() {
    let a = [1.0, 2.0, 0.5];
    let b = [0.2, 0.9];
    assert_eq!(cosine_similarity(&a, &b), cosine_similarity(&b, &a));
}

#[test]
fn test_zero_norm_gives_zero() {
    assert_eq!(cosine_similarity(&[], &[1.0]), 0.0);
    assert_eq!(cosine_similarity(&[0.0; 3], &[0.0; 3]), 0.0);
}

#[test]
fn test_pad_to_leaves_longer_vectors_alone() {
    assert_eq!(pad_to(&[1.0], 3), vec![1.0, 0.0, 0.0]);
    assert_eq!(pad_to(&[1.0, 2.0], 1), vec![1.0, 2.0]);
}

#[test]
fn test_mean_vector() {
    let a: &[f32] = &[1.0, 3.0];
    let b: &[f32] = &[3.0, 5.0];
    assert_eq!(mean_vector([a, b]), vec![2.0, 4.0]);
}
