//! Unit tests for Embedding value object

use tutorlens_domain::Embedding;

#[test]
fn test_embedding_creation() {
    let vector = vec![0.1, 0.2, 0.3, 0.4, 0.5];
    let embedding = Embedding::new(vector.clone(), "text-embedding-3-small");

    assert_eq!(embedding.vector, vector);
    assert_eq!(embedding.model, "text-embedding-3-small");
    assert_eq!(embedding.dimensions, 5);
}

#[test]
fn test_zero_embedding() {
    let embedding = Embedding::zeros(10, "local-tf");
    assert_eq!(embedding.dimensions, 10);
    assert!(embedding.is_zero());
    assert!(Embedding::new(vec![], "empty").is_zero());
}

#[test]
fn test_padding_extends_but_never_truncates() {
    let padded = Embedding::new(vec![1.0, 0.5], "local-tf").padded_to(4);
    assert_eq!(padded.vector, vec![1.0, 0.5, 0.0, 0.0]);
    assert_eq!(padded.dimensions, 4);

    let kept = Embedding::new(vec![1.0, 0.5, 0.2], "local-tf").padded_to(2);
    assert_eq!(kept.dimensions, 3);
}
