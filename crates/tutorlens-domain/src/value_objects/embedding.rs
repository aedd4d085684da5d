//! Semantic Embedding Value Objects
//!
//! Value objects representing text embeddings used to group learner
//! responses by similarity.

use serde::{Deserialize, Serialize};

/// Value Object: Text Embedding
///
/// A numeric vector standing for one text. Vector length depends on the
/// provider that produced it; two vectors of different lengths are compared
/// after zero-padding the shorter one (see [`crate::similarity`]).
///
/// ## Example
///
/// ```rust
/// use tutorlens_domain::value_objects::Embedding;
///
/// let embedding = Embedding::new(vec![1.0, 0.5, 0.0], "local-tf");
/// assert_eq!(embedding.dimensions, 3);
/// assert!(!embedding.is_zero());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embedding {
    /// The embedding vector values
    pub vector: Vec<f32>,
    /// Name of the model that generated this embedding
    pub model: String,
    /// Dimensionality of the embedding vector
    pub dimensions: usize,
}

impl Embedding {
    /// Wrap a vector, deriving the dimensionality from its length
    pub fn new(vector: Vec<f32>, model: impl Into<String>) -> Self {
        let dimensions = vector.len();
        Self {
            vector,
            model: model.into(),
            dimensions,
        }
    }

    /// All-zero embedding of the given dimensionality
    pub fn zeros(dimensions: usize, model: impl Into<String>) -> Self {
        Self::new(vec![0.0; dimensions], model)
    }

    /// Whether every component is zero
    pub fn is_zero(&self) -> bool {
        self.vector.iter().all(|v| *v == 0.0)
    }

    /// Zero-pad the vector up to `dimensions`; longer vectors are kept as is
    pub fn padded_to(mut self, dimensions: usize) -> Self {
        if self.vector.len() < dimensions {
            self.vector.resize(dimensions, 0.0);
            self.dimensions = dimensions;
        }
        self
    }
}
