//! Domain Layer - TutorLens
//!
//! Core types and rules of the conversation analytics engine: transcripts,
//! scorecards and clustering results, the lexical pattern library, the
//! tokenizer and the vector similarity primitives.
//!
//! ## Architecture
//!
//! The domain layer:
//! - Defines transcript entities and result value objects
//! - Holds the immutable phrase library shared by all analyzers
//! - Declares the embedding port implemented by outer layers
//! - Depends on nothing but serialization and error derive crates
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | Transcript, turns and chat-log exchanges |
//! | [`value_objects`] | Scorecard, dimensions, embeddings, clusters |
//! | [`lexicon`] | Trigger phrases and topic vocabularies |
//! | [`text`] | Tokenizer and phrase matching |
//! | [`similarity`] | Cosine similarity and vector means |
//! | [`ports`] | Embedding provider interface |

/// Domain-wide constants
pub mod constants;
/// Transcript entities
pub mod entities;
/// Error type and result alias
pub mod error;
/// Lexical pattern library
pub mod lexicon;
/// Port interfaces
pub mod ports;
/// Vector similarity primitives
pub mod similarity;
/// Tokenizer and phrase matching
pub mod text;
/// Immutable value objects
pub mod value_objects;

pub use entities::*;
pub use error::{Error, Result};
pub use value_objects::*;
