//! # TutorLens
//!
//! Pedagogical analytics for learner/tutor conversations: seven-dimension
//! scorecards, embedding-based grouping of learner texts, vocabulary
//! transition detection and per-response insights.
//!
//! ## Example
//!
//! ```rust
//! use tutorlens::{Topic, Transcript, Turn, analyze_transcript};
//!
//! let transcript = Transcript::new(vec![
//!     Turn::tutor("Why does the puddle shrink?"),
//!     Turn::learner("wait, I was wrong, actually..."),
//! ]);
//! let card = analyze_transcript(&transcript, &Topic::default());
//! assert_eq!(card.depth_of_thinking.score, 2.0);
//! ```
//!
//! ## Architecture
//!
//! - `domain` - transcripts, scorecards, lexicon, embedding port
//! - `application` - scorers, clustering engine, analyzers, services
//! - `providers` - local, OpenAI-compatible, Ollama and fallback embeddings
//! - `infrastructure` - configuration, logging, bootstrap

// Force-link tutorlens-providers so linkme registrations are included
extern crate tutorlens_providers;

pub mod cli;

/// Domain layer - core types
pub mod domain {
    pub use tutorlens_domain::*;
}

/// Application layer - analyzers and use cases
pub mod application {
    pub use tutorlens_application::*;
}

/// Embedding provider implementations
pub mod providers {
    pub use tutorlens_providers::*;
}

/// Infrastructure layer - config, logging and bootstrap
pub mod infrastructure {
    pub use tutorlens_infrastructure::*;
}

pub use domain::*;

pub use tutorlens_application::{
    analyze_responses, analyze_transcript, cluster_texts, detect_transitions,
};
