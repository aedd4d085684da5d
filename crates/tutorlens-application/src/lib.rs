//! Application Layer - TutorLens
//!
//! Implements the conversation analytics use cases on top of
//! `tutorlens-domain`.
//!
//! ## Architecture
//!
//! The application layer:
//! - Scores transcripts along seven pedagogical dimensions ([`scoring`])
//! - Groups learner texts by embedding similarity ([`clustering`])
//! - Runs the vocabulary transition and response insight analyzers ([`analysis`])
//! - Declares the provider registry that outer crates fill ([`ports::registry`])
//!
//! ## Entry Points
//!
//! ```rust
//! use tutorlens_application::analyze_transcript;
//! use tutorlens_domain::{Topic, Transcript, Turn};
//!
//! let transcript = Transcript::new(vec![
//!     Turn::tutor("What happens to the water?"),
//!     Turn::learner("wait, I was wrong, actually..."),
//! ]);
//! let card = analyze_transcript(&transcript, &Topic::default());
//! assert_eq!(card.depth_of_thinking.band, "basic");
//! ```

pub mod analysis;
pub mod clustering;
pub mod domain_services;
pub mod ports;
pub mod scoring;
pub mod use_cases;

pub use analysis::{analyze_responses, detect_transitions};
pub use domain_services::*;
pub use use_cases::*;

use tutorlens_domain::error::Result;
use tutorlens_domain::lexicon::Lexicon;
use tutorlens_domain::{
    AnalysisOptions, ClusterAssignment, ClusteringOptions, Scorecard, Topic, Transcript,
};

use crate::ports::providers::EmbeddingProvider;
use crate::scoring::{ScoringContext, build_scorecard};

/// Scorecard for one transcript with the shared lexicon and default options
pub fn analyze_transcript(transcript: &Transcript, topic: &Topic) -> Scorecard {
    let ctx = ScoringContext::new(transcript, topic, Lexicon::shared(), AnalysisOptions::default());
    build_scorecard(&ctx)
}

/// Embed `texts` with `provider` and partition them into at most `k` clusters
pub async fn cluster_texts(
    texts: &[String],
    k: usize,
    provider: &dyn EmbeddingProvider,
) -> Result<ClusterAssignment> {
    cluster_with_options(provider, texts, &ClusteringOptions::with_k(k)).await
}
