//! Domain Services
//!
//! Interfaces for the engine's two entry points.
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`TranscriptAnalyzerInterface`] | Scorecards for one or many transcripts |
//! | [`ClusteringServiceInterface`] | Similarity grouping of learner texts |

/// Analysis and clustering service interfaces
pub mod analysis;

pub use analysis::{ClusteringServiceInterface, TranscriptAnalyzerInterface};
