use async_trait::async_trait;
use tutorlens_domain::error::Result;
use tutorlens_domain::{ClusterAssignment, Scorecard, Topic, Transcript};

// ============================================================================
// Transcript Analyzer Interface
// ============================================================================

/// Pedagogical scoring of transcripts
///
/// Analysis is total: degenerate input yields a minimal scorecard, never an
/// error.
pub trait TranscriptAnalyzerInterface: Send + Sync {
    /// Scorecard for one transcript
    fn analyze(&self, transcript: &Transcript, topic: &Topic) -> Scorecard;

    /// Scorecards for many transcripts, in input order
    fn analyze_batch(&self, batch: &[(Transcript, Topic)]) -> Vec<Scorecard> {
        batch
            .iter()
            .map(|(transcript, topic)| self.analyze(transcript, topic))
            .collect()
    }
}

// ============================================================================
// Clustering Service Interface
// ============================================================================

/// Grouping of learner texts by embedding similarity
#[async_trait]
pub trait ClusteringServiceInterface: Send + Sync {
    /// Partition `texts` into at most `k` clusters
    ///
    /// Only a raw embedding provider error can surface here.
    async fn cluster(&self, texts: &[String], k: usize) -> Result<ClusterAssignment>;
}
