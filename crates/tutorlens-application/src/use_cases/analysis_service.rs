//! Transcript Analysis Use Case
//!
//! Builds a scoring context per transcript and runs the seven scorers.
//! Batches fan out over the rayon pool; each transcript is scored
//! sequentially.

use std::sync::Arc;

use rayon::prelude::*;
use tracing::debug;
use tutorlens_domain::lexicon::Lexicon;
use tutorlens_domain::{AnalysisOptions, Scorecard, Topic, Transcript};

use crate::domain_services::TranscriptAnalyzerInterface;
use crate::scoring::{ScoringContext, build_scorecard};

/// Scorecard service over a lexicon and fixed options
#[derive(Debug, Clone)]
pub struct TranscriptAnalysisService {
    lexicon: Arc<Lexicon>,
    options: AnalysisOptions,
}

impl TranscriptAnalysisService {
    /// Service with the built-in lexicon
    pub fn new(options: AnalysisOptions) -> Self {
        Self::with_lexicon(Arc::new(Lexicon::standard()), options)
    }

    /// Service with a caller-provided lexicon
    pub fn with_lexicon(lexicon: Arc<Lexicon>, options: AnalysisOptions) -> Self {
        Self { lexicon, options }
    }

    /// Options every analysis uses
    pub fn options(&self) -> AnalysisOptions {
        self.options
    }
}

impl Default for TranscriptAnalysisService {
    fn default() -> Self {
        Self::new(AnalysisOptions::default())
    }
}

impl TranscriptAnalyzerInterface for TranscriptAnalysisService {
    fn analyze(&self, transcript: &Transcript, topic: &Topic) -> Scorecard {
        let ctx = ScoringContext::new(transcript, topic, &self.lexicon, self.options);
        let card = build_scorecard(&ctx);
        debug!(
            topic = %topic,
            resolved_topic = ctx.vocabulary.key,
            learner_turns = card.raw.learner_turns,
            tutor_turns = card.raw.tutor_turns,
            depth = card.depth_of_thinking.score,
            vocabulary = card.vocabulary.score,
            engagement = card.engagement.score,
            "Analyzed transcript"
        );
        card
    }

    fn analyze_batch(&self, batch: &[(Transcript, Topic)]) -> Vec<Scorecard> {
        debug!(transcripts = batch.len(), "Analyzing transcript batch");
        batch
            .par_iter()
            .map(|(transcript, topic)| self.analyze(transcript, topic))
            .collect()
    }
}
