//! Shared, pre-normalized view of a transcript

use tutorlens_domain::lexicon::{Lexicon, TopicVocabulary};
use tutorlens_domain::text::Normalized;
use tutorlens_domain::{AnalysisOptions, Role, Topic, Transcript};

/// One turn of a single role, with its position in the full transcript
#[derive(Debug, Clone)]
pub struct RoleTurn<'a> {
    /// Index in [`Transcript::turns`]
    pub position: usize,
    /// Original text
    pub text: &'a str,
    /// Lower-cased text for phrase lookups
    pub normalized: Normalized,
}

impl RoleTurn<'_> {
    /// Whether the turn carries visible text
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Everything a scorer reads, prepared once per transcript
#[derive(Debug)]
pub struct ScoringContext<'a> {
    pub transcript: &'a Transcript,
    pub topic: &'a Topic,
    pub lexicon: &'a Lexicon,
    pub vocabulary: &'a TopicVocabulary,
    pub options: AnalysisOptions,
    /// Learner turns in order; scorers report indices into this list
    pub learner: Vec<RoleTurn<'a>>,
    /// Tutor turns in order
    pub tutor: Vec<RoleTurn<'a>>,
}

impl<'a> ScoringContext<'a> {
    pub fn new(
        transcript: &'a Transcript,
        topic: &'a Topic,
        lexicon: &'a Lexicon,
        options: AnalysisOptions,
    ) -> Self {
        let mut learner = Vec::new();
        let mut tutor = Vec::new();
        for (position, turn) in transcript.turns().iter().enumerate() {
            let role_turn = RoleTurn {
                position,
                text: &turn.content,
                normalized: Normalized::new(&turn.content),
            };
            match turn.role {
                Role::Learner => learner.push(role_turn),
                Role::Tutor => tutor.push(role_turn),
            }
        }

        Self {
            transcript,
            topic,
            lexicon,
            vocabulary: lexicon.topic(topic),
            options,
            learner,
            tutor,
        }
    }

    /// Learner turns before and after the midpoint `floor(n / 2)`
    pub fn learner_halves(&self) -> (&[RoleTurn<'a>], &[RoleTurn<'a>]) {
        self.learner.split_at(self.learner.len() / 2)
    }

    /// The turn right after transcript position `position`, if the tutor wrote it
    pub fn tutor_reply_after(&self, position: usize) -> Option<&'a str> {
        self.transcript
            .turns()
            .get(position + 1)
            .filter(|turn| turn.is_tutor())
            .map(|turn| turn.content.as_str())
    }

    /// Whether any learner turn has visible text
    pub fn has_learner_content(&self) -> bool {
        self.learner.iter().any(|turn| !turn.is_blank())
    }
}
