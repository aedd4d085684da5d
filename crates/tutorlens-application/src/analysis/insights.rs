//! Response Insight Analyzer
//!
//! Classifies each learner turn on its own and suggests the tutor's next
//! move. Support rules are applied in a fixed order and later matches
//! override earlier ones: extend, reinforce basics, connect experience,
//! confirm concept.

use tutorlens_domain::lexicon::{Lexicon, TopicVocabulary};
use tutorlens_domain::text::{Normalized, char_len};
use tutorlens_domain::{
    Attitude, ResponseInsight, SupportAction, Topic, Transcript, UnderstandingLevel,
    VerbalizationLevel,
};

const ADVANCED_MIN_CHARS: usize = 30;
const INTERMEDIATE_MIN_CHARS: usize = 15;

/// Classify one learner message
pub fn analyze_response(
    lexicon: &Lexicon,
    vocabulary: &TopicVocabulary,
    turn: usize,
    message: &str,
) -> ResponseInsight {
    let text = Normalized::new(message);
    let length = char_len(message);
    let mut support = SupportAction::KeepAsking;

    let understanding = if text.contains_any(lexicon.understanding_positive) {
        support = SupportAction::Extend;
        UnderstandingLevel::Good
    } else if text.contains_any(lexicon.understanding_negative) {
        support = SupportAction::ReinforceBasics;
        UnderstandingLevel::NeedsSupport
    } else {
        UnderstandingLevel::Observing
    };

    let verbalization =
        if length > ADVANCED_MIN_CHARS && text.contains_any(lexicon.reasoning) {
            VerbalizationLevel::Advanced
        } else if length > INTERMEDIATE_MIN_CHARS && text.contains_any(lexicon.tentative) {
            VerbalizationLevel::Intermediate
        } else {
            VerbalizationLevel::Basic
        };

    let daily_life_connection = text.contains_any(lexicon.daily_life);
    if daily_life_connection {
        support = SupportAction::ConnectExperience;
    }
    let concept_understanding = text.contains_any(vocabulary.concept_keywords);
    if concept_understanding {
        support = SupportAction::ConfirmConcept;
    }

    let attitude = if text.contains_any(lexicon.positive_emotion) {
        Attitude::Positive
    } else {
        Attitude::Neutral
    };

    ResponseInsight {
        turn,
        message: message.to_string(),
        understanding,
        verbalization,
        daily_life_connection,
        concept_understanding,
        attitude,
        recommended_support: support,
    }
}

/// Classify every non-blank learner turn; `turn` indexes learner turns
pub fn analyze_responses(transcript: &Transcript, topic: &Topic) -> Vec<ResponseInsight> {
    let lexicon = Lexicon::shared();
    let vocabulary = lexicon.topic(topic);
    transcript
        .learner_messages()
        .into_iter()
        .enumerate()
        .filter(|(_, message)| !message.trim().is_empty())
        .map(|(turn, message)| analyze_response(lexicon, vocabulary, turn, message))
        .collect()
}
