//! Lexical pattern library
//!
//! Fixed trigger phrase sets per analytic dimension and per-topic
//! vocabularies. The library is pure data: it is built once, never mutated,
//! and handed to the analyzers by reference.
//!
//! ```rust
//! use tutorlens_domain::lexicon::Lexicon;
//! use tutorlens_domain::value_objects::Topic;
//!
//! let lexicon = Lexicon::shared();
//! assert_eq!(lexicon.topic(&Topic::new("水のあたたまり方")).key, "heating-water");
//! assert_eq!(lexicon.topic(&Topic::new("unknown unit")).key, "default");
//! ```

pub mod patterns;
pub mod topics;

use std::collections::HashMap;
use std::sync::LazyLock;

pub use topics::TopicVocabulary;

use crate::value_objects::Topic;

static SHARED: LazyLock<Lexicon> = LazyLock::new(Lexicon::standard);

/// Phrase sets consulted by the analyzers
#[derive(Debug, Clone)]
pub struct Lexicon {
    pub self_correction: &'static [&'static str],
    pub hesitation: &'static [&'static str],
    pub alternative: &'static [&'static str],
    pub guidance: &'static [&'static str],
    pub causal: &'static [&'static str],
    /// Question taxonomy sets in first-match-wins order: why, what, how, when
    pub question_types: [&'static [&'static str]; 4],
    pub example: &'static [&'static str],
    pub abstract_terms: &'static [&'static str],
    pub experience: &'static [&'static str],
    pub evidence_prompt: &'static [&'static str],
    pub evidence_keywords: &'static [&'static str],
    pub metacognition: &'static [(&'static str, f64)],
    pub understanding_positive: &'static [&'static str],
    pub understanding_negative: &'static [&'static str],
    pub reasoning: &'static [&'static str],
    pub tentative: &'static [&'static str],
    pub daily_life: &'static [&'static str],
    pub positive_emotion: &'static [&'static str],
    default_topic: TopicVocabulary,
    topics: HashMap<String, TopicVocabulary>,
}

impl Lexicon {
    /// The built-in library, English and Japanese phrases
    pub fn standard() -> Self {
        let mut index = HashMap::new();
        for topic in topics::TOPICS {
            index.insert(topic.key.to_ascii_lowercase(), *topic);
            for alias in topic.aliases {
                index.insert((*alias).to_string(), *topic);
            }
        }

        Self {
            self_correction: patterns::SELF_CORRECTION,
            hesitation: patterns::HESITATION,
            alternative: patterns::ALTERNATIVE,
            guidance: patterns::GUIDANCE,
            causal: patterns::CAUSAL,
            question_types: [
                patterns::QUESTION_WHY,
                patterns::QUESTION_WHAT,
                patterns::QUESTION_HOW,
                patterns::QUESTION_WHEN,
            ],
            example: patterns::EXAMPLE,
            abstract_terms: patterns::ABSTRACT,
            experience: patterns::EXPERIENCE,
            evidence_prompt: patterns::EVIDENCE_PROMPT,
            evidence_keywords: patterns::EVIDENCE_KEYWORDS,
            metacognition: patterns::METACOGNITION,
            understanding_positive: patterns::UNDERSTANDING_POSITIVE,
            understanding_negative: patterns::UNDERSTANDING_NEGATIVE,
            reasoning: patterns::REASONING,
            tentative: patterns::TENTATIVE,
            daily_life: patterns::DAILY_LIFE,
            positive_emotion: patterns::POSITIVE_EMOTION,
            default_topic: topics::DEFAULT_TOPIC,
            topics: index,
        }
    }

    /// Process-wide instance of [`Lexicon::standard`]
    pub fn shared() -> &'static Lexicon {
        &SHARED
    }

    /// Vocabulary for a topic; unknown topics resolve to the default set
    pub fn topic(&self, topic: &Topic) -> &TopicVocabulary {
        let name = topic.as_str().trim();
        self.topics
            .get(name)
            .or_else(|| self.topics.get(&name.to_ascii_lowercase()))
            .unwrap_or(&self.default_topic)
    }

    /// Slugs of the known topics, sorted
    pub fn topic_keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<_> = topics::TOPICS.iter().map(|t| t.key).collect();
        keys.sort_unstable();
        keys
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::standard()
    }
}
