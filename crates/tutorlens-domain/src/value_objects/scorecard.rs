//! Scorecard value objects
//!
//! A [`Scorecard`] holds one [`DimensionResult`] per analytic dimension plus
//! the synthesized summary. Each result carries typed details so callers can
//! drill into sub-scores without parsing strings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::dimension::Dimension;
use super::options::InfectionPolicy;
use super::topic::Topic;

/// Output of one dimension scorer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DimensionResult<D> {
    /// Which dimension produced this result
    pub dimension: Dimension,
    /// Composite score (never negative)
    pub score: f64,
    /// Short band label (e.g. "basic")
    pub band: String,
    /// Teacher-facing interpretation of the band
    pub interpretation: String,
    /// One-line description of the notable conversation features
    pub features: String,
    /// Dimension-specific sub-scores and samples
    pub details: D,
}

impl<D> DimensionResult<D> {
    /// Build a result, classifying the score into the dimension's band
    pub fn new(dimension: Dimension, score: f64, features: impl Into<String>, details: D) -> Self {
        let score = if score.is_finite() { score.max(0.0) } else { 0.0 };
        let band = dimension.classify(score);
        Self {
            dimension,
            score,
            band: band.label.to_string(),
            interpretation: band.interpretation.to_string(),
            features: features.into(),
            details,
        }
    }

    /// Whether the score sits in the dimension's lowest band
    pub fn is_lowest_band(&self) -> bool {
        self.band == self.dimension.lowest_band().label
    }
}

// ============================================================================
// Shared detail building blocks
// ============================================================================

/// A learner turn that matched a marker
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarkerInstance {
    /// Index among the role's turns (learner turns for learner markers)
    pub turn: usize,
    /// The matching message
    pub message: String,
    /// First marker phrase found in the message
    pub pattern: String,
}

/// Count of matching turns with a bounded sample of instances
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct MarkerTally {
    /// Number of matching turns
    pub count: usize,
    /// Up to `max_instances` matches, in order
    pub instances: Vec<MarkerInstance>,
}

// ============================================================================
// Depth of thinking
// ============================================================================

/// A hesitation and whether the tutor followed it with guidance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HesitationInstance {
    /// Index among learner turns
    pub turn: usize,
    /// The hesitant message
    pub message: String,
    /// First hesitation marker found
    pub pattern: String,
    /// The tutor turn immediately after, if the next turn was the tutor's
    pub tutor_followup: Option<String>,
    /// Whether that follow-up contains a guiding question
    pub guided: bool,
}

/// Hesitation counts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct HesitationTally {
    /// Number of hesitant learner turns
    pub count: usize,
    /// How many of them were followed by tutor guidance
    pub guided_count: usize,
    /// Bounded sample of instances
    pub instances: Vec<HesitationInstance>,
}

/// Depth-of-thinking sub-scores
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DepthDetails {
    /// Self-correction markers
    pub self_corrections: MarkerTally,
    /// Hesitation markers
    pub hesitations: HesitationTally,
    /// Alternative-perspective markers
    pub alternative_perspectives: MarkerTally,
}

// ============================================================================
// Vocabulary acquisition
// ============================================================================

/// Direction of domain-vocabulary use between transcript halves
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TransitionDirection {
    /// More domain terms in the second half
    Rising,
    /// Same or fewer domain terms in the second half
    #[default]
    StableOrDeclining,
}

/// A tutor-introduced term the learner went on to use
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdoptedTerm {
    /// The domain term
    pub term: String,
    /// Tutor turns using the term
    pub tutor_usage: usize,
    /// Learner turns using it inside the adoption window
    pub learner_usage: usize,
}

/// Vocabulary-acquisition sub-scores
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct VocabularyDetails {
    /// Adoption window used for the infection rate
    pub policy: InfectionPolicy,
    /// Domain-term presences in the first half of learner turns
    pub terms_before: BTreeMap<String, usize>,
    /// Domain-term presences in the second half of learner turns
    pub terms_after: BTreeMap<String, usize>,
    /// Domain-term presences in tutor turns
    pub tutor_terms: BTreeMap<String, usize>,
    /// Sum of `terms_before`
    pub before_total: usize,
    /// Sum of `terms_after`
    pub after_total: usize,
    /// Adopted distinct tutor terms ÷ distinct tutor terms, in [0, 1]
    pub infection_rate: f64,
    /// The adopted terms
    pub adopted_terms: Vec<AdoptedTerm>,
    /// Whether domain usage rose between halves
    pub direction: TransitionDirection,
}

// ============================================================================
// Engagement
// ============================================================================

/// How sustained the dialogue was
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Sustainability {
    /// Five or more learner turns
    Deep,
    /// Three or four learner turns
    Moderate,
    /// Fewer than three learner turns
    #[default]
    Brief,
}

/// Engagement sub-scores
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct EngagementDetails {
    /// Learner turn count
    pub turn_count: usize,
    /// Sustainability label derived from the turn count
    pub sustainability: Sustainability,
    /// Mean characters per non-empty learner turn
    pub average_length: f64,
    /// Longest learner turn in characters
    pub max_length: usize,
    /// Shortest non-empty learner turn in characters
    pub min_length: usize,
    /// Share of learner turns longer than the minimum word count
    pub sentence_ratio: f64,
    /// Tutor turns containing a question marker
    pub tutor_questions: usize,
}

// ============================================================================
// Structural crystallization
// ============================================================================

/// Question taxonomy, in first-match-wins order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    /// Asks for a reason
    Why,
    /// Asks for a thing or quantity
    What,
    /// Asks for a manner or process
    How,
    /// Asks for a time
    When,
    /// Anything else
    Other,
}

impl QuestionType {
    /// Taxonomy order used for first-match-wins classification
    pub const ORDER: [QuestionType; 4] = [Self::Why, Self::What, Self::How, Self::When];
}

/// Per-type question counts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct QuestionTypeCounts {
    /// Why-questions
    pub why: usize,
    /// What-questions
    pub what: usize,
    /// How-questions
    pub how: usize,
    /// When-questions
    pub when: usize,
    /// Unclassified questions
    pub other: usize,
}

impl QuestionTypeCounts {
    /// Count one question of the given type
    pub fn record(&mut self, kind: QuestionType) {
        match kind {
            QuestionType::Why => self.why += 1,
            QuestionType::What => self.what += 1,
            QuestionType::How => self.how += 1,
            QuestionType::When => self.when += 1,
            QuestionType::Other => self.other += 1,
        }
    }

    /// Total questions counted
    pub fn total(&self) -> usize {
        self.why + self.what + self.how + self.when + self.other
    }
}

/// Structural-crystallization sub-scores
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct StructureDetails {
    /// Tutor questions directly answered by the learner
    pub qa_exchanges: usize,
    /// Those questions by type
    pub question_types: QuestionTypeCounts,
    /// Learner turns with two or more sentences
    pub multi_sentence_responses: usize,
    /// Causal connective occurrences in learner turns
    pub causal_expressions: usize,
}

// ============================================================================
// Evidence integration
// ============================================================================

/// Evidence-integration sub-scores
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct EvidenceDetails {
    /// Learner turns referencing personal experience
    pub experience_mentions: MarkerTally,
    /// Tutor turns prompting for experience or recollection
    pub tutor_prompts: MarkerTally,
    /// Evidentiary keyword presences across learner turns
    pub keyword_usage: usize,
}

// ============================================================================
// Metacognition
// ============================================================================

/// A metacognitive phrase match
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetacognitiveMention {
    /// Index among learner turns
    pub turn: usize,
    /// The phrase found
    pub phrase: String,
    /// Its weight
    pub weight: f64,
}

/// Metacognition sub-scores
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MetacognitionDetails {
    /// At least one phrase matched
    pub has_metacognition: bool,
    /// Total matches (a turn may match several phrases)
    pub mention_count: usize,
    /// Bounded sample of matches
    pub mentions: Vec<MetacognitiveMention>,
}

// ============================================================================
// Thought clarity
// ============================================================================

/// Thought-clarity sub-scores
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ClarityDetails {
    /// Mean per-turn clarity points over non-blank learner turns
    pub average_clarity: f64,
    /// Distinct learner texts ÷ learner turns
    pub consistency_ratio: f64,
    /// Non-blank learner turns that were scored
    pub scored_turns: usize,
}

// ============================================================================
// Scorecard
// ============================================================================

/// Coarse position in the Socratic lesson flow
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LearningStage {
    /// Forming one's own prediction
    #[default]
    SelfThinking,
    /// Comparing and discussing ideas
    Sharing,
    /// Summarizing results and concepts
    Consolidation,
}

/// Whether a summary point praises or flags a dimension
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SummaryPointKind {
    /// Score reached the dimension's "good" threshold
    Strength,
    /// Score fell below the dimension's "needs support" threshold
    Concern,
}

/// One bullet of the teacher summary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryPoint {
    /// Strength or concern
    pub kind: SummaryPointKind,
    /// Dimension the point is about
    pub dimension: Dimension,
    /// Bullet text
    pub text: String,
}

/// Raw turn counts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RawCounts {
    /// Learner turns
    pub learner_turns: usize,
    /// Tutor turns
    pub tutor_turns: usize,
    /// Learner turns directly followed by a tutor turn
    pub exchanges: usize,
}

/// Multi-dimensional pedagogical report for one transcript
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scorecard {
    /// Topic the transcript was analyzed under
    pub topic: Topic,
    /// One-paragraph teacher summary
    pub summary: String,
    /// The bullets behind `summary`
    pub summary_points: Vec<SummaryPoint>,
    /// Depth of thinking
    pub depth_of_thinking: DimensionResult<DepthDetails>,
    /// Vocabulary acquisition
    pub vocabulary: DimensionResult<VocabularyDetails>,
    /// Engagement
    pub engagement: DimensionResult<EngagementDetails>,
    /// Structural crystallization
    pub structure: DimensionResult<StructureDetails>,
    /// Evidence integration
    pub evidence: DimensionResult<EvidenceDetails>,
    /// Metacognition
    pub metacognition: DimensionResult<MetacognitionDetails>,
    /// Thought clarity
    pub thought_clarity: DimensionResult<ClarityDetails>,
    /// Turn counts
    pub raw: RawCounts,
    /// Lesson stage implied by the number of exchanges
    pub learning_stage: LearningStage,
}

impl Scorecard {
    /// Composite scores in dimension order
    pub fn scores(&self) -> [(Dimension, f64); 7] {
        [
            (self.depth_of_thinking.dimension, self.depth_of_thinking.score),
            (self.vocabulary.dimension, self.vocabulary.score),
            (self.engagement.dimension, self.engagement.score),
            (self.structure.dimension, self.structure.score),
            (self.evidence.dimension, self.evidence.score),
            (self.metacognition.dimension, self.metacognition.score),
            (self.thought_clarity.dimension, self.thought_clarity.score),
        ]
    }

    /// Band labels in dimension order
    pub fn bands(&self) -> [(Dimension, &str); 7] {
        [
            (self.depth_of_thinking.dimension, self.depth_of_thinking.band.as_str()),
            (self.vocabulary.dimension, self.vocabulary.band.as_str()),
            (self.engagement.dimension, self.engagement.band.as_str()),
            (self.structure.dimension, self.structure.band.as_str()),
            (self.evidence.dimension, self.evidence.band.as_str()),
            (self.metacognition.dimension, self.metacognition.band.as_str()),
            (self.thought_clarity.dimension, self.thought_clarity.band.as_str()),
        ]
    }

    /// Whether the transcript contained any learner content
    pub fn has_data(&self) -> bool {
        self.summary != crate::constants::NO_DATA_SUMMARY
    }
}
