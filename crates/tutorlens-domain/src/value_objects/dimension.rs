//! Analytic dimensions and their interpretation bands
//!
//! Every dimension maps its composite score onto a fixed, ordered set of
//! bands. Thresholds are constants, not learned.

use serde::{Deserialize, Serialize};

/// One interpretation band: a score floor, a short label and a sentence for
/// the teacher
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    /// Short label (e.g. "basic")
    pub label: &'static str,
    /// Lowest score that falls into this band
    pub min_score: f64,
    /// Human-readable interpretation
    pub interpretation: &'static str,
}

const fn band(label: &'static str, min_score: f64, interpretation: &'static str) -> Band {
    Band {
        label,
        min_score,
        interpretation,
    }
}

const DEPTH_BANDS: &[Band] = &[
    band(
        "very deep",
        10.0,
        "Very deep thinking process; actively self-corrects and weighs other viewpoints.",
    ),
    band(
        "good",
        5.0,
        "Good deepening; moderate hesitation and correction build understanding step by step.",
    ),
    band("basic", 2.0, "Basic thinking process; concise but linear."),
    band(
        "shallow",
        0.0,
        "Shallow thinking process; little hesitation or correction, the learner may not notice uncertainty.",
    ),
];

const VOCABULARY_BANDS: &[Band] = &[
    band(
        "excellent",
        7.0,
        "Excellent; adopts the tutor's vocabulary and domain terms are increasing.",
    ),
    band("good", 3.0, "Good; partially adopts the tutor's vocabulary."),
    band("improving", 2.0, "Improving; domain vocabulary use is increasing."),
    band("stagnant", 0.0, "Stagnant; domain vocabulary is not being adopted."),
];

const ENGAGEMENT_BANDS: &[Band] = &[
    band(
        "high",
        10.0,
        "High engagement; many turns answered in full sentences.",
    ),
    band("moderate", 5.0, "Moderate engagement; a reasonable dialogue unfolded."),
    band(
        "low",
        0.0,
        "Low engagement; short dialogue, more open questions would help.",
    ),
];

const STRUCTURE_BANDS: &[Band] = &[
    band(
        "well structured",
        5.0,
        "Question/answer structure is solid; answers use several sentences and reasons.",
    ),
    band(
        "developing",
        2.0,
        "Question/answer structure is forming; answers are still short.",
    ),
    band("shallow", 0.0, "Dialogue lacks follow-up; mostly short answers."),
];

const EVIDENCE_BANDS: &[Band] = &[
    band(
        "well grounded",
        3.0,
        "Good; reasons are built from concrete experience.",
    ),
    band("emerging", 1.0, "Some evidence appears; concrete examples are still rare."),
    band(
        "absent",
        0.0,
        "Few references to experience; asking about concrete cases would help.",
    ),
];

const METACOGNITION_BANDS: &[Band] = &[
    band(
        "strong",
        3.0,
        "Excellent; aware of and verbalizes their own thinking process.",
    ),
    band("emerging", 1.0, "Moderate metacognition; some realizations are visible."),
    band(
        "absent",
        0.0,
        "No metacognitive expressions; noticing one's own thinking is a next step.",
    ),
];

const CLARITY_BANDS: &[Band] = &[
    band("clear", 7.0, "Thinking is clear and expressed logically."),
    band(
        "developing",
        3.0,
        "Basic expressive ability; emphasize more logical explanations.",
    ),
    band(
        "vague",
        0.0,
        "Expression is vague; encourage concrete examples and cause-effect links.",
    ),
];

/// The seven analytic dimensions, in declaration (and report) order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Self-correction, hesitation and alternative perspectives
    DepthOfThinking,
    /// Domain vocabulary adoption
    VocabularyAcquisition,
    /// Dialogue length and effort
    Engagement,
    /// Question/answer structure and reasoning connectives
    StructuralCrystallization,
    /// Use of experience and evidence
    EvidenceIntegration,
    /// Awareness of one's own thinking
    Metacognition,
    /// Clarity and consistency of expression
    ThoughtClarity,
}

impl Dimension {
    /// All dimensions in declaration order
    pub const ALL: [Dimension; 7] = [
        Dimension::DepthOfThinking,
        Dimension::VocabularyAcquisition,
        Dimension::Engagement,
        Dimension::StructuralCrystallization,
        Dimension::EvidenceIntegration,
        Dimension::Metacognition,
        Dimension::ThoughtClarity,
    ];

    /// Interpretation bands, highest first; the last band is the lowest
    pub fn bands(self) -> &'static [Band] {
        match self {
            Self::DepthOfThinking => DEPTH_BANDS,
            Self::VocabularyAcquisition => VOCABULARY_BANDS,
            Self::Engagement => ENGAGEMENT_BANDS,
            Self::StructuralCrystallization => STRUCTURE_BANDS,
            Self::EvidenceIntegration => EVIDENCE_BANDS,
            Self::Metacognition => METACOGNITION_BANDS,
            Self::ThoughtClarity => CLARITY_BANDS,
        }
    }

    /// Band for a composite score
    pub fn classify(self, score: f64) -> &'static Band {
        let bands = self.bands();
        bands
            .iter()
            .find(|b| score >= b.min_score)
            .unwrap_or(&bands[bands.len() - 1])
    }

    /// The lowest band of this dimension
    pub fn lowest_band(self) -> &'static Band {
        let bands = self.bands();
        &bands[bands.len() - 1]
    }

    /// Score at which the summary reports a strength
    pub fn good_threshold(self) -> f64 {
        match self {
            Self::DepthOfThinking | Self::StructuralCrystallization => 5.0,
            Self::VocabularyAcquisition | Self::EvidenceIntegration | Self::ThoughtClarity => 3.0,
            Self::Engagement => 10.0,
            Self::Metacognition => 1.0,
        }
    }

    /// Score below which the summary reports a concern, if the dimension has one
    pub fn needs_support_threshold(self) -> Option<f64> {
        match self {
            Self::DepthOfThinking | Self::VocabularyAcquisition => Some(2.0),
            Self::Engagement => Some(5.0),
            Self::ThoughtClarity => Some(1.0),
            Self::StructuralCrystallization | Self::EvidenceIntegration | Self::Metacognition => {
                None
            }
        }
    }

    /// Display name for reports
    pub fn display_name(self) -> &'static str {
        match self {
            Self::DepthOfThinking => "depth of thinking",
            Self::VocabularyAcquisition => "vocabulary acquisition",
            Self::Engagement => "engagement",
            Self::StructuralCrystallization => "structural crystallization",
            Self::EvidenceIntegration => "evidence integration",
            Self::Metacognition => "metacognition",
            Self::ThoughtClarity => "thought clarity",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
