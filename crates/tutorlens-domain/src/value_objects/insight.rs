//! Per-response insight value objects

use serde::{Deserialize, Serialize};

/// How well the learner seems to follow
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UnderstandingLevel {
    /// Signals of understanding
    Good,
    /// Signals of confusion
    NeedsSupport,
    /// Neither
    Observing,
}

/// How richly the learner put their thinking into words
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VerbalizationLevel {
    /// Long answer with a stated reason
    Advanced,
    /// Medium answer with a tentative claim
    Intermediate,
    /// Anything else
    Basic,
}

/// Tone of the response
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Attitude {
    /// Interest or enthusiasm expressed
    Positive,
    /// Nothing notable
    Neutral,
}

/// Suggested next move for the tutor
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SupportAction {
    /// Keep asking open questions
    KeepAsking,
    /// Offer an extension task
    Extend,
    /// Revisit the basics
    ReinforceBasics,
    /// Connect the idea to everyday experience
    ConnectExperience,
    /// Check the key concept
    ConfirmConcept,
}

impl SupportAction {
    /// Teacher-facing description
    pub fn description(self) -> &'static str {
        match self {
            Self::KeepAsking => "Continue with open questions to draw out more thinking.",
            Self::Extend => "Offer a more challenging follow-up problem.",
            Self::ReinforceBasics => "Revisit the basic concepts with simpler questions.",
            Self::ConnectExperience => "Link the idea to an everyday experience.",
            Self::ConfirmConcept => "Check that the key concept of the unit is understood.",
        }
    }
}

/// Classification of one learner turn
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResponseInsight {
    /// Index among learner turns
    pub turn: usize,
    /// The learner's message
    pub message: String,
    /// Understanding signal
    pub understanding: UnderstandingLevel,
    /// Verbalization level
    pub verbalization: VerbalizationLevel,
    /// Mentions home or everyday life
    pub daily_life_connection: bool,
    /// Uses at least one topic keyword
    pub concept_understanding: bool,
    /// Tone
    pub attitude: Attitude,
    /// Recommended next move
    pub recommended_support: SupportAction,
}
