//! Vocabulary transition value objects

use serde::{Deserialize, Serialize};

use super::topic::Topic;

/// An everyday term from the first half whose domain equivalent shows up later
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VocabularyTransition {
    /// Topic the mapping belongs to
    pub topic: Topic,
    /// Everyday term seen in the first half
    pub everyday_term: String,
    /// Mapped domain terms observed in the second half
    pub domain_terms: Vec<String>,
    /// Learner turns in the first half containing the everyday term
    pub first_half_count: usize,
    /// Learner turns in the second half containing any of `domain_terms`
    pub second_half_count: usize,
}

/// Everyday and domain term occurrences on one side of the midpoint
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TermUsage {
    /// Everyday-term presences
    pub everyday: usize,
    /// Domain-term presences
    pub domain: usize,
}

impl TermUsage {
    /// Share of domain terms among all mapped terms, 0 when none were used
    pub fn domain_ratio(&self) -> f64 {
        let total = self.everyday + self.domain;
        if total == 0 {
            0.0
        } else {
            self.domain as f64 / total as f64
        }
    }
}

/// Transitions plus topic-level progression
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransitionReport {
    /// Topic as requested
    pub topic: Topic,
    /// Topic key the mapping was resolved to
    pub resolved_topic: String,
    /// Detected transitions in mapping order
    pub transitions: Vec<VocabularyTransition>,
    /// Usage in the first half of learner turns
    pub before: TermUsage,
    /// Usage in the second half of learner turns
    pub after: TermUsage,
}

impl TransitionReport {
    /// Whether the learner moved towards domain vocabulary
    pub fn shows_progress(&self) -> bool {
        !self.transitions.is_empty() || self.after.domain_ratio() > self.before.domain_ratio()
    }
}
