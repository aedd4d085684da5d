//! Analysis option value objects

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_INSTANCE_SAMPLES, MAX_SUMMARY_POINTS};

/// Which learner turns count as adopting a tutor-introduced term
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum InfectionPolicy {
    /// Any learner turn after the tutor's first use of the term
    #[default]
    AfterIntroduction,
    /// Any learner turn in the second half of the learner turns
    SecondHalf,
}

/// Tunables shared by the scorers and the aggregator
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AnalysisOptions {
    /// Adoption window for the vocabulary infection rate
    pub infection_policy: InfectionPolicy,
    /// Matched-instance samples kept per marker class
    pub max_instances: usize,
    /// Bullet points kept in the summary
    pub max_summary_points: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            infection_policy: InfectionPolicy::default(),
            max_instances: MAX_INSTANCE_SAMPLES,
            max_summary_points: MAX_SUMMARY_POINTS,
        }
    }
}

impl AnalysisOptions {
    /// Use a different infection policy
    pub fn with_infection_policy(mut self, policy: InfectionPolicy) -> Self {
        self.infection_policy = policy;
        self
    }
}
