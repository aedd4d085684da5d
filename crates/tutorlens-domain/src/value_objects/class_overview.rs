//! Class-level aggregation of scorecards

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::dimension::Dimension;
use super::scorecard::Scorecard;

/// Summary of one dimension across a class
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DimensionOverview {
    /// Mean score over learners with data
    pub mean_score: f64,
    /// Highest score seen
    pub max_score: f64,
    /// Learners below the dimension's "needs support" threshold
    pub needs_support: Vec<String>,
}

/// Per-dimension class statistics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ClassOverview {
    /// Learners given
    pub learner_count: usize,
    /// Learners whose transcript had no learner content
    pub learners_without_data: Vec<String>,
    /// Statistics per dimension; empty when no learner had data
    pub dimensions: BTreeMap<Dimension, DimensionOverview>,
}

impl ClassOverview {
    /// Aggregate `(learner_id, scorecard)` pairs
    ///
    /// Learners without data are listed but excluded from the means and the
    /// support lists.
    pub fn from_scorecards(entries: &[(String, Scorecard)]) -> Self {
        let mut overview = Self {
            learner_count: entries.len(),
            ..Self::default()
        };

        let mut analyzed = Vec::with_capacity(entries.len());
        for (learner, card) in entries {
            if card.has_data() {
                analyzed.push((learner, card));
            } else {
                overview.learners_without_data.push(learner.clone());
            }
        }
        if analyzed.is_empty() {
            return overview;
        }

        for (index, dimension) in Dimension::ALL.into_iter().enumerate() {
            let mut sum = 0.0;
            let mut max_score = 0.0_f64;
            let mut needs_support = Vec::new();
            for (learner, card) in &analyzed {
                let score = card.scores()[index].1;
                sum += score;
                max_score = max_score.max(score);
                if dimension
                    .needs_support_threshold()
                    .is_some_and(|threshold| score < threshold)
                {
                    needs_support.push((*learner).clone());
                }
            }
            overview.dimensions.insert(
                dimension,
                DimensionOverview {
                    mean_score: sum / analyzed.len() as f64,
                    max_score,
                    needs_support,
                },
            );
        }
        overview
    }

    /// Learners with data
    pub fn analyzed_count(&self) -> usize {
        self.learner_count - self.learners_without_data.len()
    }
}
