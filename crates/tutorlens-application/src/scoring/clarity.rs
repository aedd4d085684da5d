//! Thought clarity: sentence structure, reasons, examples, consistency

use std::collections::HashSet;

use tutorlens_domain::constants::CLARITY_SCALE;
use tutorlens_domain::lexicon::Lexicon;
use tutorlens_domain::text::terminator_runs;
use tutorlens_domain::{ClarityDetails, Dimension, DimensionResult};

use super::context::{RoleTurn, ScoringContext};

/// Clarity points of one non-blank learner turn
fn turn_clarity(lexicon: &Lexicon, turn: &RoleTurn<'_>) -> f64 {
    let mut points = match terminator_runs(turn.text) {
        0 => 0.0,
        1 => 0.5,
        _ => 1.0,
    };
    if turn.normalized.contains_any(lexicon.causal) {
        points += 1.0;
    }
    if turn.normalized.contains_any(lexicon.example) {
        points += 1.0;
    }
    if turn.normalized.contains_any(lexicon.abstract_terms) {
        points += 0.5;
    }
    points
}

/// Score clarity and consistency of the learner's expression
pub fn score_clarity(ctx: &ScoringContext<'_>) -> DimensionResult<ClarityDetails> {
    let per_turn: Vec<f64> = ctx
        .learner
        .iter()
        .filter(|t| !t.is_blank())
        .map(|t| turn_clarity(ctx.lexicon, t))
        .collect();

    let average_clarity = if per_turn.is_empty() {
        0.0
    } else {
        per_turn.iter().sum::<f64>() / per_turn.len() as f64
    };

    let distinct: HashSet<&str> = ctx.learner.iter().map(|t| t.text).collect();
    let consistency_ratio = if ctx.learner.is_empty() {
        0.0
    } else {
        distinct.len() as f64 / ctx.learner.len() as f64
    };

    let score = average_clarity * consistency_ratio * CLARITY_SCALE;
    let features = format!(
        "Average clarity {average_clarity:.2}; {:.0}% of answers distinct.",
        consistency_ratio * 100.0
    );

    DimensionResult::new(
        Dimension::ThoughtClarity,
        score,
        features,
        ClarityDetails {
            average_clarity,
            consistency_ratio,
            scored_turns: per_turn.len(),
        },
    )
}
