//! Engagement: how much and how fully the learner answers

use tutorlens_domain::constants::{
    ENGAGEMENT_CHARS_PER_POINT, ENGAGEMENT_LENGTH_CAP, ENGAGEMENT_MIN_WORDS,
    ENGAGEMENT_SENTENCE_WEIGHT, ENGAGEMENT_TURN_CAP, SUSTAINED_DEEP_TURNS,
    SUSTAINED_MODERATE_TURNS,
};
use tutorlens_domain::text::{char_len, has_question_marker, tokenize};
use tutorlens_domain::{Dimension, DimensionResult, EngagementDetails, Sustainability};

use super::context::ScoringContext;

fn sustainability(turns: usize) -> Sustainability {
    if turns >= SUSTAINED_DEEP_TURNS {
        Sustainability::Deep
    } else if turns >= SUSTAINED_MODERATE_TURNS {
        Sustainability::Moderate
    } else {
        Sustainability::Brief
    }
}

/// Score dialogue length and answer fullness
pub fn score_engagement(ctx: &ScoringContext<'_>) -> DimensionResult<EngagementDetails> {
    let turn_count = ctx.learner.len();
    let lengths: Vec<usize> = ctx
        .learner
        .iter()
        .filter(|t| !t.is_blank())
        .map(|t| char_len(t.text))
        .collect();

    let average_length = if lengths.is_empty() {
        0.0
    } else {
        lengths.iter().sum::<usize>() as f64 / lengths.len() as f64
    };
    let max_length = lengths.iter().copied().max().unwrap_or(0);
    let min_length = lengths.iter().copied().min().unwrap_or(0);

    let sentence_turns = ctx
        .learner
        .iter()
        .filter(|t| tokenize(t.text).len() > ENGAGEMENT_MIN_WORDS)
        .count();
    let sentence_ratio = if turn_count == 0 {
        0.0
    } else {
        sentence_turns as f64 / turn_count as f64
    };
    let tutor_questions = if ctx.has_learner_content() {
        ctx.tutor
            .iter()
            .filter(|t| has_question_marker(t.text))
            .count()
    } else {
        0
    };

    let score = (turn_count as f64).min(ENGAGEMENT_TURN_CAP)
        + (average_length / ENGAGEMENT_CHARS_PER_POINT).min(ENGAGEMENT_LENGTH_CAP)
        + sentence_ratio * ENGAGEMENT_SENTENCE_WEIGHT;

    let features = format!(
        "{turn_count} learner turns averaging {average_length:.0} characters; {:.0}% answered in sentences.",
        sentence_ratio * 100.0
    );

    DimensionResult::new(
        Dimension::Engagement,
        score,
        features,
        EngagementDetails {
            turn_count,
            sustainability: sustainability(turn_count),
            average_length,
            max_length,
            min_length,
            sentence_ratio,
            tutor_questions,
        },
    )
}
