//! Dimension Scorers and Scorecard Aggregation
//!
//! Seven independent, pure scorers read a shared [`ScoringContext`] and each
//! return a [`DimensionResult`]. [`build_scorecard`] runs them and adds the
//! summary, raw counts and learning stage.
//!
//! | Scorer | Dimension |
//! |--------|-----------|
//! | [`score_depth`] | Depth of thinking |
//! | [`score_vocabulary`] | Vocabulary acquisition |
//! | [`score_engagement`] | Engagement |
//! | [`score_structure`] | Structural crystallization |
//! | [`score_evidence`] | Evidence integration |
//! | [`score_metacognition`] | Metacognition |
//! | [`score_clarity`] | Thought clarity |

pub mod clarity;
pub mod context;
pub mod depth;
pub mod engagement;
pub mod evidence;
pub mod metacognition;
pub mod stage;
pub mod structure;
pub mod summary;
pub mod vocabulary;

pub use clarity::score_clarity;
pub use context::{RoleTurn, ScoringContext};
pub use depth::score_depth;
pub use engagement::score_engagement;
pub use evidence::score_evidence;
pub use metacognition::score_metacognition;
pub use stage::learning_stage;
pub use structure::{classify_question, score_structure};
pub use summary::{render_summary, summary_points};
pub use vocabulary::score_vocabulary;

use tutorlens_domain::{MarkerInstance, MarkerTally, RawCounts, Scorecard};

/// Count turns matching any phrase, sampling the first `max_instances`
pub(crate) fn tally_markers(
    turns: &[RoleTurn<'_>],
    phrases: &[&str],
    max_instances: usize,
) -> MarkerTally {
    let mut tally = MarkerTally::default();
    for (index, turn) in turns.iter().enumerate() {
        if let Some(pattern) = turn.normalized.first_match(phrases) {
            tally.count += 1;
            if tally.instances.len() < max_instances {
                tally.instances.push(MarkerInstance {
                    turn: index,
                    message: turn.text.to_string(),
                    pattern: pattern.to_string(),
                });
            }
        }
    }
    tally
}

fn raw_counts(ctx: &ScoringContext<'_>) -> RawCounts {
    let exchanges = ctx
        .transcript
        .turns()
        .windows(2)
        .filter(|pair| pair[0].is_learner() && pair[1].is_tutor())
        .count();
    RawCounts {
        learner_turns: ctx.learner.len(),
        tutor_turns: ctx.tutor.len(),
        exchanges,
    }
}

/// Run all seven scorers and assemble the report
pub fn build_scorecard(ctx: &ScoringContext<'_>) -> Scorecard {
    let has_data = ctx.has_learner_content();

    let mut card = Scorecard {
        topic: ctx.topic.clone(),
        summary: String::new(),
        summary_points: Vec::new(),
        depth_of_thinking: score_depth(ctx),
        vocabulary: score_vocabulary(ctx),
        engagement: score_engagement(ctx),
        structure: score_structure(ctx),
        evidence: score_evidence(ctx),
        metacognition: score_metacognition(ctx),
        thought_clarity: score_clarity(ctx),
        raw: raw_counts(ctx),
        learning_stage: learning_stage(ctx.learner.len()),
    };

    if has_data {
        card.summary_points = summary_points(&card.scores(), ctx.options.max_summary_points);
    }
    card.summary = render_summary(has_data, &card.summary_points);
    card
}
