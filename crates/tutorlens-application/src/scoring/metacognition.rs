use tutorlens_domain::{Dimension, DimensionResult, MetacognitionDetails, MetacognitiveMention};

use super::context::ScoringContext;

/// Score verbalized awareness of one's own thinking
///
/// Every weighted phrase present in a turn counts, so one turn can
/// contribute several mentions.
pub fn score_metacognition(ctx: &ScoringContext<'_>) -> DimensionResult<MetacognitionDetails> {
    let mut score = 0.0;
    let mut mention_count = 0;
    let mut mentions = Vec::new();

    for (index, turn) in ctx.learner.iter().enumerate() {
        for (phrase, weight) in ctx.lexicon.metacognition {
            if !turn.normalized.contains(phrase) {
                continue;
            }
            score += weight;
            mention_count += 1;
            if mentions.len() < ctx.options.max_instances {
                mentions.push(MetacognitiveMention {
                    turn: index,
                    phrase: (*phrase).to_string(),
                    weight: *weight,
                });
            }
        }
    }

    let features = if mention_count == 0 {
        "No references to the learner's own thinking.".to_string()
    } else {
        format!("Learner put their own thinking into words {mention_count} times.")
    };

    DimensionResult::new(
        Dimension::Metacognition,
        score,
        features,
        MetacognitionDetails {
            has_metacognition: mention_count > 0,
            mention_count,
            mentions,
        },
    )
}
