//! Depth of thinking: self-correction, hesitation, alternative viewpoints

use tutorlens_domain::constants::{
    DEPTH_ALTERNATIVE_WEIGHT, DEPTH_HESITATION_WEIGHT, DEPTH_SELF_CORRECTION_WEIGHT,
};
use tutorlens_domain::text::Normalized;
use tutorlens_domain::{DepthDetails, Dimension, DimensionResult, HesitationInstance, HesitationTally};

use super::context::ScoringContext;
use super::tally_markers;

/// Score how much the learner wavers, corrects and considers alternatives
pub fn score_depth(ctx: &ScoringContext<'_>) -> DimensionResult<DepthDetails> {
    let lexicon = ctx.lexicon;
    let max_instances = ctx.options.max_instances;

    let self_corrections = tally_markers(&ctx.learner, lexicon.self_correction, max_instances);
    let alternative_perspectives = tally_markers(&ctx.learner, lexicon.alternative, max_instances);

    let mut hesitations = HesitationTally::default();
    for (index, turn) in ctx.learner.iter().enumerate() {
        let Some(pattern) = turn.normalized.first_match(lexicon.hesitation) else {
            continue;
        };
        let tutor_followup = ctx.tutor_reply_after(turn.position);
        let guided = tutor_followup
            .is_some_and(|reply| Normalized::new(reply).contains_any(lexicon.guidance));

        hesitations.count += 1;
        if guided {
            hesitations.guided_count += 1;
        }
        if hesitations.instances.len() < max_instances {
            hesitations.instances.push(HesitationInstance {
                turn: index,
                message: turn.text.to_string(),
                pattern: pattern.to_string(),
                tutor_followup: tutor_followup.map(str::to_string),
                guided,
            });
        }
    }

    let score = self_corrections.count as f64 * DEPTH_SELF_CORRECTION_WEIGHT
        + alternative_perspectives.count as f64 * DEPTH_ALTERNATIVE_WEIGHT
        + hesitations.count as f64 * DEPTH_HESITATION_WEIGHT;

    let features = format!(
        "{} self-corrections, {} alternative viewpoints, {} hesitations ({} guided by the tutor).",
        self_corrections.count,
        alternative_perspectives.count,
        hesitations.count,
        hesitations.guided_count
    );

    DimensionResult::new(
        Dimension::DepthOfThinking,
        score,
        features,
        DepthDetails {
            self_corrections,
            hesitations,
            alternative_perspectives,
        },
    )
}
