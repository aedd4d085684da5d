//! Evidence integration: experience references and evidentiary wording

use tutorlens_domain::constants::{
    EVIDENCE_EXPERIENCE_WEIGHT, EVIDENCE_KEYWORD_WEIGHT, EVIDENCE_PROMPT_WEIGHT,
};
use tutorlens_domain::{Dimension, DimensionResult, EvidenceDetails, MarkerTally};

use super::context::ScoringContext;
use super::tally_markers;

/// Score how the learner grounds ideas and how the tutor draws that out
pub fn score_evidence(ctx: &ScoringContext<'_>) -> DimensionResult<EvidenceDetails> {
    let max_instances = ctx.options.max_instances;
    let experience_mentions = tally_markers(&ctx.learner, ctx.lexicon.experience, max_instances);
    // Prompts with no learner content to answer them carry no evidence.
    let tutor_prompts = if ctx.has_learner_content() {
        tally_markers(&ctx.tutor, ctx.lexicon.evidence_prompt, max_instances)
    } else {
        MarkerTally::default()
    };
    let keyword_usage: usize = ctx
        .learner
        .iter()
        .map(|t| t.normalized.presences(ctx.lexicon.evidence_keywords))
        .sum();

    let score = experience_mentions.count as f64 * EVIDENCE_EXPERIENCE_WEIGHT
        + tutor_prompts.count as f64 * EVIDENCE_PROMPT_WEIGHT
        + keyword_usage as f64 * EVIDENCE_KEYWORD_WEIGHT;

    let features = format!(
        "Learner referred to experience {} times; tutor prompted for it {} times; {keyword_usage} evidentiary keywords.",
        experience_mentions.count, tutor_prompts.count
    );

    DimensionResult::new(
        Dimension::EvidenceIntegration,
        score,
        features,
        EvidenceDetails {
            experience_mentions,
            tutor_prompts,
            keyword_usage,
        },
    )
}
