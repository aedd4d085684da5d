//! Vocabulary acquisition: domain terms and their spread from tutor to learner

use std::collections::BTreeMap;

use tutorlens_domain::constants::{VOCABULARY_GROWTH_BONUS, VOCABULARY_INFECTION_WEIGHT};
use tutorlens_domain::{
    AdoptedTerm, Dimension, DimensionResult, InfectionPolicy, TransitionDirection,
    VocabularyDetails,
};

use super::context::{RoleTurn, ScoringContext};

/// Turns containing each domain term; terms never used are left out
fn term_presences(turns: &[RoleTurn<'_>], terms: &[&str]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for term in terms {
        let count = turns.iter().filter(|t| t.normalized.contains(term)).count();
        if count > 0 {
            counts.insert((*term).to_string(), count);
        }
    }
    counts
}

/// Learner turns that use `term` inside the adoption window
fn adoption_usage(ctx: &ScoringContext<'_>, term: &str, second_half: &[RoleTurn<'_>]) -> usize {
    match ctx.options.infection_policy {
        InfectionPolicy::SecondHalf => second_half
            .iter()
            .filter(|t| t.normalized.contains(term))
            .count(),
        InfectionPolicy::AfterIntroduction => {
            let Some(introduced_at) = ctx
                .tutor
                .iter()
                .find(|t| t.normalized.contains(term))
                .map(|t| t.position)
            else {
                return 0;
            };
            ctx.learner
                .iter()
                .filter(|t| t.position > introduced_at && t.normalized.contains(term))
                .count()
        }
    }
}

/// Score adoption of tutor-introduced domain vocabulary
pub fn score_vocabulary(ctx: &ScoringContext<'_>) -> DimensionResult<VocabularyDetails> {
    let terms = ctx.vocabulary.domain_terms;
    let (first_half, second_half) = ctx.learner_halves();

    let terms_before = term_presences(first_half, terms);
    let terms_after = term_presences(second_half, terms);
    // A tutor monologue introduces nothing the learner could adopt.
    let tutor_terms = if ctx.has_learner_content() {
        term_presences(&ctx.tutor, terms)
    } else {
        BTreeMap::new()
    };
    let before_total: usize = terms_before.values().sum();
    let after_total: usize = terms_after.values().sum();

    let adopted_terms: Vec<AdoptedTerm> = tutor_terms
        .iter()
        .filter_map(|(term, tutor_usage)| {
            let learner_usage = adoption_usage(ctx, term, second_half);
            (learner_usage > 0).then(|| AdoptedTerm {
                term: term.clone(),
                tutor_usage: *tutor_usage,
                learner_usage,
            })
        })
        .collect();

    let infection_rate = if tutor_terms.is_empty() {
        0.0
    } else {
        adopted_terms.len() as f64 / tutor_terms.len() as f64
    };
    let direction = if after_total > before_total {
        TransitionDirection::Rising
    } else {
        TransitionDirection::StableOrDeclining
    };

    let mut score = infection_rate * VOCABULARY_INFECTION_WEIGHT;
    if direction == TransitionDirection::Rising {
        score += VOCABULARY_GROWTH_BONUS;
    }

    let features = format!(
        "Domain terms used {before_total} times in the first half and {after_total} in the second; {}/{} tutor terms adopted.",
        adopted_terms.len(),
        tutor_terms.len()
    );

    DimensionResult::new(
        Dimension::VocabularyAcquisition,
        score,
        features,
        VocabularyDetails {
            policy: ctx.options.infection_policy,
            terms_before,
            terms_after,
            tutor_terms,
            before_total,
            after_total,
            infection_rate,
            adopted_terms,
            direction,
        },
    )
}
