//! Structural crystallization: question/answer shape and reasoning connectives

use tutorlens_domain::constants::{
    STRUCTURE_CAUSAL_WEIGHT, STRUCTURE_MULTI_SENTENCE_WEIGHT, STRUCTURE_QA_WEIGHT,
};
use tutorlens_domain::lexicon::Lexicon;
use tutorlens_domain::text::{Normalized, ends_with_question, terminator_runs};
use tutorlens_domain::{
    Dimension, DimensionResult, QuestionType, QuestionTypeCounts, StructureDetails,
};

use super::context::ScoringContext;

/// First taxonomy class whose phrases occur in the question
pub fn classify_question(lexicon: &Lexicon, question: &str) -> QuestionType {
    let text = Normalized::new(question);
    QuestionType::ORDER
        .into_iter()
        .zip(lexicon.question_types)
        .find(|(_, phrases)| text.contains_any(phrases))
        .map_or(QuestionType::Other, |(kind, _)| kind)
}

/// Score how well tutor questions get answered with structured reasoning
pub fn score_structure(ctx: &ScoringContext<'_>) -> DimensionResult<StructureDetails> {
    let mut qa_exchanges = 0;
    let mut question_types = QuestionTypeCounts::default();
    for pair in ctx.transcript.turns().windows(2) {
        let (asked, answered) = (&pair[0], &pair[1]);
        if asked.is_tutor() && answered.is_learner() && ends_with_question(&asked.content) {
            qa_exchanges += 1;
            question_types.record(classify_question(ctx.lexicon, &asked.content));
        }
    }

    let multi_sentence_responses = ctx
        .learner
        .iter()
        .filter(|t| terminator_runs(t.text) >= 2)
        .count();
    let causal_expressions: usize = ctx
        .learner
        .iter()
        .map(|t| t.normalized.count_all(ctx.lexicon.causal))
        .sum();

    let score = qa_exchanges as f64 * STRUCTURE_QA_WEIGHT
        + multi_sentence_responses as f64 * STRUCTURE_MULTI_SENTENCE_WEIGHT
        + causal_expressions as f64 * STRUCTURE_CAUSAL_WEIGHT;

    let features = format!(
        "{qa_exchanges} tutor questions answered; {multi_sentence_responses} multi-sentence answers; {causal_expressions} causal expressions."
    );

    DimensionResult::new(
        Dimension::StructuralCrystallization,
        score,
        features,
        StructureDetails {
            qa_exchanges,
            question_types,
            multi_sentence_responses,
            causal_expressions,
        },
    )
}
