//! Teacher-facing summary synthesized from the seven dimension scores

use tutorlens_domain::constants::{NO_DATA_SUMMARY, SUMMARY_HEADING};
use tutorlens_domain::{Dimension, SummaryPoint, SummaryPointKind};

const NOTHING_NOTABLE: &str = "no notable strengths or concerns.";

fn strength_text(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::DepthOfThinking => "deepens thinking through self-correction and other viewpoints",
        Dimension::VocabularyAcquisition => "picks up the tutor's domain vocabulary",
        Dimension::Engagement => "sustains an engaged dialogue in full sentences",
        Dimension::StructuralCrystallization => "answers questions with structured reasoning",
        Dimension::EvidenceIntegration => "grounds ideas in concrete experience",
        Dimension::Metacognition => "reflects on their own thinking",
        Dimension::ThoughtClarity => "expresses ideas clearly",
    }
}

fn concern_text(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::DepthOfThinking => "little hesitation or self-correction, probe uncertainty",
        Dimension::VocabularyAcquisition => "domain vocabulary is not yet being adopted",
        Dimension::Engagement => "short dialogue, ask more open questions",
        Dimension::ThoughtClarity => "expression is vague, ask for examples and reasons",
        Dimension::StructuralCrystallization
        | Dimension::EvidenceIntegration
        | Dimension::Metacognition => "needs support",
    }
}

/// Strength and concern points for a set of scores, strengths first
///
/// Both groups follow dimension order; the list is cut at `max_points`.
pub fn summary_points(scores: &[(Dimension, f64)], max_points: usize) -> Vec<SummaryPoint> {
    let strengths = scores
        .iter()
        .filter(|(dimension, score)| *score >= dimension.good_threshold())
        .map(|(dimension, score)| SummaryPoint {
            kind: SummaryPointKind::Strength,
            dimension: *dimension,
            text: format!("Strength: {} ({score:.1}).", strength_text(*dimension)),
        });

    let concerns = scores
        .iter()
        .filter(|(dimension, score)| {
            dimension
                .needs_support_threshold()
                .is_some_and(|threshold| *score < threshold)
        })
        .map(|(dimension, score)| SummaryPoint {
            kind: SummaryPointKind::Concern,
            dimension: *dimension,
            text: format!("Concern: {} ({score:.1}).", concern_text(*dimension)),
        });

    strengths.chain(concerns).take(max_points).collect()
}

/// Render the one-paragraph summary
pub fn render_summary(has_data: bool, points: &[SummaryPoint]) -> String {
    if !has_data {
        return NO_DATA_SUMMARY.to_string();
    }
    if points.is_empty() {
        return format!("{SUMMARY_HEADING}{NOTHING_NOTABLE}");
    }
    let body: Vec<&str> = points.iter().map(|p| p.text.as_str()).collect();
    format!("{SUMMARY_HEADING}{}", body.join(" "))
}
