//! Tests for the vocabulary transition detector and response insights

use tutorlens_application::analysis::insights::analyze_response;
use tutorlens_application::{analyze_responses, detect_transitions};
use tutorlens_domain::lexicon::Lexicon;
use tutorlens_domain::{
    Attitude, SupportAction, Topic, Transcript, Turn, UnderstandingLevel, VerbalizationLevel,
};

fn learner_only(messages: &[&str]) -> Transcript {
    messages.iter().map(|m| Turn::learner(*m)).collect()
}

// ============================================================================
// Vocabulary transitions
// ============================================================================

#[test]
fn test_everyday_term_replaced_by_domain_term() {
    let transcript = learner_only(&["It feels hot at the bottom.", "The heat moves up."]);
    let report = detect_transitions(&transcript, &Topic::new("heating-water"));

    assert_eq!(report.resolved_topic, "heating-water");
    assert_eq!(report.transitions.len(), 1);
    let transition = &report.transitions[0];
    assert_eq!(transition.everyday_term, "hot");
    assert_eq!(transition.domain_terms, vec!["heat".to_string()]);
    assert_eq!(transition.first_half_count, 1);
    assert_eq!(transition.second_half_count, 1);
    assert_eq!(report.before.everyday, 1);
    assert_eq!(report.before.domain, 0);
    assert_eq!(report.after.everyday, 0);
    assert_eq!(report.after.domain, 1);
    assert!(report.shows_progress());
}

#[test]
fn test_transitions_with_unit_name_alias() {
    let transcript = learner_only(&["あついです", "温度が上がった"]);
    let report = detect_transitions(&transcript, &Topic::new("水のあたたまり方"));

    assert_eq!(report.resolved_topic, "heating-water");
    assert_eq!(report.transitions.len(), 1);
    assert_eq!(report.transitions[0].everyday_term, "あつい");
    assert_eq!(report.transitions[0].domain_terms, vec!["温度".to_string()]);
}

#[test]
fn test_single_turn_has_no_transitions() {
    let transcript = learner_only(&["It is hot, the heat rises."]);
    let report = detect_transitions(&transcript, &Topic::new("heating-water"));

    assert!(report.transitions.is_empty());
    assert_eq!(report.before.everyday + report.before.domain, 0);
}

#[test]
fn test_unknown_topic_uses_default_vocabulary() {
    let transcript = learner_only(&["Let's test it", "We ran an experiment"]);
    let report = detect_transitions(&transcript, &Topic::new("astronomy"));

    assert_eq!(report.resolved_topic, "default");
    assert_eq!(report.transitions.len(), 1);
    assert_eq!(report.transitions[0].everyday_term, "test");
}

// ============================================================================
// Response insights
// ============================================================================

fn insight(message: &str) -> tutorlens_domain::ResponseInsight {
    let lexicon = Lexicon::shared();
    analyze_response(lexicon, lexicon.topic(&Topic::new("heating-water")), 0, message)
}

#[test]
fn test_good_understanding_with_reasoning() {
    let result = insight("I see! It's because warm water is lighter so it goes up.");

    assert_eq!(result.understanding, UnderstandingLevel::Good);
    assert_eq!(result.verbalization, VerbalizationLevel::Advanced);
    assert!(!result.daily_life_connection);
    assert!(!result.concept_understanding);
    assert_eq!(result.attitude, Attitude::Neutral);
    assert_eq!(result.recommended_support, SupportAction::Extend);
}

#[test]
fn test_confusion_needs_basics() {
    let result = insight("I don't understand why");

    assert_eq!(result.understanding, UnderstandingLevel::NeedsSupport);
    assert_eq!(result.verbalization, VerbalizationLevel::Basic);
    assert_eq!(result.recommended_support, SupportAction::ReinforceBasics);
}

#[test]
fn test_daily_life_with_hedging() {
    let result = insight("At home the bath water is hot on top, I think");

    assert_eq!(result.understanding, UnderstandingLevel::Observing);
    assert_eq!(result.verbalization, VerbalizationLevel::Intermediate);
    assert!(result.daily_life_connection);
    assert_eq!(result.recommended_support, SupportAction::ConnectExperience);
}

#[test]
fn test_concept_keyword_and_positive_attitude() {
    let result = insight("It is convection, so fun!");

    assert!(result.concept_understanding);
    assert_eq!(result.attitude, Attitude::Positive);
    assert_eq!(result.recommended_support, SupportAction::ConfirmConcept);
}

#[test]
fn test_later_support_rules_override() {
    let result = insight("I get it, at home I saw convection");

    assert_eq!(result.understanding, UnderstandingLevel::Good);
    assert!(result.daily_life_connection);
    assert_eq!(result.recommended_support, SupportAction::ConfirmConcept);
    assert!(!result.recommended_support.description().is_empty());
}

#[test]
fn test_analyze_responses_skips_blank_turns() {
    let transcript = Transcript::new(vec![
        Turn::learner(""),
        Turn::tutor("What?"),
        Turn::learner("I see"),
    ]);
    let insights = analyze_responses(&transcript, &Topic::default());

    assert_eq!(insights.len(), 1);
    assert_eq!(insights[0].turn, 1);
    assert_eq!(insights[0].message, "I see");
    assert_eq!(insights[0].understanding, UnderstandingLevel::Good);
}
