//! Tests for the class-level aggregation

use tutorlens_application::analyze_transcript;
use tutorlens_domain::{ClassOverview, Dimension, Scorecard, Topic, Transcript, Turn};

fn card(messages: &[&str]) -> Scorecard {
    let transcript: Transcript = messages.iter().map(|m| Turn::learner(*m)).collect();
    analyze_transcript(&transcript, &Topic::default())
}

#[test]
fn test_empty_class() {
    let overview = ClassOverview::from_scorecards(&[]);

    assert_eq!(overview.learner_count, 0);
    assert_eq!(overview.analyzed_count(), 0);
    assert!(overview.learners_without_data.is_empty());
    assert!(overview.dimensions.is_empty());
}

#[test]
fn test_learners_without_data_are_excluded() {
    let entries = vec![
        ("aiko".to_string(), card(&["wait, I was wrong, actually..."])),
        ("ben".to_string(), card(&["ok"])),
        ("chen".to_string(), card(&[])),
    ];
    let overview = ClassOverview::from_scorecards(&entries);

    assert_eq!(overview.learner_count, 3);
    assert_eq!(overview.analyzed_count(), 2);
    assert_eq!(overview.learners_without_data, vec!["chen".to_string()]);
    assert_eq!(overview.dimensions.len(), Dimension::ALL.len());

    let depth = &overview.dimensions[&Dimension::DepthOfThinking];
    assert!((depth.mean_score - 1.0).abs() < 1e-9);
    assert!((depth.max_score - 2.0).abs() < 1e-9);
    assert_eq!(depth.needs_support, vec!["ben".to_string()]);

    let engagement = &overview.dimensions[&Dimension::Engagement];
    assert_eq!(engagement.needs_support, vec!["ben".to_string()]);

    let structure = &overview.dimensions[&Dimension::StructuralCrystallization];
    assert!(structure.needs_support.is_empty());
}

#[test]
fn test_only_no_data_learners() {
    let entries = vec![("dana".to_string(), card(&["  "]))];
    let overview = ClassOverview::from_scorecards(&entries);

    assert_eq!(overview.learner_count, 1);
    assert_eq!(overview.learners_without_data, vec!["dana".to_string()]);
    assert!(overview.dimensions.is_empty());
}
