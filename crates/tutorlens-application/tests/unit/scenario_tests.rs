//! End-to-end behavior of the public entry points

use tutorlens_application::{analyze_transcript, cluster_texts};
use tutorlens_domain::constants::NO_DATA_SUMMARY;
use tutorlens_domain::similarity::cosine_similarity;
use tutorlens_domain::{LearningStage, Topic, Transcript, Turn};
use tutorlens_providers::{EmbeddingProvider, LocalEmbeddingProvider};

#[test]
fn test_no_learner_turns_yields_no_data_card() {
    let transcripts = [
        Transcript::default(),
        Transcript::new(vec![Turn::tutor(
            "Have you ever seen water boil? Why do you think it bubbles?",
        )]),
        Transcript::new(vec![Turn::tutor(
            "This flow is called convection. Why do you think it bubbles?",
        )]),
    ];

    for transcript in &transcripts {
        let card = analyze_transcript(transcript, &Topic::new("heating-water"));

        for (dimension, score) in card.scores() {
            assert_eq!(score, 0.0, "{dimension} should score zero");
        }
        assert!(card.depth_of_thinking.is_lowest_band());
        assert!(card.vocabulary.is_lowest_band());
        assert!(card.engagement.is_lowest_band());
        assert!(card.structure.is_lowest_band());
        assert!(card.evidence.is_lowest_band());
        assert!(card.metacognition.is_lowest_band());
        assert!(card.thought_clarity.is_lowest_band());
        assert_eq!(card.summary, NO_DATA_SUMMARY);
        assert!(card.summary_points.is_empty());
        assert!(!card.has_data());
        assert_eq!(card.learning_stage, LearningStage::SelfThinking);
        assert_eq!(card.engagement.details.tutor_questions, 0);
        assert!(card.vocabulary.details.tutor_terms.is_empty());
        assert_eq!(card.evidence.details.tutor_prompts.count, 0);
    }
}

#[test]
fn test_blank_learner_turns_count_as_no_data() {
    let transcript = Transcript::new(vec![Turn::tutor("What do you see?"), Turn::learner("   ")]);
    let card = analyze_transcript(&transcript, &Topic::default());

    assert_eq!(card.summary, NO_DATA_SUMMARY);
    assert_eq!(card.raw.learner_turns, 1);
}

#[test]
fn test_self_correction_without_hesitation() {
    let transcript = Transcript::new(vec![Turn::learner("wait, I was wrong, actually...")]);
    let card = analyze_transcript(&transcript, &Topic::default());
    let depth = &card.depth_of_thinking;

    assert_eq!(depth.details.self_corrections.count, 1);
    assert_eq!(depth.details.hesitations.count, 0);
    assert_eq!(depth.details.alternative_perspectives.count, 0);
    assert!((depth.score - 2.0).abs() < f64::EPSILON);
    assert_eq!(depth.band, "basic");
    assert_eq!(depth.details.self_corrections.instances[0].pattern, "i was wrong");
}

#[test]
fn test_tutor_term_adopted_after_midpoint() {
    let transcript = Transcript::new(vec![
        Turn::learner("The top gets warm first."),
        Turn::tutor("Good. This flow is called convection. Why do you think it happens?"),
        Turn::learner("Because of convection, the warm part moves up."),
    ]);
    let card = analyze_transcript(&transcript, &Topic::new("heating-water"));
    let vocabulary = &card.vocabulary.details;

    assert_eq!(vocabulary.tutor_terms.len(), 1);
    assert_eq!(vocabulary.tutor_terms.get("convection"), Some(&1));
    assert!((vocabulary.infection_rate - 1.0).abs() < f64::EPSILON);
    assert_eq!(vocabulary.adopted_terms[0].term, "convection");
    assert_eq!(vocabulary.adopted_terms[0].learner_usage, 1);
    // adoption (10.0) plus the growth bonus (2.0)
    assert!((card.vocabulary.score - 12.0).abs() < 1e-9);
    assert_eq!(card.vocabulary.band, "excellent");
}

#[tokio::test]
async fn test_identical_texts_cluster_together() {
    let provider = LocalEmbeddingProvider::new();
    let texts = vec!["a b a".to_string(), "a b a".to_string(), "x y z".to_string()];

    let assignment = cluster_texts(&texts, 2, &provider).await.unwrap();

    assert_eq!(assignment.clusters.len(), 2);
    assert_eq!(assignment.total_members(), 3);
    let first = assignment.cluster_of(0).unwrap();
    assert_eq!(first.id, assignment.cluster_of(1).unwrap().id);
    assert_ne!(first.id, assignment.cluster_of(2).unwrap().id);
    assert!((first.cohesion - 1.0).abs() < 1e-6);

    let a = provider.embed(&texts[0]).await.unwrap();
    let b = provider.embed(&texts[1]).await.unwrap();
    assert!((cosine_similarity(&a.vector, &b.vector) - 1.0).abs() < 1e-6);
}
