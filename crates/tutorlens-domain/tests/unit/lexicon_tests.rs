//! Unit tests for the lexical pattern library

use tutorlens_domain::Topic;
use tutorlens_domain::lexicon::Lexicon;
use tutorlens_domain::text::Normalized;

#[test]
fn test_topic_resolution_by_slug_and_unit_name() {
    let lexicon = Lexicon::shared();
    assert_eq!(lexicon.topic(&Topic::new("heating-metal")).key, "heating-metal");
    assert_eq!(lexicon.topic(&Topic::new("Heating-Metal")).key, "heating-metal");
    assert_eq!(lexicon.topic(&Topic::new("金属のあたたまり方")).key, "heating-metal");
    assert_eq!(lexicon.topic(&Topic::new("空気のあたたまり方")).key, "heating-air");
    assert_eq!(lexicon.topic(&Topic::new("温度と体積")).key, "temperature-volume");
}

#[test]
fn test_unknown_topic_falls_back_to_default() {
    let lexicon = Lexicon::shared();
    let vocabulary = lexicon.topic(&Topic::new("photosynthesis"));
    assert_eq!(vocabulary.key, "default");
    assert!(vocabulary.domain_terms.contains(&"temperature"));
}

#[test]
fn test_topic_answers_to_aliases() {
    let lexicon = Lexicon::shared();
    let water = lexicon.topic(&Topic::new("heating-water"));
    assert!(water.answers_to("水のあたたまり方"));
    assert!(water.answers_to(" heating-water "));
    assert!(!water.answers_to("heating-air"));
}

#[test]
fn test_topic_keys_are_sorted() {
    assert_eq!(
        Lexicon::shared().topic_keys(),
        vec!["heating-air", "heating-metal", "heating-water", "temperature-volume"]
    );
}

#[test]
fn test_phrase_sets_are_lowercase() {
    let lexicon = Lexicon::standard();
    let sets = [
        lexicon.self_correction,
        lexicon.hesitation,
        lexicon.alternative,
        lexicon.guidance,
        lexicon.causal,
        lexicon.experience,
        lexicon.evidence_keywords,
    ];
    for set in sets {
        for phrase in set {
            assert_eq!(*phrase, phrase.to_lowercase());
        }
    }
}

#[test]
fn test_self_correction_phrase_is_not_a_hesitation() {
    let lexicon = Lexicon::shared();
    let text = Normalized::new("wait, I was wrong, actually...");
    assert_eq!(text.first_match(lexicon.self_correction), Some("i was wrong"));
    assert_eq!(text.first_match(lexicon.hesitation), None);
    assert_eq!(text.first_match(lexicon.alternative), None);
}

#[test]
fn test_metacognition_weights_are_positive() {
    for (phrase, weight) in Lexicon::shared().metacognition {
        assert!(*weight > 0.0, "{phrase}");
    }
}
