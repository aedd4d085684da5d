//! Vocabulary Transition Detector
//!
//! Topic-scoped co-occurrence check: an everyday term used before the
//! midpoint of the learner turns whose mapped domain term shows up after
//! it. Transitions through unmapped vocabulary are not detected.

use tutorlens_domain::lexicon::Lexicon;
use tutorlens_domain::text::Normalized;
use tutorlens_domain::{TermUsage, Topic, Transcript, TransitionReport, VocabularyTransition};

fn presences(turns: &[Normalized], term: &str) -> usize {
    turns.iter().filter(|t| t.contains(term)).count()
}

fn usage(turns: &[Normalized], everyday: &[&str], domain: &[&str]) -> TermUsage {
    TermUsage {
        everyday: everyday.iter().map(|term| presences(turns, term)).sum(),
        domain: domain.iter().map(|term| presences(turns, term)).sum(),
    }
}

/// Detect everyday-to-domain shifts with the shared lexicon
pub fn detect_transitions(transcript: &Transcript, topic: &Topic) -> TransitionReport {
    detect_transitions_with(Lexicon::shared(), transcript, topic)
}

/// Detect everyday-to-domain shifts with an explicit lexicon
pub fn detect_transitions_with(
    lexicon: &Lexicon,
    transcript: &Transcript,
    topic: &Topic,
) -> TransitionReport {
    let vocabulary = lexicon.topic(topic);
    let learner: Vec<Normalized> = transcript
        .learner_messages()
        .into_iter()
        .map(Normalized::new)
        .collect();
    let (first_half, second_half) = learner.split_at(learner.len() / 2);

    let mut transitions = Vec::new();
    for (everyday, domain_terms) in vocabulary.everyday_to_domain {
        let first_half_count = presences(first_half, everyday);
        if first_half_count == 0 {
            continue;
        }
        let observed: Vec<&str> = domain_terms
            .iter()
            .copied()
            .filter(|term| presences(second_half, term) > 0)
            .collect();
        if observed.is_empty() {
            continue;
        }
        let second_half_count = second_half
            .iter()
            .filter(|t| observed.iter().any(|term| t.contains(term)))
            .count();
        transitions.push(VocabularyTransition {
            topic: topic.clone(),
            everyday_term: (*everyday).to_string(),
            domain_terms: observed.into_iter().map(str::to_string).collect(),
            first_half_count,
            second_half_count,
        });
    }

    let everyday_terms: Vec<&str> = vocabulary
        .everyday_to_domain
        .iter()
        .map(|(everyday, _)| *everyday)
        .collect();
    let mut domain_terms: Vec<&str> = Vec::new();
    for (_, mapped) in vocabulary.everyday_to_domain {
        for term in *mapped {
            if !domain_terms.contains(term) {
                domain_terms.push(*term);
            }
        }
    }

    TransitionReport {
        topic: topic.clone(),
        resolved_topic: vocabulary.key.to_string(),
        transitions,
        before: usage(first_half, &everyday_terms, &domain_terms),
        after: usage(second_half, &everyday_terms, &domain_terms),
    }
}
