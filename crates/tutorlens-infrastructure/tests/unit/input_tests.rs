//! Input document tests

use std::io::Write;

use tempfile::NamedTempFile;
use tutorlens_domain::Role;
use tutorlens_domain::error::Error;
use tutorlens_infrastructure::input::{
    load_class, load_texts, load_transcript, parse_class, parse_transcript,
};

fn json_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".json").expect("temp file");
    file.write_all(contents.as_bytes()).expect("write json");
    file
}

#[test]
fn test_free_text_is_single_learner_turn() {
    let transcript = parse_transcript(r#""Water evaporates because of heat.""#).expect("parses");
    assert_eq!(transcript.len(), 1);
    assert_eq!(transcript.turns()[0].role, Role::Learner);
}

#[test]
fn test_role_tagged_turns_accept_chat_roles() {
    let transcript = parse_transcript(
        r#"[
            {"role": "assistant", "content": "What happens to the puddle?"},
            {"role": "user", "content": "It dries up."}
        ]"#,
    )
    .expect("parses");
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript.turns()[0].role, Role::Tutor);
    assert_eq!(transcript.turns()[1].role, Role::Learner);
}

#[test]
fn test_exchange_log_is_flattened() {
    let transcript = parse_transcript(
        r#"[
            {"user_message": "Why is the sky blue?", "ai_response": "What do you think?"},
            {"user_message": "Light scatters?", "ai_response": ""}
        ]"#,
    )
    .expect("parses");
    assert_eq!(transcript.learner_messages(), vec!["Why is the sky blue?", "Light scatters?"]);
    assert_eq!(transcript.tutor_messages(), vec!["What do you think?"]);
}

#[test]
fn test_malformed_turn_is_json_error() {
    let result = parse_transcript(r#"[{"role": "learner"}]"#);
    assert!(matches!(result, Err(Error::Json { .. })));
}

#[test]
fn test_class_roster_sorted_by_learner() {
    let roster = parse_class(
        r#"{
            "ben": [{"role": "learner", "content": "I think so."}],
            "aiko": "Evaporation needs heat."
        }"#,
    )
    .expect("parses");
    let names: Vec<&str> = roster.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["aiko", "ben"]);
}

#[test]
fn test_loaders_read_files() {
    let transcript = json_file(r#"[{"role": "learner", "content": "hello"}]"#);
    assert_eq!(load_transcript(transcript.path()).expect("loads").len(), 1);

    let texts = json_file(r#"["a b a", "x y z"]"#);
    assert_eq!(load_texts(texts.path()).expect("loads").len(), 2);

    let class = json_file(r#"{"dana": "hello"}"#);
    assert_eq!(load_class(class.path()).expect("loads").len(), 1);
}

#[test]
fn test_missing_file_is_not_found() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let result = load_texts(&dir.path().join("absent.json"));
    assert!(matches!(result, Err(Error::NotFound { .. })));
}
