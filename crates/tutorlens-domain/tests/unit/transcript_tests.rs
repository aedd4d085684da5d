//! Unit tests for transcript entities

use tutorlens_domain::{Exchange, Role, Transcript, TranscriptInput, Turn};

#[test]
fn test_roles_accept_chat_api_spelling() {
    let json = r#"[
        {"role": "assistant", "content": "What happens to the water?"},
        {"role": "user", "content": "It moves up."},
        {"role": "tutor", "content": "Why?"},
        {"role": "learner", "content": "Because it is hot."}
    ]"#;
    let transcript: Transcript = serde_json::from_str(json).unwrap();

    assert_eq!(transcript.len(), 4);
    assert_eq!(transcript.turns()[0].role, Role::Tutor);
    assert_eq!(transcript.turns()[1].role, Role::Learner);
    assert_eq!(
        transcript.learner_messages(),
        vec!["It moves up.", "Because it is hot."]
    );
    assert_eq!(
        transcript.tutor_messages(),
        vec!["What happens to the water?", "Why?"]
    );
}

#[test]
fn test_turn_missing_content_is_a_json_error() {
    let json = r#"[{"role": "user"}]"#;
    let result: Result<Transcript, _> = serde_json::from_str(json);
    assert!(result.is_err());

    let error: tutorlens_domain::Error = result.unwrap_err().into();
    assert!(matches!(error, tutorlens_domain::Error::Json { .. }));
}

#[test]
fn test_turn_with_unknown_role_is_rejected() {
    let json = r#"[{"role": "narrator", "content": "hello"}]"#;
    assert!(serde_json::from_str::<Transcript>(json).is_err());
}

#[test]
fn test_transcript_input_text_becomes_single_learner_turn() {
    let input: TranscriptInput = serde_json::from_str(r#""water rises when heated""#).unwrap();
    let transcript = Transcript::from(input);

    assert_eq!(transcript.len(), 1);
    assert!(transcript.turns()[0].is_learner());
    assert_eq!(transcript.learner_messages(), vec!["water rises when heated"]);
}

#[test]
fn test_transcript_input_messages_keep_order() {
    let input: TranscriptInput = serde_json::from_str(
        r#"[{"role": "user", "content": "a"}, {"role": "assistant", "content": "b"}]"#,
    )
    .unwrap();

    match &input {
        TranscriptInput::Messages(turns) => assert_eq!(turns.len(), 2),
        TranscriptInput::Text(_) => panic!("Expected Messages input"),
    }
    let transcript = Transcript::from(input);
    assert_eq!(transcript.turns()[1], Turn::tutor("b"));
}

#[test]
fn test_from_exchanges_skips_pending_replies() {
    let exchanges = vec![
        Exchange {
            user_message: "I think the top gets hot".to_string(),
            ai_response: "Why do you think so?".to_string(),
        },
        Exchange {
            user_message: "Because hot water rises".to_string(),
            ai_response: String::new(),
        },
    ];
    let transcript = Transcript::from_exchanges(&exchanges);

    let roles: Vec<Role> = transcript.turns().iter().map(|t| t.role).collect();
    assert_eq!(roles, vec![Role::Learner, Role::Tutor, Role::Learner]);
}

#[test]
fn test_has_learner_content_ignores_blank_turns() {
    let transcript: Transcript = vec![Turn::tutor("Hello?"), Turn::learner("   ")]
        .into_iter()
        .collect();
    assert!(!transcript.has_learner_content());
    assert!(!Transcript::default().has_learner_content());
    assert!(Transcript::new(vec![Turn::learner("hi")]).has_learner_content());
}
