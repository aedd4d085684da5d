//! Unit tests for domain error types

use tutorlens_domain::Error;

#[test]
fn test_missing_transcript_names_the_file() {
    let error = Error::not_found("transcript.json");
    match &error {
        Error::NotFound { resource } => assert_eq!(resource, "transcript.json"),
        _ => panic!("Expected NotFound error"),
    }
    assert_eq!(error.to_string(), "Not found: transcript.json");
}

#[test]
fn test_config_error_display() {
    let error = Error::config("timeout_secs must be greater than zero");
    assert_eq!(
        error.to_string(),
        "Configuration error: timeout_secs must be greater than zero"
    );
    assert!(std::error::Error::source(&error).is_none());
}

#[test]
fn test_malformed_turn_converts_to_json_error() {
    let parsed: Result<serde_json::Value, _> = serde_json::from_str("[{\"role\": ");
    let error: Error = parsed.unwrap_err().into();
    assert!(matches!(error, Error::Json { .. }));
}

#[test]
fn test_network_error_keeps_transport_cause() {
    let refused = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
    let error = Error::network("embedding service unreachable", refused);

    assert_eq!(error.to_string(), "Network error: embedding service unreachable");
    let cause = std::error::Error::source(&error).map(ToString::to_string);
    assert_eq!(cause.as_deref(), Some("refused"));
}

#[test]
fn test_embedding_error_display() {
    let error = Error::embedding("Model not available");
    assert_eq!(error.to_string(), "Embedding provider error: Model not available");
}
