//! Bootstrap Tests

use tutorlens_application::ClusteringServiceInterface;
use tutorlens_application::TranscriptAnalyzerInterface;
use tutorlens_domain::error::Error;
use tutorlens_domain::ports::providers::EmbeddingProvider as _;
use tutorlens_domain::{InfectionPolicy, Topic, Transcript, Turn};
use tutorlens_infrastructure::config::{AppConfig, ConfigBuilder, EmbeddingConfig};
use tutorlens_infrastructure::{build_embedding_provider, init_app};

fn unreachable_openai(fallback: bool) -> EmbeddingConfig {
    EmbeddingConfig {
        provider: "openai".to_string(),
        base_url: Some("http://127.0.0.1:9/v1".to_string()),
        timeout_secs: 2,
        fallback,
        ..EmbeddingConfig::default()
    }
}

#[test]
fn test_local_provider_is_not_wrapped() {
    let provider = build_embedding_provider(&EmbeddingConfig::default()).expect("local resolves");
    assert_eq!(provider.provider_name(), "local");
    assert_eq!(provider.dimensions(), 10);
}

#[test]
fn test_remote_provider_is_wrapped_with_fallback() {
    let provider = build_embedding_provider(&unreachable_openai(true)).expect("openai resolves");
    assert_eq!(provider.provider_name(), "fallback");
}

#[test]
fn test_fallback_can_be_disabled() {
    let provider = build_embedding_provider(&unreachable_openai(false)).expect("openai resolves");
    assert_eq!(provider.provider_name(), "openai");
}

#[test]
fn test_provider_name_is_case_insensitive() {
    let config = EmbeddingConfig {
        provider: "LOCAL".to_string(),
        ..EmbeddingConfig::default()
    };
    let provider = build_embedding_provider(&config).expect("local resolves");
    assert_eq!(provider.provider_name(), "local");
}

#[test]
fn test_unknown_provider_is_configuration_error() {
    let config = EmbeddingConfig {
        provider: "word2vec".to_string(),
        ..EmbeddingConfig::default()
    };
    let Err(Error::Configuration { message, .. }) = build_embedding_provider(&config) else {
        panic!("Expected configuration error");
    };
    assert!(message.contains("word2vec"));
}

#[test]
fn test_init_app_carries_analysis_options() {
    let mut config = AppConfig::default();
    config.analysis.infection_policy = InfectionPolicy::SecondHalf;

    let context = init_app(config).expect("context builds");
    assert_eq!(
        context.analysis().options().infection_policy,
        InfectionPolicy::SecondHalf
    );
    assert_eq!(context.clustering().provider().provider_name(), "local");

    let transcript = Transcript::new(vec![
        Turn::tutor("What do you notice?"),
        Turn::learner("wait, I was wrong, actually..."),
    ]);
    let card = context.analysis().analyze(&transcript, &Topic::default());
    assert!((card.depth_of_thinking.score - 2.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_unreachable_primary_still_clusters() {
    let config = ConfigBuilder::new()
        .with_embedding(unreachable_openai(true))
        .build()
        .expect("valid config");
    let context = init_app(config).expect("context builds");

    let texts: Vec<String> = ["a b a", "a b a", "x y z"].iter().map(ToString::to_string).collect();
    let assignment = context
        .clustering()
        .cluster(&texts, 2)
        .await
        .expect("fallback never errors");

    assert_eq!(assignment.total_members(), 3);
    let first = assignment.cluster_of(0).expect("text 0 is assigned");
    assert!(first.contains(1));
}

#[tokio::test]
async fn test_unwrapped_primary_never_receives_blank_texts() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/embeddings")
        .match_body(mockito::Matcher::PartialJson(serde_json::json!({
            "input": ["heat rises", "warm water rises"]
        })))
        .with_status(200)
        .with_body(
            serde_json::json!({"data": [
                {"index": 0, "embedding": [1.0, 0.0]},
                {"index": 1, "embedding": [0.9, 0.1]}
            ]})
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let config = EmbeddingConfig {
        provider: "openai".to_string(),
        model: Some("bge-small-en".to_string()),
        base_url: Some(server.url()),
        fallback: false,
        ..EmbeddingConfig::default()
    };
    let provider = build_embedding_provider(&config).expect("openai resolves");

    let texts: Vec<String> = ["", "heat rises", "warm water rises"]
        .iter()
        .map(ToString::to_string)
        .collect();
    let assignment = tutorlens_application::cluster_texts(&texts, 2, provider.as_ref())
        .await
        .expect("blank text is zero-filled, not sent");

    mock.assert_async().await;
    assert_eq!(assignment.total_members(), 3);
    assert_eq!(provider.dimensions(), 2);
}
