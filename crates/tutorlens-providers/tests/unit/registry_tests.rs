//! Tests for provider self-registration

use tutorlens_providers::EmbeddingProvider as _;

use tutorlens_application::ports::registry::{
    EmbeddingProviderConfig, list_embedding_providers, resolve_embedding_provider,
};

#[test]
fn test_all_providers_registered() {
    let names: Vec<&str> = list_embedding_providers().into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["local", "ollama", "openai"]);
}

#[test]
fn test_resolve_local_with_dimensions() {
    let provider =
        resolve_embedding_provider(&EmbeddingProviderConfig::new("local").with_dimensions(32))
            .unwrap();
    assert_eq!(provider.provider_name(), "local");
    assert_eq!(provider.dimensions(), 32);
}

#[test]
fn test_resolve_ollama_defaults() {
    let provider = resolve_embedding_provider(&EmbeddingProviderConfig::new("ollama")).unwrap();
    assert_eq!(provider.provider_name(), "ollama");
    assert_eq!(provider.dimensions(), 768);
}

#[test]
fn test_openai_requires_key_or_url() {
    let Err(message) = resolve_embedding_provider(&EmbeddingProviderConfig::new("openai")) else {
        panic!("Expected missing api_key error");
    };
    assert!(message.contains("api_key"));

    let provider = resolve_embedding_provider(
        &EmbeddingProviderConfig::new("openai")
            .with_base_url("http://localhost:8000/v1")
            .with_model("text-embedding-3-large"),
    )
    .unwrap();
    assert_eq!(provider.dimensions(), 3072);
}

#[test]
fn test_unknown_provider_names_available() {
    let Err(message) = resolve_embedding_provider(&EmbeddingProviderConfig::new("gemini")) else {
        panic!("Expected unknown provider error");
    };
    assert!(message.contains("local"));
}
