//! Tests for the HTTP embedding providers against stub servers

use std::time::Duration;

use mockito::{Matcher, Server};
use reqwest::Client;
use serde_json::json;
use tutorlens_domain::error::Error;
use tutorlens_providers::embedding::{OllamaEmbeddingProvider, OpenAIEmbeddingProvider};
use tutorlens_providers::{EmbeddingProvider, EmbeddingStrategy, FallbackEmbeddingProvider};

fn texts(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

fn openai(base_url: String, model: &str) -> OpenAIEmbeddingProvider {
    OpenAIEmbeddingProvider::new(
        Some("test-key".to_string()),
        Some(base_url),
        model.to_string(),
        Duration::from_secs(5),
        Client::new(),
    )
}

fn ollama(base_url: String) -> OllamaEmbeddingProvider {
    OllamaEmbeddingProvider::new(
        base_url,
        "all-minilm".to_string(),
        Duration::from_secs(5),
        Client::new(),
    )
}

mod openai_tests {
    use super::*;

    #[tokio::test]
    async fn test_openai_embed_with_mock_server() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/embeddings")
            .match_header("authorization", "Bearer test-key")
            .match_header("content-type", "application/json")
            .match_body(Matcher::PartialJson(json!({
                "model": "text-embedding-3-small",
                "input": ["Heat makes water rise."]
            })))
            .with_status(200)
            .with_body(json!({"data": [{"index": 0, "embedding": vec![0.5_f32; 1536]}]}).to_string())
            .create_async()
            .await;

        let provider = openai(server.url(), "text-embedding-3-small");
        let embedding = provider.embed("Heat makes water rise.").await.unwrap();

        mock.assert_async().await;
        assert_eq!(embedding.model, "text-embedding-3-small");
        assert_eq!(embedding.dimensions, 1536);
    }

    #[tokio::test]
    async fn test_unlisted_model_adopts_length_of_first_answer() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/embeddings")
            .with_status(200)
            .with_body(
                json!({"data": [{"index": 0, "embedding": [0.1, 0.2, 0.3, 0.4]}]}).to_string(),
            )
            .create_async()
            .await;

        let provider = openai(server.url(), "bge-small-en");
        assert_eq!(provider.dimensions(), 1536);

        let embedding = provider.embed("the water moves in a loop").await.unwrap();

        assert_eq!(embedding.vector.len(), 4);
        assert_eq!(provider.dimensions(), 4);
    }

    #[tokio::test]
    async fn test_self_hosted_model_behind_fallback_stays_primary() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/embeddings")
            .with_status(200)
            .with_body(
                json!({"data": [{"index": 0, "embedding": [0.1, 0.2, 0.3, 0.4]}]}).to_string(),
            )
            .create_async()
            .await;

        let primary = OpenAIEmbeddingProvider::new(
            None,
            Some(server.url()),
            "bge-small-en".to_string(),
            Duration::from_secs(5),
            Client::new(),
        );
        let provider = FallbackEmbeddingProvider::new(std::sync::Arc::new(primary));

        let (strategy, embeddings) = provider
            .embed_batch_with_strategy(&texts(&["", "warm water goes up"]))
            .await;

        assert_eq!(strategy, EmbeddingStrategy::Primary);
        assert_eq!(embeddings[1].vector, vec![0.1, 0.2, 0.3, 0.4]);
        assert_eq!(embeddings[0].vector, vec![0.0; 4]);
        assert_eq!(provider.dimensions(), 4);
    }

    #[tokio::test]
    async fn test_declared_dimensions_are_not_sent() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/embeddings")
            .match_body(Matcher::Json(json!({
                "input": ["metal heats fastest"],
                "model": "bge-small-en",
                "encoding_format": "float"
            })))
            .with_status(200)
            .with_body(json!({"data": [{"index": 0, "embedding": [1.0, 0.0, 0.0]}]}).to_string())
            .create_async()
            .await;

        let provider = openai(server.url(), "bge-small-en").with_dimensions(3);
        let embeddings = provider
            .embed_batch(&texts(&["  ", "metal heats fastest"]))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(embeddings.len(), 2);
        assert!(embeddings[0].is_zero());
        assert_eq!(embeddings[0].vector.len(), 3);
        assert_eq!(embeddings[1].vector, vec![1.0, 0.0, 0.0]);
    }

    #[tokio::test]
    async fn test_requested_dimensions_are_sent() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/embeddings")
            .match_body(Matcher::PartialJson(json!({"dimensions": 2})))
            .with_status(200)
            .with_body(json!({"data": [{"index": 0, "embedding": [0.6, 0.8]}]}).to_string())
            .create_async()
            .await;

        let provider = openai(server.url(), "text-embedding-3-large").with_requested_dimensions(2);
        let embedding = provider.embed("air expands").await.unwrap();

        mock.assert_async().await;
        assert_eq!(embedding.vector, vec![0.6, 0.8]);
    }

    #[tokio::test]
    async fn test_all_blank_batch_makes_no_request() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/embeddings")
            .expect(0)
            .create_async()
            .await;

        let provider = openai(server.url(), "text-embedding-3-small");
        let embeddings = provider.embed_batch(&texts(&["", "   "])).await.unwrap();

        mock.assert_async().await;
        assert!(embeddings.iter().all(|e| e.is_zero() && e.dimensions == 1536));
    }

    #[tokio::test]
    async fn test_openai_unauthorized_is_error() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/embeddings")
            .with_status(401)
            .with_body(r#"{"error": {"message": "Incorrect API key provided"}}"#)
            .create_async()
            .await;

        let provider = openai(server.url(), "text-embedding-3-small");
        let Err(error) = provider.embed("hello").await else {
            panic!("Expected authentication error");
        };

        assert!(matches!(error, Error::Embedding { .. }));
        assert!(error.to_string().contains("OpenAI authentication failed"));
    }

    #[tokio::test]
    async fn test_openai_timeout_is_network_error() {
        // Connections queue in the backlog but never get an answer.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();

        let provider = OpenAIEmbeddingProvider::new(
            Some("test-key".to_string()),
            Some(format!("http://{address}/v1")),
            "text-embedding-3-small".to_string(),
            Duration::from_millis(200),
            Client::new(),
        );
        let Err(error) = provider.embed("hello").await else {
            panic!("Expected timeout");
        };

        assert!(matches!(error, Error::Network { .. }));
        assert!(error.to_string().contains("Request timed out after 200ms"));
        assert!(std::error::Error::source(&error).is_some());
        drop(listener);
    }
}

mod ollama_tests {
    use super::*;

    #[tokio::test]
    async fn test_ollama_sends_one_request_per_text() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/embeddings")
            .match_header("content-type", "application/json")
            .match_body(Matcher::PartialJson(json!({"model": "all-minilm", "stream": false})))
            .with_status(200)
            .with_body(json!({"embedding": [0.1, 0.2, 0.3]}).to_string())
            .expect(2)
            .create_async()
            .await;

        let provider = ollama(server.url());
        let embeddings = provider
            .embed_batch(&texts(&["it gets bigger", "", "the lid pops"]))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(embeddings.len(), 3);
        assert_eq!(embeddings[0].vector, vec![0.1, 0.2, 0.3]);
        assert!(embeddings[1].is_zero());
        assert_eq!(embeddings[1].vector.len(), 3);
        assert_eq!(embeddings[2].model, "all-minilm");
        assert_eq!(provider.dimensions(), 3);
    }

    #[tokio::test]
    async fn test_ollama_server_error_is_reported() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/api/embeddings")
            .with_status(500)
            .with_body("model not loaded")
            .create_async()
            .await;

        let provider = ollama(server.url());
        let Err(error) = provider.embed("hello").await else {
            panic!("Expected server error");
        };

        let message = error.to_string();
        assert!(message.contains("Ollama server error (500)"));
        assert!(message.contains("model not loaded"));
    }

    #[tokio::test]
    async fn test_ollama_failure_is_absorbed_by_fallback() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/api/embeddings")
            .with_status(503)
            .create_async()
            .await;

        let provider =
            FallbackEmbeddingProvider::new(std::sync::Arc::new(ollama(server.url())));
        let (strategy, embeddings) = provider
            .embed_batch_with_strategy(&texts(&["a b a"]))
            .await;

        assert_eq!(strategy, EmbeddingStrategy::Fallback);
        assert_eq!(embeddings[0].vector.len(), 384);
        assert_eq!(&embeddings[0].vector[..3], &[1.0, 0.5, 0.0]);
    }
}
