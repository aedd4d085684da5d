//! Common helpers for embedding providers
//!
//! Constructor and response-parsing patterns shared by the HTTP providers.

use std::sync::OnceLock;
use std::time::Duration;

use tracing::debug;
use tutorlens_domain::error::{Error, Result};
use tutorlens_domain::value_objects::Embedding;

/// Common constructor patterns used by embedding providers
pub mod constructor {
    use std::time::Duration;

    use super::DEFAULT_EMBEDDING_TIMEOUT;

    /// Trim surrounding whitespace from an API key
    pub fn validate_api_key(api_key: &str) -> String {
        api_key.trim().to_string()
    }

    /// Trim an optional URL, dropping it when blank
    pub fn validate_url(url: Option<String>) -> Option<String> {
        url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty())
    }

    /// Timeout from an optional number of seconds
    ///
    /// Zero is treated as unset.
    pub fn timeout_from_secs(secs: Option<u64>) -> Duration {
        secs.filter(|s| *s > 0)
            .map_or(DEFAULT_EMBEDDING_TIMEOUT, Duration::from_secs)
    }

    /// Effective URL with fallback to default, without a trailing slash
    pub fn get_effective_url(provided_url: Option<&str>, default_url: &str) -> String {
        provided_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(default_url)
            .trim_end_matches('/')
            .to_string()
    }
}

/// Default timeout for embedding API requests
pub const DEFAULT_EMBEDDING_TIMEOUT: Duration = Duration::from_secs(30);

/// Vector length of a remote model
///
/// A declared length wins. Otherwise the length of the first non-empty
/// answer is adopted, and before any answer the caller's guess for the model
/// name stands in.
#[derive(Debug, Default)]
pub struct ModelDimensions {
    declared: Option<usize>,
    learned: OnceLock<usize>,
}

impl ModelDimensions {
    pub fn declare(&mut self, dimensions: usize) {
        self.declared = Some(dimensions);
    }

    pub fn learn(&self, model: &str, embeddings: &[Embedding]) {
        if self.declared.is_some() {
            return;
        }
        let Some(length) = embeddings
            .iter()
            .map(|e| e.vector.len())
            .find(|length| *length > 0)
        else {
            return;
        };
        if self.learned.set(length).is_ok() {
            debug!(model, dimensions = length, "Adopted embedding length from service");
        }
    }

    pub fn resolve(&self, guess: impl FnOnce() -> usize) -> usize {
        self.declared
            .or_else(|| self.learned.get().copied())
            .unwrap_or_else(guess)
    }
}

/// Convert a JSON number array into an embedding vector
///
/// Non-numeric entries are rejected rather than silently zeroed.
#[allow(clippy::cast_possible_truncation)]
pub fn parse_vector(value: &serde_json::Value, provider: &str) -> Result<Vec<f32>> {
    let values = value.as_array().ok_or_else(|| {
        Error::embedding(format!(
            "{provider} invalid response format: missing embedding array"
        ))
    })?;

    values
        .iter()
        .map(|v| {
            v.as_f64()
                .map(|x| x as f32)
                .ok_or_else(|| Error::embedding(format!("{provider} non-numeric embedding value")))
        })
        .collect()
}

/// Map a transport error, naming the timeout when that was the cause
pub fn request_error(error: reqwest::Error, timeout: Duration) -> Error {
    let message = if error.is_timeout() {
        format!("{} {timeout:?}", crate::constants::ERROR_MSG_REQUEST_TIMEOUT)
    } else {
        format!("HTTP request failed: {error}")
    };
    Error::network(message, error)
}

/// Texts with visible content, paired with their positions in `texts`
pub fn non_blank(texts: &[String]) -> (Vec<usize>, Vec<String>) {
    texts
        .iter()
        .enumerate()
        .filter(|(_, text)| !text.trim().is_empty())
        .map(|(i, text)| (i, text.clone()))
        .unzip()
}

/// Put `produced` back at `positions`; every other slot is an all-zero vector
pub fn fill_blanks(
    len: usize,
    positions: Vec<usize>,
    produced: Vec<Embedding>,
    dimensions: usize,
    model: &str,
) -> Vec<Embedding> {
    let mut embeddings: Vec<Embedding> = (0..len)
        .map(|_| Embedding::zeros(dimensions, model))
        .collect();
    for (position, embedding) in positions.into_iter().zip(produced) {
        embeddings[position] = embedding;
    }
    embeddings
}
