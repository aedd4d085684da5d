//! HTTP Response Utilities
//!
//! Status handling for the remote embedding services.

use reqwest::{Response, StatusCode};
use tutorlens_domain::error::{Error, Result};

fn embedding_error(provider: &str, context: &str, details: &str) -> Error {
    Error::embedding(format!("{provider} {context}: {details}"))
}

/// Utilities for processing HTTP responses
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check response status and parse the JSON body
    ///
    /// Non-success statuses become [`Error::Embedding`] so the fallback
    /// wrapper can absorb them.
    pub async fn check_and_parse(
        response: Response,
        provider_name: &str,
    ) -> Result<serde_json::Value> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(Self::status_error(status, provider_name, &error_text));
        }

        response
            .json()
            .await
            .map_err(|e| embedding_error(provider_name, "response parse failed", &e.to_string()))
    }

    /// Map a failed status to a descriptive error
    pub fn status_error(status: StatusCode, provider_name: &str, details: &str) -> Error {
        let code = status.as_u16();
        match code {
            401 => embedding_error(provider_name, "authentication failed", details),
            429 => embedding_error(provider_name, "rate limit exceeded", details),
            500..=599 => {
                embedding_error(provider_name, &format!("server error ({code})"), details)
            }
            _ => embedding_error(provider_name, &format!("request failed ({code})"), details),
        }
    }
}
