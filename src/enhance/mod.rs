//! Client for the opaque prompt-enhancement endpoint.
//!
//! The endpoint is an external collaborator (an LLM behind an HTTP API, e.g.
//! a local Ollama server) consumed via a JSON request/response call. It is
//! never reimplemented here; we only build the request and sanity-check the
//! reply.

use async_trait::async_trait;
use serde_json::json;
use tracing::{info, warn};

use crate::error::PolishError;
use crate::normalize::TransformResult;

/// Anything that can turn a prompt into an improved completion.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelBackend {
    async fn complete(&self, prompt: &str) -> Result<String, PolishError>;
}

/// HTTP implementation posting `{model, prompt, stream: false}` and reading
/// the `response` field of the JSON reply.
pub struct HttpBackend {
    client: reqwest::Client,
    endpoint: String,
    model: String,
}

impl HttpBackend {
    pub fn new(endpoint: &str, model: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.to_string(),
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl ModelBackend for HttpBackend {
    async fn complete(&self, prompt: &str) -> Result<String, PolishError> {
        info!("📡 Sending prompt to enhancement endpoint");

        let body = json!({
            "model": self.model,
            "prompt": prompt,
            "stream": false,
        });

        let response = self.client.post(&self.endpoint).json(&body).send().await?;
        let payload: serde_json::Value = response.json().await?;

        payload
            .get("response")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or_else(|| PolishError::MalformedResponse {
                details: "missing 'response' field".to_string(),
            })
    }
}

/// Ask the backend to improve a normalized prompt. Falls back to the
/// normalized text when the reply is empty or unreasonably long.
pub async fn enhance(
    backend: &dyn ModelBackend,
    result: &TransformResult,
) -> Result<String, PolishError> {
    let prompt = build_enhancement_prompt(result);
    let enhanced = backend.complete(&prompt).await?;
    let enhanced = enhanced.trim();

    if enhanced.is_empty() {
        warn!("Enhancement endpoint returned nothing, keeping normalized text");
        return Ok(result.corrected_text.clone());
    }

    // Guard against runaway rewrites that no longer resemble the request.
    if enhanced.chars().count() > result.corrected_text.chars().count() * 3 {
        warn!("Enhanced prompt too long, keeping normalized text");
        return Ok(result.corrected_text.clone());
    }

    Ok(enhanced.to_string())
}

fn build_enhancement_prompt(result: &TransformResult) -> String {
    match &result.classification {
        Some(c) => format!(
            "Improve the following {} prompt for the {} domain, keeping a {} style and without changing its meaning: «{}»",
            c.intent.as_str(),
            c.domain.as_str(),
            c.style.as_str(),
            result.corrected_text
        ),
        None => format!(
            "Improve the following prompt without changing its meaning: «{}»",
            result.corrected_text
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    #[tokio::test]
    async fn test_enhance_returns_backend_reply() {
        let mut backend = MockModelBackend::new();
        backend
            .expect_complete()
            .returning(|_| Ok("Write one short haiku about autumn rain.".to_string()));

        let result = normalize("write a haiku");
        let enhanced = enhance(&backend, &result).await.unwrap();
        assert_eq!(enhanced, "Write one short haiku about autumn rain.");
    }

    #[tokio::test]
    async fn test_enhancement_prompt_carries_classification() {
        let mut backend = MockModelBackend::new();
        backend
            .expect_complete()
            .withf(|prompt: &str| prompt.contains("analyze") && prompt.contains("technology"))
            .returning(|_| Ok("ok".to_string()));

        let result = normalize("review this code and flag any bugs you find");
        enhance(&backend, &result).await.unwrap();
    }

    #[tokio::test]
    async fn test_empty_reply_falls_back_to_normalized_text() {
        let mut backend = MockModelBackend::new();
        backend.expect_complete().returning(|_| Ok("   ".to_string()));

        let result = normalize("write a haiku");
        let enhanced = enhance(&backend, &result).await.unwrap();
        assert_eq!(enhanced, result.corrected_text);
    }

    #[tokio::test]
    async fn test_oversized_reply_falls_back_to_normalized_text() {
        let mut backend = MockModelBackend::new();
        backend
            .expect_complete()
            .returning(|_| Ok("x".repeat(10_000)));

        let result = normalize("write a haiku");
        let enhanced = enhance(&backend, &result).await.unwrap();
        assert_eq!(enhanced, result.corrected_text);
    }

    #[tokio::test]
    async fn test_backend_error_propagates() {
        let mut backend = MockModelBackend::new();
        backend.expect_complete().returning(|_| {
            Err(PolishError::MalformedResponse {
                details: "missing 'response' field".to_string(),
            })
        });

        let result = normalize("write a haiku");
        let err = enhance(&backend, &result).await.unwrap_err();
        assert!(err.to_string().contains("Malformed"));
    }
}
