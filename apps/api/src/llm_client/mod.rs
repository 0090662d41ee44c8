//! LLM Client: the single point of entry for all Gemini API calls.
//!
//! No other module may call the provider directly; handlers depend on the
//! `GenerativeModel` trait and receive a `GeminiClient` through `AppState`.
//!
//! Model: gemini-2.0-flash (hardcoded, not configurable)
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// The model used for every chat relay call.
pub const MODEL: &str = "gemini-2.0-flash";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types
// ────────────────────────────────────────────────────────────────────────────

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<SystemInstruction>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Content {
    pub role: ProviderRole,
    pub parts: Vec<Part>,
}

/// Gemini only knows two conversational roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderRole {
    User,
    Model,
}

/// One text block. `text` carries the caller's value as-is; an absent value
/// leaves the key out, and the provider is the one to reject odd shapes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Value>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(Value::String(text.into())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub max_output_tokens: u32,
    pub temperature: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemInstruction {
    pub parts: Vec<Part>,
}

/// Provider response, kept opaque. Only the reply text path is read.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct GenerateContentResponse {
    raw: Value,
}

impl GenerateContentResponse {
    /// `candidates[0].content.parts[0].text`, if present and non-empty.
    pub fn text(&self) -> Option<&str> {
        self.raw
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
    }

    pub fn candidate_count(&self) -> usize {
        self.raw
            .get("candidates")
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

/// Anything that can answer a `generateContent` request.
/// `GeminiClient` is the production implementation.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate_content(
        &self,
        api_key: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, LlmError>;
}

/// Thin wrapper over the Gemini REST API. One request, one response:
/// no retries, no streaming.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
}

impl GeminiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, MODEL)
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate_content(
        &self,
        api_key: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, LlmError> {
        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(request)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let message = response.text().await?;
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        let parsed: GenerateContentResponse = serde_json::from_slice(&bytes)?;

        debug!(
            "Gemini call succeeded: candidates={}",
            parsed.candidate_count()
        );

        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn hello_request() -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: ProviderRole::User,
                parts: vec![Part::text("Hi")],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: 500,
                temperature: 0.7,
            },
            system_instruction: None,
        }
    }

    #[test]
    fn test_request_serializes_camel_case_without_system_instruction() {
        let value = serde_json::to_value(hello_request()).unwrap();
        assert_eq!(
            value,
            json!({
                "contents": [{"role": "user", "parts": [{"text": "Hi"}]}],
                "generationConfig": {"maxOutputTokens": 500, "temperature": 0.7}
            })
        );
        assert!(value.get("systemInstruction").is_none());
    }

    #[test]
    fn test_response_text_extraction() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{"content": {"parts": [{"text": "Hello!"}], "role": "model"}}]
        }))
        .unwrap();
        assert_eq!(response.text(), Some("Hello!"));
    }

    #[test]
    fn test_response_text_missing_paths() {
        let empty: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.text(), None);

        let no_content: GenerateContentResponse =
            serde_json::from_value(json!({"candidates": [{"finishReason": "SAFETY"}]})).unwrap();
        assert_eq!(no_content.text(), None);

        let null_candidates: GenerateContentResponse =
            serde_json::from_value(json!({"candidates": null})).unwrap();
        assert_eq!(null_candidates.text(), None);

        let blank: GenerateContentResponse =
            serde_json::from_value(json!({"candidates": [{"content": {"parts": [{"text": ""}]}}]}))
                .unwrap();
        assert_eq!(blank.text(), None);
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = GeminiClient::new("http://localhost:9999/");
        assert_eq!(
            client.endpoint(),
            "http://localhost:9999/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[tokio::test]
    async fn test_generate_content_sends_key_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
            .and(query_param("key", "test-key"))
            .and(body_json(serde_json::to_value(hello_request()).unwrap()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{"content": {"parts": [{"text": "Hello!"}]}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = GeminiClient::new(server.uri());
        let response = client
            .generate_content("test-key", &hello_request())
            .await
            .unwrap();
        assert_eq!(response.text(), Some("Hello!"));
    }

    #[tokio::test]
    async fn test_generate_content_returns_raw_error_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .mount(&server)
            .await;

        let client = GeminiClient::new(server.uri());
        let err = client
            .generate_content("test-key", &hello_request())
            .await
            .unwrap_err();
        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 429);
                assert_eq!(message, "rate limited");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_generate_content_rejects_non_json_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = GeminiClient::new(server.uri());
        let err = client
            .generate_content("test-key", &hello_request())
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::Parse(_)));
    }
}
