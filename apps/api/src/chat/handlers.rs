//! Axum route handlers for the chat relay.

use anyhow::Context;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    Json,
};
use serde_json::Value;
use tracing::debug;

use crate::chat::models::{ChatReply, DEFAULT_REPLY};
use crate::chat::transform::build_generate_request;
use crate::errors::AppError;
use crate::state::AppState;

/// Largest chat request body accepted, in bytes.
pub const MAX_CHAT_BODY_BYTES: usize = 8 * 1024 * 1024;

/// POST /api/chat
///
/// Relays one chat turn to Gemini: validate → transform → call → normalize.
/// Holds no state between calls; every failure becomes a JSON error envelope.
pub async fn handle_chat(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ChatReply>, AppError> {
    let api_key = state.config.api_key().ok_or(AppError::ApiKeyMissing)?;

    let body = body?;
    let messages = parse_messages(&body)?;
    let request = build_generate_request(&messages);

    debug!(
        "Relaying chat turn: messages={}, contents={}, system_instruction={}",
        messages.len(),
        request.contents.len(),
        request.system_instruction.is_some()
    );

    let response = state.llm.generate_content(api_key, &request).await?;

    let content = response.text().unwrap_or(DEFAULT_REPLY).to_string();
    Ok(Json(ChatReply { content }))
}

/// Any method other than POST on /api/chat.
pub async fn handle_method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Extracts `messages` from a raw request body.
///
/// A body that is not JSON is an internal failure; a JSON body whose
/// `messages` is missing or not an array is an invalid payload. Entries are
/// returned as-is, without any per-message checks.
pub fn parse_messages(body: &[u8]) -> Result<Vec<Value>, AppError> {
    let payload: Value =
        serde_json::from_slice(body).context("chat request body is not valid JSON")?;

    match payload {
        Value::Object(mut fields) => match fields.remove("messages") {
            Some(Value::Array(messages)) => Ok(messages),
            _ => Err(AppError::InvalidPayload),
        },
        _ => Err(AppError::InvalidPayload),
    }
}
