//! OpenAI-style transcript → Gemini `generateContent` request.
//!
//! Pure and deterministic: the same messages always produce the same body.
//! Entries are taken as raw JSON. Only `role` is inspected; `content` is
//! forwarded untouched, so malformed entries surface as provider rejections.

use serde_json::Value;

use crate::chat::models::{ROLE_ASSISTANT, ROLE_SYSTEM};
use crate::llm_client::{
    Content, GenerateContentRequest, GenerationConfig, Part, ProviderRole, SystemInstruction,
};

/// Output cap for every chat reply. Not caller-configurable.
pub const MAX_OUTPUT_TOKENS: u32 = 500;
/// Sampling temperature for every chat reply. Not caller-configurable.
pub const TEMPERATURE: f64 = 0.7;

/// `assistant` becomes `model`; every other role, known or not, becomes `user`.
pub fn provider_role(role: Option<&str>) -> ProviderRole {
    if role == Some(ROLE_ASSISTANT) {
        ProviderRole::Model
    } else {
        ProviderRole::User
    }
}

fn role_of(entry: &Value) -> Option<&str> {
    entry.get("role").and_then(Value::as_str)
}

fn is_system(entry: &Value) -> bool {
    role_of(entry) == Some(ROLE_SYSTEM)
}

fn content_part(entry: &Value) -> Part {
    Part {
        text: entry.get("content").cloned(),
    }
}

/// Builds the provider body for one relay call.
///
/// The first `system` entry becomes `systemInstruction`; every `system`
/// entry is dropped from `contents`. Without a system entry the instruction
/// is left out entirely.
pub fn build_generate_request(messages: &[Value]) -> GenerateContentRequest {
    let system_instruction = messages
        .iter()
        .find(|m| is_system(m))
        .map(|m| SystemInstruction {
            parts: vec![content_part(m)],
        });

    let contents = messages
        .iter()
        .filter(|m| !is_system(m))
        .map(|m| Content {
            role: provider_role(role_of(m)),
            parts: vec![content_part(m)],
        })
        .collect();

    GenerateContentRequest {
        contents,
        generation_config: GenerationConfig {
            max_output_tokens: MAX_OUTPUT_TOKENS,
            temperature: TEMPERATURE,
        },
        system_instruction,
    }
}
