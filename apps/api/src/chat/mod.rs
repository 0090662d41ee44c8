// Chat relay: OpenAI-style transcript in, Gemini call, `{content}` out.
// All provider calls go through llm_client.

pub mod handlers;
pub mod models;
pub mod prompts;
pub mod transform;
