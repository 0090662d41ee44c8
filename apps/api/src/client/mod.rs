//! Chat client for the relay endpoint, the widget side of `POST /api/chat`.
//!
//! A `ChatSession` owns one in-memory transcript and allows at most one
//! outstanding relay call at a time. Failures never reach the transcript as raw
//! errors: they collapse into a single fallback assistant turn.
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::chat::models::{ChatMessage, DEFAULT_REPLY};
use crate::chat::prompts::build_system_prompt;
use crate::content::{Portfolio, PORTFOLIO};

/// Assistant turn appended when the relay call fails for any reason.
pub const FALLBACK_REPLY: &str = "Sorry, something went wrong. Please try again later.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SendError {
    #[error("Message is empty")]
    EmptyInput,

    #[error("A message is already being sent")]
    InFlight,
}

#[derive(Debug, Serialize)]
struct RelayRequest<'a> {
    messages: Vec<&'a ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct RelayReply {
    content: Option<String>,
}

/// One page session's worth of chat.
pub struct ChatSession {
    client: Client,
    endpoint: String,
    portfolio: &'static Portfolio,
    transcript: Mutex<Vec<ChatMessage>>,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag when the send completes or is dropped.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl ChatSession {
    /// `endpoint` is the full relay URL, e.g. `http://localhost:8080/api/chat`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            portfolio: &PORTFOLIO,
            transcript: Mutex::new(Vec::new()),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn with_portfolio(mut self, portfolio: &'static Portfolio) -> Self {
        self.portfolio = portfolio;
        self
    }

    /// Snapshot of the transcript in send order. Never contains the system prompt.
    pub fn transcript(&self) -> Vec<ChatMessage> {
        self.lock_transcript().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Sends one user turn and appends the assistant's reply.
    ///
    /// Empty input and sends made while another is outstanding are rejected
    /// without touching the transcript. Every accepted send appends exactly two
    /// turns: the user message and an assistant message (the reply, or the
    /// fallback on failure).
    pub async fn send(&self, input: &str) -> Result<ChatMessage, SendError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(SendError::EmptyInput);
        }

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(SendError::InFlight);
        }
        let _guard = InFlightGuard(&self.in_flight);

        let history = {
            let mut transcript = self.lock_transcript();
            transcript.push(ChatMessage::user(trimmed));
            transcript.clone()
        };

        let content = match self.request_reply(&history).await {
            Ok(content) => content,
            Err(e) => {
                warn!("Chat relay call failed: {e:#}");
                FALLBACK_REPLY.to_string()
            }
        };

        let reply = ChatMessage::assistant(content);
        self.lock_transcript().push(reply.clone());
        Ok(reply)
    }

    async fn request_reply(&self, history: &[ChatMessage]) -> anyhow::Result<String> {
        let system = ChatMessage::system(build_system_prompt(self.portfolio));
        let body = RelayRequest {
            messages: std::iter::once(&system).chain(history).collect(),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let reply: RelayReply = response.json().await?;
        Ok(reply
            .content
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_REPLY.to_string()))
    }

    fn lock_transcript(&self) -> std::sync::MutexGuard<'_, Vec<ChatMessage>> {
        // Never held across an await.
        self.transcript
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
