use std::sync::Arc;

use crate::config::Config;
use crate::content::{Portfolio, PORTFOLIO};
use crate::llm_client::GenerativeModel;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Provider behind the chat relay. Default: GeminiClient.
    pub llm: Arc<dyn GenerativeModel>,
    pub portfolio: &'static Portfolio,
}

impl AppState {
    pub fn new(config: Config, llm: Arc<dyn GenerativeModel>) -> Self {
        Self {
            config: Arc::new(config),
            llm,
            portfolio: &PORTFOLIO,
        }
    }
}
