use anyhow::{Context, Result};

/// Default host for the Gemini generative-language API.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Application configuration loaded from environment variables.
/// A missing Gemini key does not fail startup; each chat request reports it.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub gemini_base_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            gemini_base_url: optional_env("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Builds a config without touching the process environment.
    pub fn new(gemini_api_key: Option<String>, gemini_base_url: impl Into<String>) -> Self {
        Config {
            gemini_api_key,
            gemini_base_url: gemini_base_url.into(),
            port: 8080,
            rust_log: "info".to_string(),
        }
    }

    /// The configured key, treating an empty value as absent.
    pub fn api_key(&self) -> Option<&str> {
        self.gemini_api_key.as_deref().filter(|k| !k.trim().is_empty())
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
