use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use portfolio_api::config::Config;
use portfolio_api::llm_client::{self, GeminiClient};
use portfolio_api::routes::build_router;
use portfolio_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; only a malformed PORT is fatal
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("portfolio_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portfolio API v{}", env!("CARGO_PKG_VERSION"));

    if config.api_key().is_none() {
        warn!("GEMINI_API_KEY is not set; /api/chat will answer 500 until it is configured");
    }

    // Initialize LLM client
    let llm = GeminiClient::new(config.gemini_base_url.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let port = config.port;
    let state = AppState::new(config, Arc::new(llm));

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{port}").parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
