pub mod health;

use axum::{extract::DefaultBodyLimit, routing::get, routing::post, Router};

use crate::chat::handlers as chat;
use crate::portfolio::handlers as portfolio;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Chat relay
        .route(
            "/api/chat",
            post(chat::handle_chat)
                .fallback(chat::handle_method_not_allowed)
                .layer(DefaultBodyLimit::max(chat::MAX_CHAT_BODY_BYTES)),
        )
        // Portfolio content
        .route("/api/portfolio", get(portfolio::handle_get_portfolio))
        .route(
            "/api/portfolio/profile",
            get(portfolio::handle_get_profile),
        )
        .route(
            "/api/portfolio/experience",
            get(portfolio::handle_get_experience),
        )
        .route("/api/portfolio/skills", get(portfolio::handle_get_skills))
        .route(
            "/api/portfolio/projects",
            get(portfolio::handle_get_projects),
        )
        .with_state(state)
}
