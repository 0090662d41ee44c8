pub mod chat;
pub mod client;
pub mod config;
pub mod content;
pub mod errors;
pub mod llm_client;
pub mod portfolio;
pub mod routes;
pub mod state;
