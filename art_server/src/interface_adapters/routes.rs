use crate::interface_adapters::handlers::art::generate_art;
use crate::interface_adapters::handlers::page::{health, index};
use crate::interface_adapters::state::AppState;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::sync::Arc;

pub fn app(state: Arc<AppState>, max_body_bytes: usize) -> Router {
    // Wire the HTTP routes to their handlers. Room photos arrive as data URLs,
    // so the body limit is raised well past the framework default.
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/generate-art", post(generate_art))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}
