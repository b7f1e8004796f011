pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::render::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Render API
        .route("/api/v1/render", post(handlers::handle_render))
        .route("/api/v1/render/outline", post(handlers::handle_outline))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
