pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Match API
        .route("/api/v1/match/local", post(handlers::handle_local_match))
        .route("/api/v1/match/rank", post(handlers::handle_rank))
        // Analysis API
        .route("/api/v1/analyze/role", post(handlers::handle_detect_role))
        .route("/api/v1/analyze/keywords", post(handlers::handle_keywords))
        .route("/api/v1/analyze/sections", post(handlers::handle_sections))
        .with_state(state)
}
