//! API route definitions

use axum::routing::get;
use axum::routing::post;
use axum::Router;

use super::handlers::AppState;
use super::handlers::{
    self,
};

/// Create RESTful API router
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Chat endpoints
        .route("/chat", post(handlers::chat))
        .route("/suggestions", get(handlers::suggestions))
        // Knowledge base endpoints
        .route("/search", post(handlers::search))
        .route("/sections", get(handlers::list_sections))
        .route("/sections/:name", get(handlers::get_section))
        .with_state(state)
}
