//! Application route configuration.

use axum::{response::Json, routing::get, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use super::handlers::resource_routes;
use super::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .nest("/users", resource_routes(state.users))
        .nest("/rooms", resource_routes(state.rooms))
        // Global middleware
        .layer(TraceLayer::new_for_http())
}

/// Root endpoint
async fn root() -> &'static str {
    "Welcome to Resource API"
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Liveness probe
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}
