use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::app_state::AppState;
use crate::errors::AppError;

/// Build the main application router.
///
/// Pure function returning the complete, immutable route table; nothing is
/// registered through process-wide side effects.
pub fn app_router() -> Router<AppState> {
    Router::new()
        // Root route
        .route("/", get(root))
        // Health check of this service itself
        .route("/health", get(health_check))
        // Mesh telemetry API
        .nest("/api/v1", crate::api::routes::mesh_routes::mesh_routes())

        // Fallback handler for 404, shaped like every other failure
        .fallback(handler_404)
        .layer(CorsLayer::very_permissive())
}

// Handler for root
async fn root() -> &'static str {
    "Server is running!"
}

// Handler for health check
async fn health_check() -> &'static str {
    "OK"
}

// Handler for 404 Not Found
async fn handler_404() -> AppError {
    AppError::NotFound("the requested resource was not found".to_string())
}
