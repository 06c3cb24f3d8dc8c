//! # Routes
//!
//! Axum router configuration for the webhook gateway.
//!
//! Routes:
//! - GET  /         - Liveness probe (static text)
//! - GET  /health   - Health check (JSON)
//! - GET  /webhook  - Webhook handshake (challenge echo)
//! - POST /webhook  - Webhook event intake (always 200)
//! - POST /graphql  - GraphQL query execution

use crate::graphql;
use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - allow all origins, matching the GraphQL
    // endpoint's expected use from browser clients
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Liveness + health
        .route("/", get(handlers::liveness))
        .route("/health", get(handlers::health))
        // Webhook handshake + intake
        .route(
            "/webhook",
            get(handlers::verify_webhook).post(handlers::receive_event),
        )
        // GraphQL
        .route("/graphql", post(graphql::graphql_handler))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}
