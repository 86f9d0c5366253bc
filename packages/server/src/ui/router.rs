//! Router construction.

use std::sync::Arc;

use axum::{Router, http::Method, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::{
    handler::{health_check, list_connections, websocket_handler},
    state::AppState,
};

/// Build the application router
pub fn create_app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(state.allowed_origin.clone())
        .allow_methods([Method::GET]);

    Router::new()
        .route("/ws", get(websocket_handler))
        .route("/api/health", get(health_check))
        .route("/api/connections", get(list_connections))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
