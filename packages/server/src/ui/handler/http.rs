//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State};
use spark_shared::time::timestamp_to_rfc3339;

use crate::{infrastructure::dto::http::ConnectionSummaryDto, ui::state::AppState};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// List live connections, oldest first
pub async fn list_connections(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<ConnectionSummaryDto>> {
    let mut connections = state.repository.all().await;
    connections.sort_by(|a, b| {
        a.connected_at
            .cmp(&b.connected_at)
            .then_with(|| a.id.cmp(&b.id))
    });

    let summaries = connections
        .into_iter()
        .map(|c| ConnectionSummaryDto {
            connected_at: timestamp_to_rfc3339(c.connected_at.value()),
            id: c.id.into_string(),
        })
        .collect();

    Json(summaries)
}
