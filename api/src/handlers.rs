use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::{error::ApiError, state::AppState};

pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let uptime = state.started_at.elapsed().as_secs();
    let now = chrono::Utc::now().to_rfc3339();
    let items = state.store.find_all().await.len();

    tracing::debug!(uptime_secs = uptime, items, "health check passed");
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": now,
            "uptime_secs": uptime,
            "items": items
        })),
    )
}

pub async fn route_not_found() -> impl IntoResponse {
    ApiError::not_found("RouteNotFound", "Route not found")
}
