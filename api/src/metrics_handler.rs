use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;

use crate::metrics;
use crate::state::AppState;

pub async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let body = metrics::gather_metrics(&state.registry);
    (
        StatusCode::OK,
        [(
            header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observability::Observability;
    use shared::InMemoryItemStore;
    use std::sync::Arc;

    fn test_state() -> AppState {
        AppState::new(
            Arc::new(InMemoryItemStore::new()),
            Observability::registry().unwrap(),
        )
    }

    #[tokio::test]
    async fn test_metrics_endpoint_returns_200() {
        let resp = metrics_endpoint(State(test_state())).await.into_response();

        assert_eq!(resp.status(), StatusCode::OK);
        let ct = resp
            .headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(ct.contains("text/plain"));
    }

    #[tokio::test]
    async fn test_metrics_endpoint_contains_metric_families() {
        let state = test_state();
        metrics::ITEMS_CREATED.inc();
        metrics::observe_http("GET", "/health", 200, 0.001);

        let resp = metrics_endpoint(State(state)).await.into_response();

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.contains("http_requests_total"));
        assert!(text.contains("items_created_total"));
        assert!(text.contains("# TYPE"));
    }
}
