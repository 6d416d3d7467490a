use axum::{
    routing::{get, post},
    Router,
};

use crate::{api_handlers, handlers, metrics_handler, state::AppState, view_handlers};

pub fn observability_routes() -> Router<AppState> {
    Router::new().route("/metrics", get(metrics_handler::metrics_endpoint))
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health_check))
}

/// Server-rendered item pages
pub fn item_view_routes() -> Router<AppState> {
    Router::new()
        .route("/validation/v4/items", get(view_handlers::list_items))
        .route(
            "/validation/v4/items/add",
            get(view_handlers::add_form).post(view_handlers::add_item),
        )
        .route("/validation/v4/items/:id", get(view_handlers::get_item))
        .route(
            "/validation/v4/items/:id/edit",
            get(view_handlers::edit_form).post(view_handlers::edit_item),
        )
}

/// JSON item API
pub fn item_api_routes() -> Router<AppState> {
    Router::new()
        .route("/validation/api/items", get(api_handlers::list_items))
        .route("/validation/api/items/add", post(api_handlers::add_item))
        .route("/validation/api/items/:id", get(api_handlers::get_item))
        .route("/validation/api/items/:id/edit", post(api_handlers::edit_item))
}
