//! JSON item API
//!
//! Invalid payloads never reach these handlers: [`ValidatedJson`] answers them
//! with a 400 and the list of failure records.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use shared::validation::{check_id_matches, Failures, RuleGroup, SaveCheck, UpdateCheck};
use shared::{Item, ItemForm};

use crate::{
    error::{ApiError, ApiResult},
    metrics,
    state::AppState,
    validation::{ValidatedJson, ValidationRejection},
};

pub async fn add_item(
    State(state): State<AppState>,
    ValidatedJson(form, _): ValidatedJson<ItemForm, SaveCheck>,
) -> Json<Item> {
    let saved = state.store.create(form.into_item()).await;
    metrics::ITEMS_CREATED.inc();
    tracing::info!(item_id = ?saved.id, "item created via api");
    Json(saved)
}

pub async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    Json(state.store.find_all().await)
}

pub async fn get_item(State(state): State<AppState>, Path(id): Path<u64>) -> ApiResult<Json<Item>> {
    state
        .store
        .find_by_id(id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::item_not_found(id))
}

pub async fn edit_item(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    ValidatedJson(form, _): ValidatedJson<ItemForm, UpdateCheck>,
) -> ApiResult<Response> {
    let mut failures = Failures::new();
    check_id_matches(&form, id, &mut failures);
    if !failures.is_empty() {
        let rejection = ValidationRejection::Invalid {
            group: RuleGroup::Update,
            failures,
        };
        return Ok(rejection.into_response());
    }

    let updated = state.store.update(id, form.into_item()).await?;
    metrics::ITEMS_UPDATED.inc();
    tracing::info!(item_id = id, "item updated via api");
    Ok(Json(updated).into_response())
}
